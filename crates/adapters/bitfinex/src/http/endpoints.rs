// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------


//! Bitfinex v2 REST endpoint paths.

// Public (api-pub host)
pub const TICKER: &str = "/v2/ticker";
pub const BOOK: &str = "/v2/book";

// Authenticated (api host)
pub const WALLETS: &str = "/v2/auth/r/wallets";
pub const WALLETS_HISTORY: &str = "/v2/auth/r/wallets/hist";
pub const ORDERS: &str = "/v2/auth/r/orders";
pub const ORDER_SUBMIT: &str = "/v2/auth/w/order/submit";
pub const ORDER_UPDATE: &str = "/v2/auth/w/order/update";
pub const ORDER_CANCEL: &str = "/v2/auth/w/order/cancel";
pub const TRADES: &str = "/v2/auth/r/trades";
pub const POSITIONS: &str = "/v2/auth/r/positions";
pub const POSITIONS_HISTORY: &str = "/v2/auth/r/positions/hist";

/// `/v2/ticker/{symbol}`
#[must_use]
pub fn ticker_path(symbol: &str) -> String {
    format!("{TICKER}/{symbol}")
}

/// `/v2/book/{symbol}/{precision}`
#[must_use]
pub fn book_path(symbol: &str, precision: &str) -> String {
    format!("{BOOK}/{symbol}/{precision}")
}

/// `/v2/auth/r/orders` or `/v2/auth/r/orders/{symbol}`
#[must_use]
pub fn active_orders_path(symbol: Option<&str>) -> String {
    match symbol {
        Some(symbol) => format!("{ORDERS}/{symbol}"),
        None => ORDERS.to_string(),
    }
}

/// `/v2/auth/r/orders/hist` or `/v2/auth/r/orders/{symbol}/hist`
#[must_use]
pub fn orders_history_path(symbol: Option<&str>) -> String {
    format!("{}/hist", active_orders_path(symbol))
}

/// `/v2/auth/r/trades/hist` or `/v2/auth/r/trades/{symbol}/hist`
#[must_use]
pub fn trades_history_path(symbol: Option<&str>) -> String {
    match symbol {
        Some(symbol) => format!("{TRADES}/{symbol}/hist"),
        None => format!("{TRADES}/hist"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_paths() {
        assert_eq!(ticker_path("tBTCUSD"), "/v2/ticker/tBTCUSD");
        assert_eq!(book_path("tBTCUSD", "P0"), "/v2/book/tBTCUSD/P0");
        assert_eq!(active_orders_path(None), "/v2/auth/r/orders");
        assert_eq!(orders_history_path(Some("tETHUSD")), "/v2/auth/r/orders/tETHUSD/hist");
        assert_eq!(orders_history_path(None), "/v2/auth/r/orders/hist");
        assert_eq!(trades_history_path(None), "/v2/auth/r/trades/hist");
        assert_eq!(trades_history_path(Some("tBTCUSD")), "/v2/auth/r/trades/tBTCUSD/hist");
    }
}
