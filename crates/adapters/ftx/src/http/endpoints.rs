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


//! FTX REST endpoint paths.

pub const MARKETS: &str = "/api/markets";
pub const ORDERS: &str = "/api/orders";
pub const ORDERS_HISTORY: &str = "/api/orders/history";
pub const WALLET_BALANCES: &str = "/api/wallet/balances";

/// `/api/orders/{order_id}`
#[must_use]
pub fn order_path(order_id: u64) -> String {
    format!("{ORDERS}/{order_id}")
}

/// `/api/markets/{market}/orderbook`
///
/// Market names keep their slash (`BTC/USD`), which FTX routes as part of the path.
#[must_use]
pub fn orderbook_path(market: &str) -> String {
    format!("{MARKETS}/{market}/orderbook")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_paths() {
        assert_eq!(order_path(161841685389), "/api/orders/161841685389");
        assert_eq!(orderbook_path("XRP/USD"), "/api/markets/XRP/USD/orderbook");
    }
}
