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


//! Data transfer objects for Binance responses.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::common::enums::{BinanceOrderStatus, BinanceOrderType, BinanceSide};

/// Response from `GET /api/v3/time`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceServerTime {
    /// Server timestamp in milliseconds.
    pub server_time: i64,
}

/// A kline row as sent by the exchange.
pub type BinanceKlineRaw = (
    i64,    // 0: Open time
    String, // 1: Open price
    String, // 2: High price
    String, // 3: Low price
    String, // 4: Close price
    String, // 5: Volume
    i64,    // 6: Close time
    String, // 7: Quote asset volume
    i64,    // 8: Number of trades
    String, // 9: Taker buy base asset volume
    String, // 10: Taker buy quote asset volume
    String, // 11: Ignore
);

/// Kline (candlestick) with prices kept as exchange decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BinanceKlineRaw")]
pub struct BinanceKline {
    /// Open timestamp in milliseconds.
    pub open_time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    /// Close timestamp in milliseconds.
    pub close_time: i64,
    pub quote_volume: String,
    pub trade_count: i64,
    pub taker_buy_base_volume: String,
    pub taker_buy_quote_volume: String,
}

impl From<BinanceKlineRaw> for BinanceKline {
    fn from(raw: BinanceKlineRaw) -> Self {
        Self {
            open_time: raw.0,
            open: raw.1,
            high: raw.2,
            low: raw.3,
            close: raw.4,
            volume: raw.5,
            close_time: raw.6,
            quote_volume: raw.7,
            trade_count: raw.8,
            taker_buy_base_volume: raw.9,
            taker_buy_quote_volume: raw.10,
        }
    }
}

/// Asset balance inside [`BinanceAccountInfo`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinanceBalance {
    pub asset: Ustr,
    pub free: String,
    pub locked: String,
}

/// Response from `GET /api/v3/account`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceAccountInfo {
    #[serde(default)]
    pub maker_commission: i64,
    #[serde(default)]
    pub taker_commission: i64,
    pub can_trade: bool,
    pub can_withdraw: bool,
    pub can_deposit: bool,
    #[serde(default)]
    pub update_time: i64,
    #[serde(default)]
    pub account_type: String,
    pub balances: Vec<BinanceBalance>,
}

impl BinanceAccountInfo {
    /// Returns balances with a non-zero free or locked amount.
    pub fn non_zero_balances(&self) -> impl Iterator<Item = &BinanceBalance> {
        self.balances.iter().filter(|balance| {
            [&balance.free, &balance.locked]
                .iter()
                .any(|amount| amount.parse::<f64>().is_ok_and(|value| value != 0.0))
        })
    }
}

/// An order as returned by the order placement, cancel and query endpoints.
///
/// Placement responses carry `transactTime`, queries carry `time` instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceOrder {
    pub symbol: Ustr,
    pub order_id: u64,
    #[serde(default)]
    pub client_order_id: String,
    #[serde(default)]
    pub transact_time: Option<i64>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub orig_qty: String,
    #[serde(default)]
    pub executed_qty: String,
    pub status: BinanceOrderStatus,
    #[serde(rename = "type")]
    pub order_type: BinanceOrderType,
    pub side: BinanceSide,
}

/// Interest and borrow limit for one asset of an isolated margin pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceMarginInterest {
    pub coin: Ustr,
    pub daily_interest: String,
    pub borrow_limit: String,
}

/// Row from `GET /sapi/v1/margin/isolatedMarginData`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceIsolatedMarginData {
    pub vip_level: u32,
    pub symbol: Ustr,
    pub leverage: String,
    pub data: Vec<BinanceMarginInterest>,
}

/// Row from `GET /sapi/v1/margin/isolatedMarginTier`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceIsolatedMarginTier {
    pub symbol: Ustr,
    pub tier: u32,
    pub effective_multiple: String,
    pub initial_risk_ratio: String,
    pub liquidation_risk_ratio: String,
    pub base_asset_max_borrowable: String,
    pub quote_asset_max_borrowable: String,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_kline_from_row() {
        let klines: Vec<BinanceKline> = serde_json::from_value(json!([[
            1499040000000_i64,
            "0.01634790",
            "0.80000000",
            "0.01575800",
            "0.01577100",
            "148976.11427815",
            1499644799999_i64,
            "2434.19055334",
            308,
            "1756.87402397",
            "28.46694368",
            "0"
        ]]))
        .unwrap();

        assert_eq!(klines[0].open_time, 1_499_040_000_000);
        assert_eq!(klines[0].close, "0.01577100");
        assert_eq!(klines[0].trade_count, 308);
    }

    #[rstest]
    fn test_isolated_margin_data() {
        let rows: Vec<BinanceIsolatedMarginData> = serde_json::from_value(json!([{
            "vipLevel": 0,
            "symbol": "BTCUSDT",
            "leverage": "10",
            "data": [
                {"coin": "BTC", "dailyInterest": "0.00026125", "borrowLimit": "270"},
                {"coin": "USDT", "dailyInterest": "0.000475", "borrowLimit": "2100000"}
            ]
        }]))
        .unwrap();

        assert_eq!(rows[0].data[0].daily_interest, "0.00026125");
        assert_eq!(rows[0].data[1].coin.as_str(), "USDT");
    }

    #[rstest]
    fn test_account_non_zero_balances() {
        let account: BinanceAccountInfo = serde_json::from_value(json!({
            "makerCommission": 10,
            "takerCommission": 10,
            "canTrade": true,
            "canWithdraw": true,
            "canDeposit": true,
            "updateTime": 123456789,
            "accountType": "SPOT",
            "balances": [
                {"asset": "BTC", "free": "0.00100000", "locked": "0.00000000"},
                {"asset": "LTC", "free": "0.00000000", "locked": "0.00000000"},
                {"asset": "ETH", "free": "0.00000000", "locked": "1.50000000"}
            ]
        }))
        .unwrap();

        let assets: Vec<&str> = account.non_zero_balances().map(|b| b.asset.as_str()).collect();
        assert_eq!(assets, vec!["BTC", "ETH"]);
    }
}
