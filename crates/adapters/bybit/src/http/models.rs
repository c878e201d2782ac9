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


//! Data transfer objects for the typed Bybit HTTP endpoints.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::common::{
    enums::BybitProductType,
    models::{BybitCursorListResponse, BybitResponse},
};

/// Response payload returned by `GET /v5/market/time`.
///
/// # References
/// - <https://bybit-exchange.github.io/docs/v5/market/time>
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitServerTime {
    /// Server timestamp in seconds represented as string.
    pub time_second: String,
    /// Server timestamp in nanoseconds represented as string.
    pub time_nano: String,
}

/// Type alias for the server time response envelope.
pub type BybitServerTimeResponse = BybitResponse<BybitServerTime>;

/// Ticker fields common to every product category.
///
/// # References
/// - <https://bybit-exchange.github.io/docs/v5/market/tickers>
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitTicker {
    pub symbol: Ustr,
    pub last_price: String,
    #[serde(default)]
    pub bid1_price: String,
    #[serde(default)]
    pub ask1_price: String,
    #[serde(default)]
    pub price24h_pcnt: String,
    #[serde(default)]
    pub high_price24h: String,
    #[serde(default)]
    pub low_price24h: String,
    #[serde(default)]
    pub volume24h: String,
    #[serde(default)]
    pub turnover24h: String,
}

pub type BybitTickersResponse = BybitCursorListResponse<BybitTicker>;

/// Kline/candlestick entry returned by `GET /v5/market/kline`.
///
/// Bybit returns klines as arrays with 7 elements:
/// [startTime, openPrice, highPrice, lowPrice, closePrice, volume, turnover]
///
/// # References
/// - <https://bybit-exchange.github.io/docs/v5/market/kline>
#[derive(Clone, Debug, Serialize)]
pub struct BybitKline {
    pub start: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub turnover: String,
}

impl<'de> Deserialize<'de> for BybitKline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let [start, open, high, low, close, volume, turnover]: [String; 7] =
            Deserialize::deserialize(deserializer)?;
        Ok(Self {
            start,
            open,
            high,
            low,
            close,
            volume,
            turnover,
        })
    }
}

/// Kline list result returned by Bybit.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitKlineResult {
    pub category: BybitProductType,
    pub symbol: Ustr,
    pub list: Vec<BybitKline>,
}

/// Response alias for kline history requests.
pub type BybitKlinesResponse = BybitResponse<BybitKlineResult>;

/// Identifiers returned when an order is created, amended or cancelled.
///
/// # References
/// - <https://bybit-exchange.github.io/docs/v5/order/create-order>
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitOrderIdResult {
    pub order_id: Option<Ustr>,
    pub order_link_id: Option<Ustr>,
}

pub type BybitPlaceOrderResponse = BybitResponse<BybitOrderIdResult>;
pub type BybitCancelOrderResponse = BybitResponse<BybitOrderIdResult>;

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_kline_from_array() {
        let response: BybitKlinesResponse = serde_json::from_value(json!({
            "retCode": 0,
            "retMsg": "OK",
            "result": {
                "category": "linear",
                "symbol": "BTCUSDT",
                "list": [["1700000000000", "100", "110", "90", "105", "12.5", "1312.5"]]
            },
            "retExtInfo": {},
            "time": 1_700_000_000_500_i64
        }))
        .unwrap();

        let kline = &response.result.list[0];
        assert_eq!(response.result.category, BybitProductType::Linear);
        assert_eq!(kline.start, "1700000000000");
        assert_eq!(kline.close, "105");
        assert_eq!(kline.turnover, "1312.5");
    }

    #[rstest]
    fn test_kline_rejects_short_array() {
        let result: Result<BybitKline, _> = serde_json::from_value(json!(["1", "2", "3"]));
        assert!(result.is_err());
    }

    #[rstest]
    fn test_ticker_tolerates_category_specific_fields() {
        let ticker: BybitTicker = serde_json::from_value(json!({
            "symbol": "BTCUSDT",
            "lastPrice": "65000.5",
            "markPrice": "65001",
            "fundingRate": "0.0001"
        }))
        .unwrap();
        assert_eq!(ticker.symbol.as_str(), "BTCUSDT");
        assert_eq!(ticker.last_price, "65000.5");
        assert!(ticker.bid1_price.is_empty());
    }
}
