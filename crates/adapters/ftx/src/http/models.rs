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


//! Data transfer objects for FTX responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::common::enums::{FtxOrderSide, FtxOrderStatus, FtxOrderType};

/// The `{"success": true, "result": ...}` envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxResponse<T> {
    pub success: bool,
    pub result: T,
    /// Set on paginated endpoints when older rows exist beyond this page.
    #[serde(default)]
    pub has_more_data: bool,
}

/// An order as returned by the order endpoints.
///
/// # References
/// - <https://docs.ftx.com/#get-open-orders>
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxOrder {
    pub id: u64,
    #[serde(default)]
    pub client_id: Option<String>,
    pub market: Ustr,
    #[serde(rename = "type")]
    pub order_type: FtxOrderType,
    pub side: FtxOrderSide,
    /// Null for market orders.
    pub price: Option<f64>,
    pub size: f64,
    #[serde(default)]
    pub filled_size: f64,
    #[serde(default)]
    pub remaining_size: f64,
    #[serde(default)]
    pub avg_fill_price: Option<f64>,
    pub status: FtxOrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub ioc: bool,
    #[serde(default)]
    pub post_only: bool,
}

impl FtxOrder {
    /// Returns true once any quantity has been executed.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.filled_size > 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxBalance {
    pub coin: Ustr,
    pub free: f64,
    pub total: f64,
    #[serde(default)]
    pub usd_value: Option<f64>,
}

/// A spot or futures market.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxMarket {
    pub name: Ustr,
    #[serde(rename = "type")]
    pub market_type: String,
    #[serde(default)]
    pub base_currency: Option<Ustr>,
    #[serde(default)]
    pub quote_currency: Option<Ustr>,
    #[serde(default)]
    pub underlying: Option<Ustr>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub bid: Option<f64>,
    #[serde(default)]
    pub ask: Option<f64>,
    #[serde(default)]
    pub last: Option<f64>,
    pub price_increment: f64,
    pub size_increment: f64,
}

/// Order book levels as `[price, size]`, best first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FtxOrderbook {
    pub bids: Vec<(f64, f64)>,
    pub asks: Vec<(f64, f64)>,
}

impl FtxOrderbook {
    #[must_use]
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|(price, _)| *price)
    }

    #[must_use]
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|(price, _)| *price)
    }
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
    fn test_order_deserializes() {
        let order: FtxOrder = serde_json::from_value(json!({
            "createdAt": "2019-03-05T09:56:55.728933+00:00",
            "filledSize": 10,
            "future": null,
            "id": 9596912,
            "market": "XRP/USD",
            "price": 0.306525,
            "avgFillPrice": 0.306526,
            "remainingSize": 31421,
            "side": "sell",
            "size": 31431,
            "status": "open",
            "type": "limit",
            "reduceOnly": false,
            "ioc": false,
            "postOnly": false,
            "clientId": null
        }))
        .unwrap();

        assert_eq!(order.id, 9_596_912);
        assert_eq!(order.market.as_str(), "XRP/USD");
        assert_eq!(order.side, FtxOrderSide::Sell);
        assert_eq!(order.status, FtxOrderStatus::Open);
        assert_eq!(order.created_at.timestamp(), 1_551_779_815);
        assert!(order.is_filled());
        assert_eq!(order.client_id, None);
    }

    #[rstest]
    fn test_envelope_has_more_data_defaults_false() {
        let response: FtxResponse<Vec<FtxBalance>> = serde_json::from_value(json!({
            "success": true,
            "result": [{"coin": "USD", "free": 4321.2, "total": 4340.2, "usdValue": 4340.2}]
        }))
        .unwrap();

        assert!(!response.has_more_data);
        assert_eq!(response.result[0].coin.as_str(), "USD");
    }

    #[rstest]
    fn test_orderbook_best_levels() {
        let book: FtxOrderbook = serde_json::from_value(json!({
            "asks": [[0.51, 100.0], [0.52, 50.0]],
            "bids": [[0.50, 80.0]]
        }))
        .unwrap();

        assert_eq!(book.best_bid(), Some(0.50));
        assert_eq!(book.best_ask(), Some(0.51));
        assert_eq!(FtxOrderbook::default().best_bid(), None);
    }
}
