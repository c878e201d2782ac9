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


//! Builder types for Binance request parameters.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::common::enums::{BinanceKlineInterval, BinanceOrderType, BinanceSide, BinanceTimeInForce};

/// Query parameters for `GET /api/v3/klines`. Times are milliseconds.
///
/// # References
/// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/market-data-endpoints>
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct BinanceKlinesParams {
    pub symbol: String,
    pub interval: BinanceKlineInterval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Defaults to 500 server side, at most 1000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Default for BinanceKlinesParams {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            interval: BinanceKlineInterval::Minute1,
            start_time: None,
            end_time: None,
            limit: None,
        }
    }
}

/// Parameters for `POST /api/v3/order`.
///
/// # References
/// - <https://developers.binance.com/docs/binance-spot-api-docs/rest-api/trading-endpoints>
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct BinanceNewOrderParams {
    pub symbol: String,
    pub side: BinanceSide,
    #[serde(rename = "type")]
    pub order_type: BinanceOrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<BinanceTimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_order_qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
}

impl Default for BinanceNewOrderParams {
    fn default() -> Self {
        Self {
            symbol: String::new(),
            side: BinanceSide::Buy,
            order_type: BinanceOrderType::Market,
            time_in_force: None,
            quantity: None,
            quote_order_qty: None,
            price: None,
            new_client_order_id: None,
            stop_price: None,
        }
    }
}

/// Parameters for `DELETE /api/v3/order`. One of the two ids is required.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct BinanceCancelOrderParams {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
