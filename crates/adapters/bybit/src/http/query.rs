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


//! Builder types for the Bybit REST parameters of the most frequently used endpoints.
//!
//! Every other endpoint accepts a free-form [`kestrel_rest::Params`] bag.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::common::enums::{
    BybitKlineInterval, BybitOrderSide, BybitOrderType, BybitProductType, BybitTimeInForce,
};

/// Query parameters for `GET /v5/market/kline` and the mark, index and premium index variants.
///
/// # References
/// - <https://bybit-exchange.github.io/docs/v5/market/kline>
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct BybitKlinesParams {
    pub category: BybitProductType,
    pub symbol: String,
    pub interval: BybitKlineInterval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Default for BybitKlinesParams {
    fn default() -> Self {
        Self {
            category: BybitProductType::Linear,
            symbol: String::new(),
            interval: BybitKlineInterval::Minute1,
            start: None,
            end: None,
            limit: None,
        }
    }
}

/// Body parameters for `POST /v5/order/create`.
///
/// # References
/// - <https://bybit-exchange.github.io/docs/v5/order/create-order>
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct BybitPlaceOrderParams {
    pub category: BybitProductType,
    pub symbol: String,
    pub side: BybitOrderSide,
    pub order_type: BybitOrderType,
    pub qty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<BybitTimeInForce>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
    /// `1` to borrow on spot margin, `0` otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_leverage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_idx: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<String>,
}

impl Default for BybitPlaceOrderParams {
    fn default() -> Self {
        Self {
            category: BybitProductType::Linear,
            symbol: String::new(),
            side: BybitOrderSide::Buy,
            order_type: BybitOrderType::Market,
            qty: String::new(),
            price: None,
            time_in_force: None,
            order_link_id: None,
            is_leverage: None,
            reduce_only: None,
            position_idx: None,
            take_profit: None,
            stop_loss: None,
        }
    }
}

/// Body parameters for `POST /v5/order/cancel`.
///
/// # References
/// - <https://bybit-exchange.github.io/docs/v5/order/cancel-order>
#[derive(Clone, Debug, Default, Deserialize, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct BybitCancelOrderParams {
    pub category: BybitProductType,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
