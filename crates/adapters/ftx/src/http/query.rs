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


//! Builder types for FTX order parameters.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::common::enums::{FtxOrderSide, FtxOrderType};

/// Body parameters for `POST /api/orders`.
///
/// Leave `price` unset for market orders.
///
/// # References
/// - <https://docs.ftx.com/#place-order>
#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into, strip_option), default)]
pub struct FtxPlaceOrderParams {
    pub market: String,
    pub side: FtxOrderSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub size: f64,
    #[serde(rename = "type")]
    pub order_type: FtxOrderType,
    pub reduce_only: bool,
    pub ioc: bool,
    pub post_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl Default for FtxPlaceOrderParams {
    fn default() -> Self {
        Self {
            market: String::new(),
            side: FtxOrderSide::Buy,
            price: None,
            size: 0.0,
            order_type: FtxOrderType::Limit,
            reduce_only: false,
            ioc: false,
            post_only: false,
            client_id: None,
        }
    }
}

/// Query parameters for `GET /api/orders/history`.
///
/// Times are unix seconds.
#[derive(Clone, Debug, Default, Deserialize, Serialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct FtxOrderHistoryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<FtxOrderSide>,
    #[serde(rename = "orderType", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<FtxOrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
