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


//! Enumerations for Bitfinex request parameters.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Order book aggregation level.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BitfinexBookPrecision {
    #[default]
    P0,
    P1,
    P2,
    P3,
    P4,
    /// Raw (non-aggregated) book.
    R0,
}

/// Order types accepted by `auth/w/order/submit`.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum BitfinexOrderType {
    #[serde(rename = "LIMIT")]
    #[strum(serialize = "LIMIT")]
    Limit,
    #[serde(rename = "EXCHANGE LIMIT")]
    #[strum(serialize = "EXCHANGE LIMIT")]
    ExchangeLimit,
    #[serde(rename = "MARKET")]
    #[strum(serialize = "MARKET")]
    Market,
    #[serde(rename = "EXCHANGE MARKET")]
    #[strum(serialize = "EXCHANGE MARKET")]
    ExchangeMarket,
    #[serde(rename = "STOP")]
    #[strum(serialize = "STOP")]
    Stop,
    #[serde(rename = "EXCHANGE STOP")]
    #[strum(serialize = "EXCHANGE STOP")]
    ExchangeStop,
}
