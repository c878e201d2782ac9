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


//! Enumerations for Binance request and response fields.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Binance deployment to connect to.
#[derive(
    Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BinanceEnvironment {
    #[default]
    Mainnet,
    Testnet,
}

/// Kline (candlestick) interval.
#[derive(
    Copy,
    Clone,
    Debug,
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
pub enum BinanceKlineInterval {
    #[serde(rename = "1s")]
    #[strum(serialize = "1s")]
    Second1,
    #[serde(rename = "1m")]
    #[strum(serialize = "1m")]
    Minute1,
    #[serde(rename = "3m")]
    #[strum(serialize = "3m")]
    Minute3,
    #[serde(rename = "5m")]
    #[strum(serialize = "5m")]
    Minute5,
    #[serde(rename = "15m")]
    #[strum(serialize = "15m")]
    Minute15,
    #[serde(rename = "30m")]
    #[strum(serialize = "30m")]
    Minute30,
    #[serde(rename = "1h")]
    #[strum(serialize = "1h")]
    Hour1,
    #[serde(rename = "2h")]
    #[strum(serialize = "2h")]
    Hour2,
    #[serde(rename = "4h")]
    #[strum(serialize = "4h")]
    Hour4,
    #[serde(rename = "6h")]
    #[strum(serialize = "6h")]
    Hour6,
    #[serde(rename = "8h")]
    #[strum(serialize = "8h")]
    Hour8,
    #[serde(rename = "12h")]
    #[strum(serialize = "12h")]
    Hour12,
    #[serde(rename = "1d")]
    #[strum(serialize = "1d")]
    Day1,
    #[serde(rename = "3d")]
    #[strum(serialize = "3d")]
    Day3,
    #[serde(rename = "1w")]
    #[strum(serialize = "1w")]
    Week1,
    #[serde(rename = "1M")]
    #[strum(serialize = "1M")]
    Month1,
}

/// Order side.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BinanceSide {
    Buy,
    Sell,
}

/// Spot order type.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinanceOrderType {
    Limit,
    Market,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
    LimitMaker,
}

#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BinanceTimeInForce {
    Gtc,
    Ioc,
    Fok,
}

/// Order lifecycle status.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BinanceOrderStatus {
    New,
    PendingNew,
    PartiallyFilled,
    Filled,
    Canceled,
    PendingCancel,
    Rejected,
    Expired,
    ExpiredInMatch,
    /// Unknown or undocumented value.
    #[serde(other)]
    Unknown,
}
