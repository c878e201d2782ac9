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


//! Enumerations that model the Bybit string enums used in REST payloads.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Environments supported by the Bybit API stack.
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
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum BybitEnvironment {
    /// Live trading environment.
    #[default]
    Mainnet,
    /// Demo (paper trading) environment.
    Demo,
    /// Testnet environment for spot/derivatives.
    Testnet,
}

/// Product categories supported by the v5 API.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum BybitProductType {
    #[default]
    Spot,
    Linear,
    Inverse,
    Option,
}

/// Account type enumeration.
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
#[serde(rename_all = "UPPERCASE")]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum BybitAccountType {
    Unified,
    Contract,
    Spot,
}

/// Available kline intervals.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Display, AsRefStr, EnumString, Serialize, Deserialize,
)]
pub enum BybitKlineInterval {
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    Minute1,
    #[serde(rename = "3")]
    #[strum(serialize = "3")]
    Minute3,
    #[serde(rename = "5")]
    #[strum(serialize = "5")]
    Minute5,
    #[serde(rename = "15")]
    #[strum(serialize = "15")]
    Minute15,
    #[serde(rename = "30")]
    #[strum(serialize = "30")]
    Minute30,
    #[serde(rename = "60")]
    #[strum(serialize = "60")]
    Hour1,
    #[serde(rename = "120")]
    #[strum(serialize = "120")]
    Hour2,
    #[serde(rename = "240")]
    #[strum(serialize = "240")]
    Hour4,
    #[serde(rename = "360")]
    #[strum(serialize = "360")]
    Hour6,
    #[serde(rename = "720")]
    #[strum(serialize = "720")]
    Hour12,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    Day1,
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Week1,
    #[serde(rename = "M")]
    #[strum(serialize = "M")]
    Month1,
}

/// Order side enumeration.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Display, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum BybitOrderSide {
    #[serde(rename = "Buy")]
    Buy,
    #[serde(rename = "Sell")]
    Sell,
}

/// Venue order type enumeration.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Display, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum BybitOrderType {
    #[serde(rename = "Market")]
    Market,
    #[serde(rename = "Limit")]
    Limit,
}

/// Time-in-force enumeration.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Display, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum BybitTimeInForce {
    #[serde(rename = "GTC")]
    #[strum(serialize = "GTC")]
    Gtc,
    #[serde(rename = "IOC")]
    #[strum(serialize = "IOC")]
    Ioc,
    #[serde(rename = "FOK")]
    #[strum(serialize = "FOK")]
    Fok,
    #[serde(rename = "PostOnly")]
    #[strum(serialize = "PostOnly")]
    PostOnly,
}

/// Margin mode used when switching the unified account risk profile.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BybitMarginMode {
    IsolatedMargin,
    RegularMargin,
    PortfolioMargin,
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_product_type_wire_format() {
        assert_eq!(BybitProductType::Linear.to_string(), "linear");
        assert_eq!(
            serde_json::to_string(&BybitProductType::Inverse).unwrap(),
            "\"inverse\""
        );
        assert_eq!(
            BybitProductType::from_str("SPOT").unwrap(),
            BybitProductType::Spot
        );
    }

    #[rstest]
    #[case("1", BybitKlineInterval::Minute1)]
    #[case("60", BybitKlineInterval::Hour1)]
    #[case("D", BybitKlineInterval::Day1)]
    fn test_kline_interval_round_trips_through_strum_and_serde(
        #[case] raw: &str,
        #[case] interval: BybitKlineInterval,
    ) {
        assert_eq!(BybitKlineInterval::from_str(raw).unwrap(), interval);
        assert_eq!(interval.to_string(), raw);
        assert_eq!(serde_json::to_string(&interval).unwrap(), format!("\"{raw}\""));
    }

    #[rstest]
    fn test_order_enums_parse_case_insensitively() {
        assert_eq!(BybitOrderSide::from_str("buy").unwrap(), BybitOrderSide::Buy);
        assert_eq!(BybitOrderType::from_str("LIMIT").unwrap(), BybitOrderType::Limit);
        assert_eq!(BybitTimeInForce::from_str("ioc").unwrap(), BybitTimeInForce::Ioc);
        assert_eq!(
            serde_json::to_string(&BybitMarginMode::RegularMargin).unwrap(),
            "\"REGULAR_MARGIN\""
        );
    }
}
