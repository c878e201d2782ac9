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


//! Enumerations for FTX order fields.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FtxOrderSide {
    Buy,
    Sell,
}

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
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FtxOrderType {
    #[default]
    Limit,
    Market,
}

/// Lifecycle state reported for an order.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FtxOrderStatus {
    New,
    Open,
    Closed,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(FtxOrderSide::Buy, "buy")]
    #[case(FtxOrderSide::Sell, "sell")]
    fn test_side_wire_format(#[case] side: FtxOrderSide, #[case] expected: &str) {
        assert_eq!(side.to_string(), expected);
        assert_eq!(serde_json::to_value(side).unwrap(), expected);
        assert_eq!(FtxOrderSide::from_str(&expected.to_uppercase()).unwrap(), side);
    }

    #[rstest]
    fn test_status_deserializes() {
        let status: FtxOrderStatus = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(status, FtxOrderStatus::Closed);
    }
}
