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


//! Data transfer objects for the array-shaped Bitfinex payloads.

use serde::{Deserialize, Serialize, de::Error};
use serde_json::Value;
use ustr::Ustr;

fn field_f64<E: Error>(row: &[Value], index: usize, name: &str) -> Result<f64, E> {
    row.get(index)
        .and_then(Value::as_f64)
        .ok_or_else(|| E::custom(format!("missing or non-numeric field {name} at index {index}")))
}

fn field_str<E: Error>(row: &[Value], index: usize, name: &str) -> Result<String, E> {
    row.get(index)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| E::custom(format!("missing or non-string field {name} at index {index}")))
}

/// Ticker for a trading pair (`t` prefixed symbol).
///
/// # References
/// - <https://docs.bitfinex.com/reference/rest-public-ticker>
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BitfinexTradingTicker {
    pub bid: f64,
    pub bid_size: f64,
    pub ask: f64,
    pub ask_size: f64,
    pub daily_change: f64,
    pub daily_change_relative: f64,
    pub last_price: f64,
    pub volume: f64,
    pub high: f64,
    pub low: f64,
}

impl<'de> Deserialize<'de> for BitfinexTradingTicker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let row: Vec<Value> = Deserialize::deserialize(deserializer)?;
        Ok(Self {
            bid: field_f64::<D::Error>(&row, 0, "BID")?,
            bid_size: field_f64::<D::Error>(&row, 1, "BID_SIZE")?,
            ask: field_f64::<D::Error>(&row, 2, "ASK")?,
            ask_size: field_f64::<D::Error>(&row, 3, "ASK_SIZE")?,
            daily_change: field_f64::<D::Error>(&row, 4, "DAILY_CHANGE")?,
            daily_change_relative: field_f64::<D::Error>(&row, 5, "DAILY_CHANGE_RELATIVE")?,
            last_price: field_f64::<D::Error>(&row, 6, "LAST_PRICE")?,
            volume: field_f64::<D::Error>(&row, 7, "VOLUME")?,
            high: field_f64::<D::Error>(&row, 8, "HIGH")?,
            low: field_f64::<D::Error>(&row, 9, "LOW")?,
        })
    }
}

/// One wallet row from `auth/r/wallets`.
///
/// # References
/// - <https://docs.bitfinex.com/reference/rest-auth-wallets>
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BitfinexWallet {
    /// `exchange`, `margin` or `funding`.
    pub wallet_type: String,
    pub currency: Ustr,
    pub balance: f64,
    pub unsettled_interest: f64,
    /// Null while the exchange is still computing it.
    pub available_balance: Option<f64>,
    pub last_change: Option<String>,
}

impl<'de> Deserialize<'de> for BitfinexWallet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let row: Vec<Value> = Deserialize::deserialize(deserializer)?;
        Ok(Self {
            wallet_type: field_str::<D::Error>(&row, 0, "WALLET_TYPE")?,
            currency: Ustr::from(field_str::<D::Error>(&row, 1, "CURRENCY")?.as_str()),
            balance: field_f64::<D::Error>(&row, 2, "BALANCE")?,
            unsettled_interest: field_f64::<D::Error>(&row, 3, "UNSETTLED_INTEREST")?,
            available_balance: row.get(4).and_then(Value::as_f64),
            last_change: row.get(5).and_then(Value::as_str).map(str::to_string),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
