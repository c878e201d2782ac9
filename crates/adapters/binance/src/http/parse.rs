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


//! Conversions between Binance millisecond timestamps, minute-resolution UTC dates and
//! named kline rows.

use anyhow::Context;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::models::BinanceKline;

/// Date format used for kline rows and range arguments.
pub const KLINE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats a millisecond timestamp as a UTC `YYYY-MM-DD HH:MM` date.
///
/// Returns `None` if `timestamp_ms` is outside the representable range.
#[must_use]
pub fn format_timestamp_ms(timestamp_ms: i64) -> Option<String> {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|datetime| datetime.format(KLINE_DATE_FORMAT).to_string())
}

/// Parses a UTC `YYYY-MM-DD HH:MM` date into a millisecond timestamp.
///
/// # Errors
///
/// Returns an error if `date` does not match [`KLINE_DATE_FORMAT`].
pub fn parse_date_ms(date: &str) -> anyhow::Result<i64> {
    let datetime = NaiveDateTime::parse_from_str(date, KLINE_DATE_FORMAT)
        .with_context(|| format!("invalid date '{date}', expected YYYY-MM-DD HH:MM"))?;
    Ok(datetime.and_utc().timestamp_millis())
}

/// A kline with named fields and formatted dates, without the unused trailing column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinanceFormattedKline {
    pub open_time: String,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub close_price: String,
    pub volume: String,
    pub close_time: String,
    pub quote_asset_volume: String,
    pub number_of_trades: i64,
    pub taker_buy_base_asset_volume: String,
    pub taker_buy_quote_asset_volume: String,
}

impl From<&BinanceKline> for BinanceFormattedKline {
    fn from(kline: &BinanceKline) -> Self {
        let date = |ms: i64| format_timestamp_ms(ms).unwrap_or_else(|| ms.to_string());
        Self {
            open_time: date(kline.open_time),
            open_price: kline.open.clone(),
            high_price: kline.high.clone(),
            low_price: kline.low.clone(),
            close_price: kline.close.clone(),
            volume: kline.volume.clone(),
            close_time: date(kline.close_time),
            quote_asset_volume: kline.quote_volume.clone(),
            number_of_trades: kline.trade_count,
            taker_buy_base_asset_volume: kline.taker_buy_base_volume.clone(),
            taker_buy_quote_asset_volume: kline.taker_buy_quote_volume.clone(),
        }
    }
}

/// Formats every kline, preserving order.
#[must_use]
pub fn format_klines(klines: &[BinanceKline]) -> Vec<BinanceFormattedKline> {
    klines.iter().map(BinanceFormattedKline::from).collect()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
