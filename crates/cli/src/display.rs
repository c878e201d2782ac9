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


//! Table rendering for command output.

use serde_json::Value;
use tabled::{Table, Tabled, builder::Builder, settings::Style};

/// Renders typed rows as a rounded table.
pub fn render_table<R: Tabled>(rows: impl IntoIterator<Item = R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Renders JSON objects as a table with one column per key; missing keys render empty.
#[must_use]
pub fn render_object_rows(rows: &[Value], keys: &[&str]) -> String {
    let mut builder = Builder::default();
    builder.push_record(keys.iter().copied());
    for row in rows {
        builder.push_record(keys.iter().map(|key| cell(row.get(key))));
    }
    finish(builder)
}

/// Renders positional JSON arrays as a table, taking each column from the given index.
#[must_use]
pub fn render_array_rows(rows: &[Value], columns: &[(usize, &str)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|(_, name)| *name));
    for row in rows {
        builder.push_record(columns.iter().map(|(index, _)| cell(row.get(*index))));
    }
    finish(builder)
}

fn finish(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Debug, Tabled)]
pub struct TickerRow {
    pub symbol: String,
    #[tabled(rename = "last")]
    pub last_price: String,
    pub bid: String,
    pub ask: String,
}

#[derive(Debug, Tabled)]
pub struct CandleRow {
    #[tabled(rename = "open time")]
    pub open_time: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

#[derive(Debug, Tabled)]
pub struct BalanceRow {
    pub asset: String,
    pub free: String,
    pub total: String,
}

#[derive(Debug, Tabled)]
pub struct OrderRow {
    pub id: String,
    pub symbol: String,
    pub side: String,
    #[tabled(rename = "type")]
    pub order_type: String,
    pub price: String,
    pub quantity: String,
    pub filled: String,
    pub status: String,
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
    fn test_render_table_has_headers_and_values() {
        let rendered = render_table([BalanceRow {
            asset: "BTC".to_string(),
            free: "0.5".to_string(),
            total: "1.0".to_string(),
        }]);

        assert!(rendered.contains("asset"));
        assert!(rendered.contains("BTC"));
        assert!(rendered.contains("0.5"));
        assert!(rendered.starts_with('╭'));
    }

    #[rstest]
    fn test_render_object_rows_blank_for_missing_and_null() {
        let rows = vec![
            json!({"symbol": "BTCUSDT", "price": "100", "qty": null}),
            json!({"symbol": "ETHUSDT"}),
        ];

        let rendered = render_object_rows(&rows, &["symbol", "price", "qty"]);

        assert!(rendered.contains("BTCUSDT"));
        assert!(rendered.contains("ETHUSDT"));
        assert!(rendered.contains("100"));
        assert!(!rendered.contains("null"));
        assert!(!rendered.contains("\"BTCUSDT\""));
    }

    #[rstest]
    fn test_render_array_rows_picks_columns() {
        let rows = vec![json!([7, "tBTCUSD", 1_700_000_000_000_u64, 12, 0.5, 30000.0])];

        let rendered = render_array_rows(&rows, &[(1, "pair"), (4, "amount"), (5, "price")]);

        assert!(rendered.contains("pair"));
        assert!(rendered.contains("tBTCUSD"));
        assert!(rendered.contains("0.5"));
        assert!(rendered.contains("30000.0"));
        assert!(!rendered.contains("1700000000000"));
    }
}
