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


//! Response envelopes shared by every Bybit v5 endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The standard v5 response envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitResponse<T> {
    /// Zero on success.
    pub ret_code: i64,
    pub ret_msg: String,
    pub result: T,
    #[serde(default)]
    pub ret_ext_info: Value,
    /// Server time in milliseconds.
    #[serde(default)]
    pub time: Option<i64>,
}

/// A `result` object holding one page of a cursor-paginated list.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitCursorList<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    /// Cursor for the next page; empty or absent on the last page.
    #[serde(default)]
    pub next_page_cursor: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl<T> BybitCursorList<T> {
    /// Returns the next page cursor, treating an empty string as absent.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_page_cursor
            .as_deref()
            .filter(|cursor| !cursor.is_empty())
    }
}

pub type BybitCursorListResponse<T> = BybitResponse<BybitCursorList<T>>;

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    fn test_cursor_list_parses_and_treats_empty_cursor_as_absent() {
        let body = json!({
            "retCode": 0,
            "retMsg": "OK",
            "result": {"category": "linear", "list": [{"orderId": "a"}], "nextPageCursor": ""},
            "retExtInfo": {},
            "time": 1_700_000_000_000_i64,
        });

        let response: BybitCursorListResponse<Value> = serde_json::from_value(body).unwrap();
        assert_eq!(response.ret_code, 0);
        assert_eq!(response.result.list.len(), 1);
        assert_eq!(response.result.next_cursor(), None);
        assert_eq!(response.result.category.as_deref(), Some("linear"));
        assert_eq!(response.time, Some(1_700_000_000_000));
    }

    #[rstest]
    fn test_cursor_list_defaults_missing_fields() {
        let list: BybitCursorList<Value> =
            serde_json::from_value(json!({"nextPageCursor": "page2"})).unwrap();
        assert!(list.list.is_empty());
        assert_eq!(list.next_cursor(), Some("page2"));
    }
}
