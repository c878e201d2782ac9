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

//! An insertion-ordered parameter bag for exchange requests.
//!
//! [`Params`] is encoded exactly once per request, either as a query string (GET) or a JSON body
//! (POST/DELETE), and both encodings follow the order in which keys were inserted. Signers sign the
//! encoded strings, so the order a caller builds here is the order the exchange sees.
//!
//! Query encoding rules:
//! - Strings are sent verbatim (form-urlencoded).
//! - Numbers and booleans are sent as their JSON text.
//! - Arrays repeat the key once per element.
//! - Nested objects are sent as compact JSON text.
//! - `null` values are omitted, in both the query string and the JSON body.

use indexmap::IndexMap;
use serde::{
    Serialize, Serializer,
    ser::SerializeMap,
};
use serde_json::Value;

use crate::error::RestError;

/// An ordered map of request parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(IndexMap<String, Value>);

impl Params {
    /// Creates an empty [`Params`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds [`Params`] from any serializable struct or map.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Serialization`] if `value` does not serialize to a JSON object.
    pub fn from_serializable<S: Serialize>(value: &S) -> Result<Self, RestError> {
        match serde_json::to_value(value)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            Value::Null => Ok(Self::default()),
            other => Err(RestError::Serialization(format!(
                "expected parameters to serialize to an object, was {other}"
            ))),
        }
    }

    /// Returns these params with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns these params with `key` set to `value` when it is `Some`.
    #[must_use]
    pub fn with_opt<V: Into<Value>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Sets `key` to `value`, keeping the original position if the key already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value for `key` as a string slice, if it is a JSON string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns the value for `key` as an unsigned integer.
    ///
    /// Accepts JSON numbers and numeric strings.
    #[must_use]
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Removes `key`, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of parameters (including `null` values).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no non-null parameters are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(Value::is_null)
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Encodes the parameters as a form-urlencoded query string in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Serialization`] if encoding fails.
    pub fn to_query_string(&self) -> Result<String, RestError> {
        let mut pairs: Vec<(&str, String)> = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items.iter().filter(|v| !v.is_null()) {
                        pairs.push((key.as_str(), query_scalar(item)));
                    }
                }
                other => pairs.push((key.as_str(), query_scalar(other))),
            }
        }
        serde_urlencoded::to_string(&pairs)
            .map_err(|e| RestError::Serialization(format!("failed to encode query: {e}")))
    }

    /// Encodes the parameters as a compact JSON object in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Serialization`] if encoding fails.
    pub fn to_json_body(&self) -> Result<String, RestError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn query_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<_> = self.0.iter().filter(|(_, v)| !v.is_null()).collect();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.0.insert(key.into(), value.into());
        }
    }
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
    fn test_query_preserves_insertion_order() {
        let params = Params::new()
            .with("symbol", "BTCUSDT")
            .with("category", "linear")
            .with("limit", 50);

        assert_eq!(
            params.to_query_string().unwrap(),
            "symbol=BTCUSDT&category=linear&limit=50"
        );
    }

    #[rstest]
    fn test_query_encoding_rules() {
        let params = Params::new()
            .with("flag", true)
            .with("price", 0.5)
            .with("ids", json!(["a", "b"]))
            .with("meta", json!({"k": 1}))
            .with("skip", Value::Null)
            .with("note", "a b&c");

        assert_eq!(
            params.to_query_string().unwrap(),
            "flag=true&price=0.5&ids=a&ids=b&meta=%7B%22k%22%3A1%7D&note=a+b%26c"
        );
    }

    #[rstest]
    fn test_json_body_order_and_nulls() {
        let params = Params::new()
            .with("category", "linear")
            .with("symbol", "BTCUSDT")
            .with_opt("price", None::<String>)
            .with("orderLinkId", "test-order-1")
            .with("reduceOnly", Value::Null);

        assert_eq!(
            params.to_json_body().unwrap(),
            r#"{"category":"linear","symbol":"BTCUSDT","orderLinkId":"test-order-1"}"#
        );
    }

    #[rstest]
    fn test_set_keeps_position_and_remove_shifts() {
        let mut params = Params::new().with("a", 1).with("b", 2).with("c", 3);
        params.set("a", 10);
        params.remove("b");

        assert_eq!(params.to_query_string().unwrap(), "a=10&c=3");
        assert_eq!(params.get_u64("a"), Some(10));
        assert!(!params.contains_key("b"));
    }

    #[rstest]
    fn test_is_empty_ignores_nulls() {
        let params = Params::new().with("only", Value::Null);
        assert!(params.is_empty());
        assert_eq!(params.len(), 1);
        assert_eq!(params.to_json_body().unwrap(), "{}");
    }

    #[rstest]
    fn test_from_serializable_keeps_field_order() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            category: &'static str,
            symbol: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
        }

        let params = Params::from_serializable(&Query {
            category: "spot",
            symbol: "ETHUSDT",
            limit: None,
        })
        .unwrap();

        assert_eq!(
            params.to_query_string().unwrap(),
            "category=spot&symbol=ETHUSDT"
        );
    }

    #[rstest]
    fn test_from_serializable_rejects_non_object() {
        assert!(matches!(
            Params::from_serializable(&vec![1, 2]),
            Err(RestError::Serialization(_))
        ));
    }

    #[rstest]
    fn test_get_u64_parses_numeric_strings() {
        let params = Params::new().with("limit", "25").with("name", "x");
        assert_eq!(params.get_u64("limit"), Some(25));
        assert_eq!(params.get_u64("name"), None);
        assert_eq!(params.get_str("name"), Some("x"));
    }
}
