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

//! Response bodies and business-level failure detection.

use std::{collections::HashMap, fmt::Display};

use serde_json::Value;

/// A response body, parsed as JSON when possible.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The raw body when it is not valid JSON.
    Text(String),
}

impl ApiBody {
    /// Parses `bytes` as JSON, falling back to lossy UTF-8 text.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    /// Returns the JSON value, if the body parsed.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

impl Display for ApiBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// The outcome of one completed HTTP exchange.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The canonical reason phrase for `status`.
    pub reason: String,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: ApiBody,
}

impl ApiResponse {
    /// Returns true if the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// A failure reported by an exchange inside a successful HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusinessError {
    pub code: Option<i64>,
    pub message: String,
}

impl BusinessError {
    /// Creates a new [`BusinessError`].
    #[must_use]
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Detects exchange-specific failures embedded in 2xx response bodies.
pub trait ResponseValidator: Send + Sync + std::fmt::Debug {
    /// Returns the failure described by `body`, or `None` if the body reports success.
    fn check(&self, body: &Value) -> Option<BusinessError>;
}

/// Recognizes the common envelope conventions.
///
/// - `{"success": false, "error": ...}`
/// - `{"retCode": <non-zero>, "retMsg": ...}`
/// - `{"code": <negative>, "msg": ...}`
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericValidator;

impl ResponseValidator for GenericValidator {
    fn check(&self, body: &Value) -> Option<BusinessError> {
        check_success_flag(body)
            .or_else(|| check_ret_code(body))
            .or_else(|| check_negative_code(body))
    }
}

/// Returns a failure if `body.success` is `false`, with `body.error` as the message.
#[must_use]
pub fn check_success_flag(body: &Value) -> Option<BusinessError> {
    if body.get("success").and_then(Value::as_bool) != Some(false) {
        return None;
    }

    let message = match body.get("error") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "request failed".to_string(),
        Some(other) => other.to_string(),
    };
    Some(BusinessError::new(None, message))
}

/// Returns a failure if `body.retCode` is present and non-zero, with `body.retMsg` as the message.
#[must_use]
pub fn check_ret_code(body: &Value) -> Option<BusinessError> {
    let code = body.get("retCode").and_then(Value::as_i64)?;
    if code == 0 {
        return None;
    }

    let message = body
        .get("retMsg")
        .and_then(Value::as_str)
        .unwrap_or_default();
    Some(BusinessError::new(Some(code), message))
}

/// Returns a failure if `body.code` is a negative integer, with `body.msg` as the message.
#[must_use]
pub fn check_negative_code(body: &Value) -> Option<BusinessError> {
    let code = body.get("code").and_then(Value::as_i64)?;
    if code >= 0 {
        return None;
    }

    let message = body.get("msg").and_then(Value::as_str).unwrap_or_default();
    Some(BusinessError::new(Some(code), message))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
