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

//! Error taxonomy shared by every exchange client.
//!
//! The variants separate failures by what a caller can do about them: configuration problems are
//! fatal, transport failures and server-side statuses may be retried for idempotent requests, and
//! exchange business rejections are never retried.

use kestrel_cryptography::SigningError;
use kestrel_network::http::{HttpClientError, Method};
use thiserror::Error;

use crate::response::{ApiBody, BusinessError};

/// A typed error enumeration for the REST client core.
#[derive(Debug, Clone, Error)]
pub enum RestError {
    /// Credentials are missing or invalid for an authenticated request.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The request did not complete (connection failure or timeout).
    #[error("Transport error: {message}")]
    Transport { message: String, timed_out: bool },
    /// The exchange answered with a non-2xx status.
    #[error("HTTP {status} {reason}: {body}")]
    HttpStatus {
        status: u16,
        reason: String,
        body: ApiBody,
    },
    /// The exchange answered 2xx but reported a failure in the body.
    #[error("Exchange error{}: {message}", fmt_code(.code))]
    ExchangeBusiness { code: Option<i64>, message: String },
    /// A page returned the same cursor that was used to fetch it.
    #[error("Pagination stalled at cursor '{cursor}' after {pages_fetched} pages")]
    PaginationStalled { cursor: String, pages_fetched: u32 },
    /// Failure during JSON or query encoding/decoding.
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The request could not be built from the given arguments.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

#[allow(clippy::ref_option)]
fn fmt_code(code: &Option<i64>) -> String {
    code.map(|c| format!(" {c}")).unwrap_or_default()
}

impl RestError {
    /// Returns true if a failed request using `method` may be retried.
    ///
    /// Transport failures are retryable for idempotent methods. Server errors (5xx) and rate
    /// limiting (429) are retryable for GET only. Everything else is final.
    #[must_use]
    pub fn is_retryable(&self, method: &Method) -> bool {
        match self {
            Self::Transport { .. } => method.is_idempotent(),
            Self::HttpStatus { status, .. } => {
                *method == Method::GET && (*status >= 500 || *status == 429)
            }
            Self::Configuration(_)
            | Self::ExchangeBusiness { .. }
            | Self::PaginationStalled { .. }
            | Self::Serialization(_)
            | Self::InvalidRequest(_) => false,
        }
    }

    /// Returns true if this is a transport timeout.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                timed_out: true,
                ..
            }
        )
    }

    /// Creates a transport timeout error.
    #[must_use]
    pub const fn timeout(message: String) -> Self {
        Self::Transport {
            message,
            timed_out: true,
        }
    }
}

impl From<HttpClientError> for RestError {
    fn from(error: HttpClientError) -> Self {
        if error.is_build_error() {
            return Self::Configuration(error.to_string());
        }
        let timed_out = error.is_timeout();
        Self::Transport {
            message: error.to_string(),
            timed_out,
        }
    }
}

impl From<SigningError> for RestError {
    fn from(error: SigningError) -> Self {
        Self::Configuration(error.to_string())
    }
}

impl From<serde_json::Error> for RestError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<BusinessError> for RestError {
    fn from(error: BusinessError) -> Self {
        Self::ExchangeBusiness {
            code: error.code,
            message: error.message,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
