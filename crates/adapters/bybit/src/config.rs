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


//! Configuration for the Bybit HTTP client.

use std::fmt::Debug;

use kestrel_rest::{Credential, RestClientConfig};

use crate::common::{
    consts::{BYBIT_API_KEY_VAR, BYBIT_API_SECRET_VAR, BYBIT_DEFAULT_RECV_WINDOW_MS},
    enums::BybitEnvironment,
    urls::bybit_http_base_url,
};

/// Configuration for [`crate::http::client::BybitHttpClient`].
#[derive(Clone)]
pub struct BybitHttpConfig {
    /// API key; falls back to `BYBIT_API_KEY` when unset.
    pub api_key: Option<String>,
    /// API secret; falls back to `BYBIT_API_SECRET` when unset.
    pub api_secret: Option<String>,
    /// The Bybit environment to connect to.
    pub environment: BybitEnvironment,
    /// Receive window sent with authenticated requests.
    pub recv_window_ms: u64,
    /// Transport and retry settings.
    pub rest: RestClientConfig,
}

impl Default for BybitHttpConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            environment: BybitEnvironment::Mainnet,
            recv_window_ms: BYBIT_DEFAULT_RECV_WINDOW_MS,
            rest: RestClientConfig::default(),
        }
    }
}

impl Debug for BybitHttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BybitHttpConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("environment", &self.environment)
            .field("recv_window_ms", &self.recv_window_ms)
            .field("rest", &self.rest)
            .finish()
    }
}

impl BybitHttpConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the HTTP base URL, respecting the environment and overrides.
    #[must_use]
    pub fn http_url(&self) -> String {
        self.rest
            .base_url_or(bybit_http_base_url(self.environment))
    }

    /// Resolves the credential from the configured values or the environment.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        Credential::resolve(
            self.api_key.clone(),
            self.api_secret.clone(),
            BYBIT_API_KEY_VAR,
            BYBIT_API_SECRET_VAR,
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
