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


//! Configuration for the FTX HTTP client.

use kestrel_core::env::get_or_env_var_opt;
use kestrel_rest::{Credential, RestClientConfig};

use crate::common::consts::{
    FTX_API_KEY_VAR, FTX_API_SECRET_VAR, FTX_HTTP_URL, FTX_SUBACCOUNT_VAR,
};

/// Configuration for [`crate::http::client::FtxHttpClient`].
#[derive(Clone, Default)]
pub struct FtxHttpConfig {
    /// API key; falls back to `FTX_API_KEY` when unset.
    pub api_key: Option<String>,
    /// API secret; falls back to `FTX_API_SECRET` when unset.
    pub api_secret: Option<String>,
    /// Subaccount to scope requests to; falls back to `FTX_SUBACCOUNT` when unset.
    pub subaccount: Option<String>,
    /// Transport and retry settings.
    pub rest: RestClientConfig,
}

impl std::fmt::Debug for FtxHttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FtxHttpConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("subaccount", &self.subaccount)
            .field("rest", &self.rest)
            .finish()
    }
}

impl FtxHttpConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the HTTP base URL.
    #[must_use]
    pub fn http_url(&self) -> String {
        self.rest.base_url_or(FTX_HTTP_URL)
    }

    /// Resolves the credential and subaccount from the configured values or the environment.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        let subaccount = get_or_env_var_opt(self.subaccount.clone(), FTX_SUBACCOUNT_VAR);
        Credential::resolve(
            self.api_key.clone(),
            self.api_secret.clone(),
            FTX_API_KEY_VAR,
            FTX_API_SECRET_VAR,
        )
        .map(|credential| credential.with_subaccount(subaccount))
    }
}
