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


//! Configuration for the Bitfinex HTTP client.

use kestrel_rest::{Credential, RestClientConfig};

use crate::common::consts::{
    BITFINEX_API_KEY_VAR, BITFINEX_API_SECRET_VAR, BITFINEX_PRIVATE_HTTP_URL,
    BITFINEX_PUBLIC_HTTP_URL,
};

/// Configuration for [`crate::http::client::BitfinexHttpClient`].
#[derive(Clone, Default)]
pub struct BitfinexHttpConfig {
    /// API key; falls back to `BITFINEX_API_KEY` when unset.
    pub api_key: Option<String>,
    /// API secret; falls back to `BITFINEX_API_SECRET` when unset.
    pub api_secret: Option<String>,
    /// Override for the public market data host.
    pub public_base_url: Option<String>,
    /// Override for the authenticated host.
    pub private_base_url: Option<String>,
    /// Transport and retry settings shared by both hosts. Its `base_url` is ignored.
    pub rest: RestClientConfig,
}

impl std::fmt::Debug for BitfinexHttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitfinexHttpConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("public_base_url", &self.public_base_url)
            .field("private_base_url", &self.private_base_url)
            .field("rest", &self.rest)
            .finish()
    }
}

impl BitfinexHttpConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the REST settings for the public host.
    #[must_use]
    pub fn public_rest_config(&self) -> RestClientConfig {
        RestClientConfig {
            base_url: Some(
                self.public_base_url
                    .clone()
                    .unwrap_or_else(|| BITFINEX_PUBLIC_HTTP_URL.to_string()),
            ),
            ..self.rest.clone()
        }
    }

    /// Returns the REST settings for the authenticated host.
    #[must_use]
    pub fn private_rest_config(&self) -> RestClientConfig {
        RestClientConfig {
            base_url: Some(
                self.private_base_url
                    .clone()
                    .unwrap_or_else(|| BITFINEX_PRIVATE_HTTP_URL.to_string()),
            ),
            ..self.rest.clone()
        }
    }

    /// Resolves the credential from the configured values or the environment.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        Credential::resolve(
            self.api_key.clone(),
            self.api_secret.clone(),
            BITFINEX_API_KEY_VAR,
            BITFINEX_API_SECRET_VAR,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_hosts_default_and_override() {
        let mut config = BitfinexHttpConfig::new();
        assert_eq!(
            config.public_rest_config().base_url.as_deref(),
            Some("https://api-pub.bitfinex.com")
        );
        assert_eq!(
            config.private_rest_config().base_url.as_deref(),
            Some("https://api.bitfinex.com")
        );

        config.private_base_url = Some("http://127.0.0.1:9000".to_string());
        config.rest.timeout_secs = 3;
        let private = config.private_rest_config();
        assert_eq!(private.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(private.timeout_secs, 3);
    }
}
