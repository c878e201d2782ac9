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


//! Configuration for the Binance HTTP client.

use kestrel_rest::{Credential, RestClientConfig};

use crate::common::{
    consts::{BINANCE_API_KEY_VAR, BINANCE_API_SECRET_VAR},
    enums::BinanceEnvironment,
    urls::binance_http_base_url,
};

/// Configuration for [`crate::http::client::BinanceHttpClient`].
#[derive(Clone, Default)]
pub struct BinanceHttpConfig {
    /// API key; falls back to `BINANCE_API_KEY` when unset.
    pub api_key: Option<String>,
    /// API secret; falls back to `BINANCE_API_SECRET` when unset.
    pub api_secret: Option<String>,
    /// Connect to the spot testnet instead of mainnet.
    pub testnet: bool,
    /// Optional `recvWindow` appended to signed requests.
    pub recv_window_ms: Option<u64>,
    /// Transport and retry settings.
    pub rest: RestClientConfig,
}

impl std::fmt::Debug for BinanceHttpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceHttpConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("testnet", &self.testnet)
            .field("recv_window_ms", &self.recv_window_ms)
            .field("rest", &self.rest)
            .finish()
    }
}

impl BinanceHttpConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn environment(&self) -> BinanceEnvironment {
        if self.testnet {
            BinanceEnvironment::Testnet
        } else {
            BinanceEnvironment::Mainnet
        }
    }

    /// Returns the HTTP base URL, respecting the testnet flag and overrides.
    #[must_use]
    pub fn http_url(&self) -> String {
        self.rest.base_url_or(binance_http_base_url(self.environment()))
    }

    /// Resolves the credential from the configured values or the environment.
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        Credential::resolve(
            self.api_key.clone(),
            self.api_secret.clone(),
            BINANCE_API_KEY_VAR,
            BINANCE_API_SECRET_VAR,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(false, "https://api.binance.com")]
    #[case(true, "https://testnet.binance.vision")]
    fn test_http_url_follows_testnet_flag(#[case] testnet: bool, #[case] expected: &str) {
        let config = BinanceHttpConfig {
            testnet,
            ..BinanceHttpConfig::default()
        };
        assert_eq!(config.http_url(), expected);
    }

    #[rstest]
    fn test_base_url_override_wins() {
        let mut config = BinanceHttpConfig::new();
        config.testnet = true;
        config.rest.base_url = Some("http://127.0.0.1:8080".to_string());
        assert_eq!(config.http_url(), "http://127.0.0.1:8080");
    }
}
