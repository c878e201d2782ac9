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

//! Configuration for a REST client instance.

use kestrel_core::consts::KESTREL_USER_AGENT;
use kestrel_network::{http::DEFAULT_TIMEOUT_SECS, retry::RetryConfig};

/// Transport and retry settings shared by every exchange client.
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Override for the exchange base URL.
    pub base_url: Option<String>,
    /// Default transport timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of retries for retryable failures of idempotent requests.
    pub max_retries: u32,
    /// Initial retry delay in milliseconds.
    pub retry_delay_initial_ms: u64,
    /// Maximum retry delay in milliseconds.
    pub retry_delay_max_ms: u64,
    /// The `User-Agent` header value.
    pub user_agent: String,
}

impl Default for RestClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: 3,
            retry_delay_initial_ms: 1_000,
            retry_delay_max_ms: 10_000,
            user_agent: KESTREL_USER_AGENT.to_string(),
        }
    }
}

impl RestClientConfig {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the base URL override, or `default` when none is set.
    #[must_use]
    pub fn base_url_or(&self, default: &str) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| default.to_string())
    }

    /// Returns the retry configuration derived from these settings.
    ///
    /// Per-attempt timeouts are enforced by the transport, so the retry layer only bounds the total
    /// elapsed time.
    #[must_use]
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_retries: self.max_retries,
            initial_delay_ms: self.retry_delay_initial_ms,
            max_delay_ms: self.retry_delay_max_ms.max(self.retry_delay_initial_ms),
            backoff_factor: 2.0,
            jitter_ms: 1_000.min(self.retry_delay_initial_ms),
            operation_timeout_ms: None,
            max_elapsed_ms: Some(180_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_defaults() {
        let config = RestClientConfig::default();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.max_retries, 3);
        assert!(config.user_agent.starts_with("Kestrel/"));
        assert_eq!(config.base_url_or("https://api.bybit.com"), "https://api.bybit.com");
    }

    #[rstest]
    fn test_base_url_override() {
        let config = RestClientConfig {
            base_url: Some("http://127.0.0.1:8080".to_string()),
            ..RestClientConfig::default()
        };
        assert_eq!(config.base_url_or("https://api.bybit.com"), "http://127.0.0.1:8080");
    }

    #[rstest]
    fn test_retry_config_is_valid() {
        let config = RestClientConfig {
            retry_delay_initial_ms: 5_000,
            retry_delay_max_ms: 100,
            ..RestClientConfig::default()
        };
        let retry = config.retry_config();
        assert!(retry.max_delay_ms >= retry.initial_delay_ms);
        assert_eq!(retry.operation_timeout_ms, None);
    }
}
