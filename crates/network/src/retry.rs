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

//! Retry execution for idempotent network operations.
//!
//! A [`RetryManager`] is stateless: every call to [`RetryManager::execute_with_retry`] builds its
//! own [`ExponentialBackoff`], so one manager can be shared by concurrent requests. Whether an
//! error is worth retrying is decided by the caller through a predicate, which lets a REST client
//! refuse to replay non-idempotent requests.

use std::{future::Future, marker::PhantomData, time::Duration};

use tokio::time::{Instant, sleep};

use crate::backoff::ExponentialBackoff;

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries (total attempts = 1 + `max_retries`).
    pub max_retries: u32,
    /// Delay before the first retry in milliseconds.
    pub initial_delay_ms: u64,
    /// Ceiling on the delay between retries in milliseconds.
    pub max_delay_ms: u64,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Maximum jitter in milliseconds added to each delay.
    pub jitter_ms: u64,
    /// Timeout for a single attempt in milliseconds, if any.
    pub operation_timeout_ms: Option<u64>,
    /// Total time budget across all attempts in milliseconds, if any.
    pub max_elapsed_ms: Option<u64>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 1_000,
            max_delay_ms: 10_000,
            backoff_factor: 2.0,
            jitter_ms: 1_000,
            operation_timeout_ms: Some(60_000),
            max_elapsed_ms: Some(180_000),
        }
    }
}

impl RetryConfig {
    /// Returns a configuration that never retries.
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

/// Executes fallible async operations with exponential backoff between attempts.
#[derive(Debug)]
pub struct RetryManager<E> {
    config: RetryConfig,
    _phantom: PhantomData<E>,
}

impl<E> RetryManager<E>
where
    E: std::error::Error,
{
    /// Creates a new retry manager with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the backoff parameters in `config` are invalid.
    pub fn new(config: RetryConfig) -> anyhow::Result<Self> {
        // Validates the backoff parameters up front
        Self::backoff_for(&config)?;

        Ok(Self {
            config,
            _phantom: PhantomData,
        })
    }

    /// Returns the configuration of this manager.
    #[must_use]
    pub const fn config(&self) -> &RetryConfig {
        &self.config
    }

    fn backoff_for(config: &RetryConfig) -> anyhow::Result<ExponentialBackoff> {
        ExponentialBackoff::new(
            Duration::from_millis(config.initial_delay_ms),
            Duration::from_millis(config.max_delay_ms),
            config.backoff_factor,
            config.jitter_ms,
        )
    }

    /// Executes `operation`, retrying while `should_retry` accepts the error.
    ///
    /// `create_timeout_error` builds the error returned when a single attempt exceeds
    /// `operation_timeout_ms` or the total budget `max_elapsed_ms` is exhausted. Attempt timeouts
    /// are themselves passed through `should_retry`.
    ///
    /// # Errors
    ///
    /// Returns the last error once it is not retryable, the retries are exhausted, or the time
    /// budget is exceeded.
    pub async fn execute_with_retry<F, Fut, T>(
        &self,
        operation_name: &str,
        mut operation: F,
        should_retry: impl Fn(&E) -> bool,
        create_timeout_error: impl Fn(String) -> E,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut backoff = Self::backoff_for(&self.config)
            .map_err(|e| create_timeout_error(format!("Invalid backoff configuration: {e}")))?;
        let start = Instant::now();
        let mut attempt: u32 = 0;

        loop {
            if let Some(max_elapsed_ms) = self.config.max_elapsed_ms
                && start.elapsed() > Duration::from_millis(max_elapsed_ms)
            {
                tracing::warn!(
                    operation = operation_name,
                    attempts = attempt,
                    "Exceeded total time budget of {max_elapsed_ms}ms"
                );
                return Err(create_timeout_error(format!(
                    "Operation '{operation_name}' exceeded total time budget of {max_elapsed_ms}ms"
                )));
            }

            let error = match self.config.operation_timeout_ms {
                Some(timeout_ms) => {
                    match tokio::time::timeout(Duration::from_millis(timeout_ms), operation()).await
                    {
                        Ok(Ok(value)) => return Ok(self.succeeded(operation_name, attempt, value)),
                        Ok(Err(e)) => e,
                        Err(_) => create_timeout_error(format!(
                            "Operation '{operation_name}' timed out after {timeout_ms}ms"
                        )),
                    }
                }
                None => match operation().await {
                    Ok(value) => return Ok(self.succeeded(operation_name, attempt, value)),
                    Err(e) => e,
                },
            };

            if !should_retry(&error) {
                tracing::debug!(
                    operation = operation_name,
                    "Failed with non-retryable error: {error}"
                );
                return Err(error);
            }

            if attempt >= self.config.max_retries {
                tracing::warn!(
                    operation = operation_name,
                    attempts = attempt + 1,
                    "Retries exhausted: {error}"
                );
                return Err(error);
            }

            let delay = backoff.next_duration();
            tracing::debug!(
                operation = operation_name,
                attempt = attempt + 1,
                "Retrying in {delay:?}: {error}"
            );
            sleep(delay).await;
            attempt += 1;
        }
    }

    fn succeeded<T>(&self, operation_name: &str, attempt: u32, value: T) -> T {
        if attempt > 0 {
            tracing::debug!(
                operation = operation_name,
                attempts = attempt + 1,
                max_retries = self.config.max_retries,
                "Succeeded after retry"
            );
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    };

    use rstest::rstest;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    enum TestError {
        #[error("Retryable error: {0}")]
        Retryable(String),
        #[error("Non-retryable error: {0}")]
        NonRetryable(String),
        #[error("Timeout error: {0}")]
        Timeout(String),
    }

    fn should_retry_test_error(error: &TestError) -> bool {
        matches!(error, TestError::Retryable(_))
    }

    fn create_timeout_error(msg: String) -> TestError {
        TestError::Timeout(msg)
    }

    fn fast_config(max_retries: u32) -> RetryConfig {
        RetryConfig {
            max_retries,
            initial_delay_ms: 5,
            max_delay_ms: 20,
            backoff_factor: 2.0,
            jitter_ms: 0,
            operation_timeout_ms: None,
            max_elapsed_ms: None,
        }
    }

    #[rstest]
    fn test_retry_config_default() {
        let config = RetryConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.initial_delay_ms, 1_000);
        assert_eq!(config.max_delay_ms, 10_000);
        assert_eq!(config.operation_timeout_ms, Some(60_000));
        assert_eq!(config.max_elapsed_ms, Some(180_000));
        assert_eq!(RetryConfig::no_retry().max_retries, 0);
    }

    #[rstest]
    fn test_invalid_config_rejected() {
        let config = RetryConfig {
            initial_delay_ms: 5_000,
            max_delay_ms: 100,
            ..RetryConfig::default()
        };
        assert!(RetryManager::<TestError>::new(config).is_err());
    }

    #[tokio::test]
    async fn test_success_first_attempt() {
        let manager = RetryManager::new(fast_config(3)).unwrap();

        let result = manager
            .execute_with_retry(
                "op",
                || async { Ok::<i32, TestError>(42) },
                should_retry_test_error,
                create_timeout_error,
            )
            .await;

        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_non_retryable_error_attempted_once() {
        let manager = RetryManager::new(fast_config(3)).unwrap();
        let calls = Arc::new(AtomicU32::new(0));

        let result = manager
            .execute_with_retry(
                "op",
                || {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Err::<i32, TestError>(TestError::NonRetryable("post".to_string()))
                    }
                },
                should_retry_test_error,
                create_timeout_error,
            )
            .await;

        assert!(matches!(result.unwrap_err(), TestError::NonRetryable(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retryable_error_exhausted() {
        let manager = RetryManager::new(fast_config(2)).unwrap();
        let calls = Arc::new(AtomicU32::new(0));

        let result = manager
            .execute_with_retry(
                "op",
                || {
                    let calls = calls.clone();
                    async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Err::<i32, TestError>(TestError::Retryable("503".to_string()))
                    }
                },
                should_retry_test_error,
                create_timeout_error,
            )
            .await;

        assert!(matches!(result.unwrap_err(), TestError::Retryable(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let manager = RetryManager::new(fast_config(3)).unwrap();
        let calls = Arc::new(AtomicU32::new(0));

        let result = manager
            .execute_with_retry(
                "op",
                || {
                    let calls = calls.clone();
                    async move {
                        if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                            Err(TestError::Retryable("flaky".to_string()))
                        } else {
                            Ok(7)
                        }
                    }
                },
                should_retry_test_error,
                create_timeout_error,
            )
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_attempt_timeout_not_retried_when_predicate_rejects() {
        let config = RetryConfig {
            operation_timeout_ms: Some(20),
            ..fast_config(3)
        };
        let manager = RetryManager::new(config).unwrap();

        let result = manager
            .execute_with_retry(
                "slow",
                || async {
                    sleep(Duration::from_millis(200)).await;
                    Ok::<i32, TestError>(1)
                },
                should_retry_test_error,
                create_timeout_error,
            )
            .await;

        assert!(matches!(result.unwrap_err(), TestError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_total_budget_stops_retries() {
        let config = RetryConfig {
            max_retries: 100,
            initial_delay_ms: 20,
            max_delay_ms: 40,
            max_elapsed_ms: Some(100),
            ..fast_config(100)
        };
        let manager = RetryManager::new(config).unwrap();

        let start = Instant::now();
        let result = manager
            .execute_with_retry(
                "budget",
                || async { Err::<i32, TestError>(TestError::Retryable("down".to_string())) },
                should_retry_test_error,
                create_timeout_error,
            )
            .await;

        assert!(matches!(result.unwrap_err(), TestError::Timeout(_)));
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert!(start.elapsed() < Duration::from_secs(2));
    }
}
