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

//! Exponential backoff with jitter for spacing out request retries.
//!
//! The delay grows by a constant factor after each attempt up to a configurable ceiling, and a
//! random jitter in `[0, jitter_ms]` is added to each returned delay so that clients retrying
//! against the same venue do not synchronize.

use std::time::Duration;

use rand::RngExt;

/// An exponential backoff sequence with a capped delay and bounded jitter.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    /// The delay returned by the first call (before jitter).
    delay_initial: Duration,
    /// The ceiling for the base delay.
    delay_max: Duration,
    /// The base delay to be returned by the next call.
    delay_current: Duration,
    /// The growth factor applied after each call.
    factor: f64,
    /// The maximum random jitter added to each delay (milliseconds).
    jitter_ms: u64,
}

impl ExponentialBackoff {
    /// Creates a new [`ExponentialBackoff`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `factor` is not a finite value of at least 1.0.
    /// - `delay_initial` is greater than `delay_max`.
    pub fn new(
        delay_initial: Duration,
        delay_max: Duration,
        factor: f64,
        jitter_ms: u64,
    ) -> anyhow::Result<Self> {
        if !factor.is_finite() || factor < 1.0 {
            anyhow::bail!("backoff factor must be finite and >= 1.0, was {factor}");
        }
        if delay_initial > delay_max {
            anyhow::bail!(
                "initial delay {delay_initial:?} exceeds maximum delay {delay_max:?}"
            );
        }

        Ok(Self {
            delay_initial,
            delay_max,
            delay_current: delay_initial,
            factor,
            jitter_ms,
        })
    }

    /// Returns the next delay including jitter and advances the sequence.
    pub fn next_duration(&mut self) -> Duration {
        let jitter = if self.jitter_ms == 0 {
            0
        } else {
            rand::rng().random_range(0..=self.jitter_ms)
        };
        let delay = self.delay_current + Duration::from_millis(jitter);

        let next_secs = self.delay_current.as_secs_f64() * self.factor;
        self.delay_current = if next_secs >= self.delay_max.as_secs_f64() {
            self.delay_max
        } else {
            Duration::from_secs_f64(next_secs)
        };

        delay
    }

    /// Resets the sequence to the initial delay.
    pub const fn reset(&mut self) {
        self.delay_current = self.delay_initial;
    }

    /// Returns the base delay (without jitter) that the next call will use.
    #[must_use]
    pub const fn current_delay(&self) -> Duration {
        self.delay_current
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_growth_without_jitter() {
        let mut backoff = ExponentialBackoff::new(
            Duration::from_millis(250),
            Duration::from_millis(2_000),
            2.0,
            0,
        )
        .unwrap();

        let delays: Vec<_> = (0..6).map(|_| backoff.next_duration()).collect();
        assert_eq!(
            delays,
            vec![
                Duration::from_millis(250),
                Duration::from_millis(500),
                Duration::from_millis(1_000),
                Duration::from_millis(2_000),
                Duration::from_millis(2_000),
                Duration::from_millis(2_000),
            ]
        );
    }

    #[rstest]
    fn test_reset_returns_to_initial() {
        let initial = Duration::from_millis(100);
        let mut backoff =
            ExponentialBackoff::new(initial, Duration::from_secs(10), 3.0, 0).unwrap();

        let _ = backoff.next_duration();
        let _ = backoff.next_duration();
        assert_eq!(backoff.current_delay(), Duration::from_millis(900));

        backoff.reset();
        assert_eq!(backoff.current_delay(), initial);
        assert_eq!(backoff.next_duration(), initial);
    }

    #[rstest]
    fn test_jitter_within_bounds() {
        let initial = Duration::from_millis(1_000);
        for _ in 0..20 {
            let mut backoff =
                ExponentialBackoff::new(initial, Duration::from_secs(10), 2.0, 250).unwrap();
            let delay = backoff.next_duration();
            assert!(delay >= initial, "delay {delay:?} below base");
            assert!(
                delay <= initial + Duration::from_millis(250),
                "delay {delay:?} above base plus jitter"
            );
        }
    }

    #[rstest]
    fn test_fractional_factor_capped() {
        let mut backoff = ExponentialBackoff::new(
            Duration::from_millis(400),
            Duration::from_millis(500),
            1.5,
            0,
        )
        .unwrap();

        assert_eq!(backoff.next_duration(), Duration::from_millis(400));
        assert_eq!(backoff.next_duration(), Duration::from_millis(500));
        assert_eq!(backoff.current_delay(), Duration::from_millis(500));
    }

    #[rstest]
    #[case(0.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_factor_rejected(#[case] factor: f64) {
        let result = ExponentialBackoff::new(
            Duration::from_millis(100),
            Duration::from_millis(1_000),
            factor,
            0,
        );
        assert!(result.is_err());
    }

    #[rstest]
    fn test_initial_above_max_rejected() {
        let result =
            ExponentialBackoff::new(Duration::from_secs(5), Duration::from_secs(1), 2.0, 0);
        assert!(result.is_err());
    }
}
