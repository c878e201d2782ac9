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

//! Property-based tests for the exponential backoff sequence.

use std::time::Duration;

use kestrel_network::backoff::ExponentialBackoff;
use proptest::prelude::*;

fn backoff_params_strategy() -> impl Strategy<Value = (Duration, Duration, f64, u64)> {
    (1u64..=5_000u64, 10u64..=60_000u64, 1.0f64..=8.0f64, 0u64..=1_000u64)
        .prop_filter("max >= initial", |(initial_ms, max_ms, _, _)| {
            max_ms >= initial_ms
        })
        .prop_map(|(initial_ms, max_ms, factor, jitter_ms)| {
            (
                Duration::from_millis(initial_ms),
                Duration::from_millis(max_ms),
                factor,
                jitter_ms,
            )
        })
}

proptest! {
    #[test]
    fn base_delay_monotonic_and_capped(
        (initial, max, factor, jitter_ms) in backoff_params_strategy(),
        iterations in 1usize..=30,
    ) {
        let mut backoff = ExponentialBackoff::new(initial, max, factor, jitter_ms).unwrap();
        let mut previous = backoff.current_delay();

        for _ in 0..iterations {
            let base = backoff.current_delay();
            let delay = backoff.next_duration();

            prop_assert!(delay >= base);
            prop_assert!(delay <= base + Duration::from_millis(jitter_ms));

            let next = backoff.current_delay();
            prop_assert!(next >= previous, "base delay decreased: {:?} -> {:?}", previous, next);
            prop_assert!(next <= max, "base delay {:?} exceeds max {:?}", next, max);
            previous = next;
        }
    }

    #[test]
    fn reset_restores_initial(
        (initial, max, factor, jitter_ms) in backoff_params_strategy(),
        advance in 0usize..=10,
    ) {
        let mut backoff = ExponentialBackoff::new(initial, max, factor, jitter_ms).unwrap();
        for _ in 0..advance {
            let _ = backoff.next_duration();
        }
        backoff.reset();
        prop_assert_eq!(backoff.current_delay(), initial);
    }

    #[test]
    fn rejects_factor_below_one(factor in 0.0f64..0.999) {
        let result = ExponentialBackoff::new(
            Duration::from_millis(10),
            Duration::from_millis(100),
            factor,
            0,
        );
        prop_assert!(result.is_err());
    }
}
