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

//! A monotonic nonce clock for signed requests.
//!
//! Exchanges reject signed requests whose nonce or timestamp does not increase. Reading the
//! wall clock directly is not enough: it can step backwards under NTP adjustment, and two calls
//! within the same millisecond read the same value. [`AtomicNonce`] anchors itself to the wall
//! clock once, advances with a monotonic [`Instant`], and hands out values with
//! `max(now, last + 1)` semantics so every call observes a strictly larger value.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};

/// Returns the current wall-clock time as milliseconds since the UNIX epoch.
///
/// Falls back to zero if the system clock is set before the epoch.
#[must_use]
pub fn unix_millis_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// A thread-safe, strictly increasing millisecond nonce source.
#[derive(Debug)]
pub struct AtomicNonce {
    anchor_ms: u64,
    anchor: Instant,
    last: AtomicU64,
}

impl AtomicNonce {
    /// Creates a new [`AtomicNonce`] anchored to the current wall-clock time.
    #[must_use]
    pub fn new() -> Self {
        Self::with_anchor(unix_millis_now())
    }

    /// Creates a new [`AtomicNonce`] anchored to `anchor_ms` milliseconds since the UNIX epoch.
    #[must_use]
    pub fn with_anchor(anchor_ms: u64) -> Self {
        Self {
            anchor_ms,
            anchor: Instant::now(),
            last: AtomicU64::new(0),
        }
    }

    /// Returns the monotonic clock reading in milliseconds since the UNIX epoch.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        let elapsed = u64::try_from(self.anchor.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.anchor_ms.saturating_add(elapsed)
    }

    /// Returns the next nonce, strictly greater than every value previously returned.
    #[must_use]
    pub fn next(&self) -> u64 {
        let now = self.now_ms();
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|v| v);
        now.max(previous.saturating_add(1))
    }

    /// Returns the last nonce handed out, or zero if none has been issued.
    #[must_use]
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Acquire)
    }
}

impl Default for AtomicNonce {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
