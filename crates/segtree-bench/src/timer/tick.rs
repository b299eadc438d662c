// Dweve SegTree - Segment Tree Benchmark Suite
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Wall-clock tick backend.
//!
//! Counts whole milliseconds of system time. Resolution is coarse, so short
//! regions read as zero; it exists to compare against the finer backends.

use super::TimerSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// Ticks per second of the wall-clock counter.
pub const TICKS_PER_SEC: u64 = 1_000;

/// Nanoseconds represented by one tick.
pub const NANOS_PER_TICK: u64 = super::NANOS_PER_SEC / TICKS_PER_SEC;

/// Timer counting millisecond wall-clock ticks.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    started: u64,
}

impl TickTimer {
    /// Creates a timer started now.
    pub fn new() -> Self {
        Self {
            started: now_ticks(),
        }
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ticks() -> u64 {
    // A clock set before 1970 reads as tick 0.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl TimerSource for TickTimer {
    fn name(&self) -> &'static str {
        "tick"
    }

    fn start(&mut self) {
        self.started = now_ticks();
    }

    fn stop(&mut self) -> u64 {
        // Wall time can step backwards; clamp to zero.
        now_ticks().saturating_sub(self.started) * NANOS_PER_TICK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_whole_ticks() {
        let mut timer = TickTimer::new();
        timer.start();
        thread::sleep(Duration::from_millis(5));
        let elapsed = timer.stop();
        assert_eq!(elapsed % NANOS_PER_TICK, 0);
        assert!(elapsed >= 4 * NANOS_PER_TICK);
    }
}
