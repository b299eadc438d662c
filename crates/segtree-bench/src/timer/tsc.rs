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

//! Time Stamp Counter backend.
//!
//! Reads the x86_64 cycle counter and converts cycles to nanoseconds using a
//! frequency measured once at construction: the counter is sampled across a
//! busy-wait of known wall-clock length (one second by default).

use super::{TimerSource, NANOS_PER_SEC};
use crate::error::{BenchError, Result};
use std::time::Duration;

/// Default calibration window.
pub const DEFAULT_CALIBRATION: Duration = Duration::from_secs(1);

/// Cycle-counter timer with its own calibrated frequency.
#[derive(Debug, Clone, Copy)]
pub struct TscTimer {
    started: u64,
    freq_hz: u64,
}

impl TscTimer {
    /// Checks that the cycle counter exists on this host.
    pub fn check_available() -> Result<()> {
        if cfg!(target_arch = "x86_64") {
            Ok(())
        } else {
            Err(BenchError::timer_unavailable(
                "tsc",
                "the time stamp counter requires an x86_64 host",
            ))
        }
    }

    /// Measures the counter frequency over `window` and returns a timer.
    ///
    /// Fails with [`BenchError::TimerUnavailable`] on any host when `window`
    /// is zero, since no frequency can be measured over it.
    pub fn calibrate(window: Duration) -> Result<Self> {
        if window.is_zero() {
            return Err(BenchError::timer_unavailable(
                "tsc",
                "calibration window must be positive",
            ));
        }
        Self::check_available()?;

        let begin = std::time::Instant::now();
        let c0 = read_tsc();
        while begin.elapsed() < window {
            std::hint::spin_loop();
        }
        let cycles = read_tsc().saturating_sub(c0);
        let elapsed_ns = begin.elapsed().as_nanos().max(1);

        let freq_hz = (cycles as u128 * NANOS_PER_SEC as u128 / elapsed_ns) as u64;
        if freq_hz == 0 {
            return Err(BenchError::timer_unavailable(
                "tsc",
                "counter did not advance during calibration",
            ));
        }
        tracing::info!(freq_hz, window_ms = window.as_millis() as u64, "calibrated tsc");

        Ok(Self {
            started: read_tsc(),
            freq_hz,
        })
    }

    /// Builds a timer with a known frequency, skipping calibration.
    pub fn with_frequency(freq_hz: u64) -> Result<Self> {
        Self::check_available()?;
        if freq_hz == 0 {
            return Err(BenchError::invalid_config("tsc frequency", "must be positive"));
        }
        Ok(Self {
            started: read_tsc(),
            freq_hz,
        })
    }

    /// Calibrated counter frequency in Hz.
    pub fn frequency(&self) -> u64 {
        self.freq_hz
    }

    /// Converts a cycle count to nanoseconds at this timer's frequency.
    pub fn cycles_to_ns(&self, cycles: u64) -> u64 {
        (cycles as u128 * NANOS_PER_SEC as u128 / self.freq_hz as u128) as u64
    }
}

impl TimerSource for TscTimer {
    fn name(&self) -> &'static str {
        "tsc"
    }

    #[inline]
    fn start(&mut self) {
        self.started = read_tsc();
    }

    #[inline]
    fn stop(&mut self) -> u64 {
        self.cycles_to_ns(read_tsc().saturating_sub(self.started))
    }
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn read_tsc() -> u64 {
    // SAFETY: rdtsc is available on every x86_64 CPU.
    unsafe { std::arch::x86_64::_rdtsc() }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn read_tsc() -> u64 {
    0
}


#[cfg(all(test, not(target_arch = "x86_64")))]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_off_x86_64() {
        assert!(matches!(
            TscTimer::calibrate(Duration::from_millis(1)),
            Err(BenchError::TimerUnavailable { .. })
        ));
    }
}
