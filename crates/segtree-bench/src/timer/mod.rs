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

//! Pluggable elapsed-time sources.
//!
//! Every backend implements [`TimerSource`] and reports elapsed time in
//! nanoseconds, converting from its native unit (clock ticks, counter
//! periods, CPU cycles) before returning.
//!
//! # Backends
//!
//! - `monotonic`: the standard library's monotonic clock
//! - `high-resolution`: the OS monotonic counter via `clock_gettime` (Unix)
//! - `tsc`: the x86_64 time stamp counter, calibrated at construction
//! - `tick`: the wall clock in millisecond ticks

mod high_resolution;
mod monotonic;
mod tick;
mod tsc;

pub use high_resolution::HighResolutionTimer;
pub use monotonic::MonotonicTimer;
pub use tick::{TickTimer, NANOS_PER_TICK};
pub use tsc::{TscTimer, DEFAULT_CALIBRATION};

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Nanoseconds per second.
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// A start/stop stopwatch.
///
/// `stop` returns nanoseconds elapsed since the most recent `start`. Calling
/// `stop` without a prior `start` measures from construction.
pub trait TimerSource {
    /// Backend identifier, matching [`TimerKind::as_str`].
    fn name(&self) -> &'static str;

    /// Records the start of a timed region.
    fn start(&mut self);

    /// Returns nanoseconds elapsed since the last [`start`](Self::start).
    fn stop(&mut self) -> u64;
}

/// Selects a timer backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerKind {
    /// `std::time::Instant`.
    #[default]
    Monotonic,
    /// OS monotonic counter.
    HighResolution,
    /// Calibrated CPU cycle counter.
    Tsc,
    /// Millisecond wall-clock ticks.
    Tick,
}

impl TimerKind {
    /// Returns a short identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monotonic => "monotonic",
            Self::HighResolution => "high-resolution",
            Self::Tsc => "tsc",
            Self::Tick => "tick",
        }
    }

    /// Returns all backends.
    pub fn all() -> &'static [TimerKind] {
        &[
            Self::Monotonic,
            Self::HighResolution,
            Self::Tsc,
            Self::Tick,
        ]
    }
}

impl fmt::Display for TimerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimerKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "monotonic" | "chrono" => Ok(Self::Monotonic),
            "high-resolution" | "hires" | "qpc" => Ok(Self::HighResolution),
            "tsc" => Ok(Self::Tsc),
            "tick" | "clock" => Ok(Self::Tick),
            other => Err(BenchError::invalid_config(
                "timer",
                format!(
                    "unknown timer '{}' (expected monotonic, high-resolution, tsc or tick)",
                    other
                ),
            )),
        }
    }
}

/// Constructs the requested backend.
///
/// Fails with [`BenchError::TimerUnavailable`] when the host cannot provide
/// it, so a misconfigured run stops before any workload is generated. The
/// `calibration` window is only used by the cycle counter.
pub fn create_timer(kind: TimerKind, calibration: Duration) -> Result<Box<dyn TimerSource>> {
    let timer: Box<dyn TimerSource> = match kind {
        TimerKind::Monotonic => Box::new(MonotonicTimer::new()),
        TimerKind::HighResolution => Box::new(HighResolutionTimer::new()?),
        TimerKind::Tsc => Box::new(TscTimer::calibrate(calibration)?),
        TimerKind::Tick => Box::new(TickTimer::new()),
    };
    tracing::debug!(timer = timer.name(), "timer backend ready");
    Ok(timer)
}

/// Reports whether each backend can run here, without calibrating.
pub fn timer_availability() -> Vec<(TimerKind, std::result::Result<(), String>)> {
    TimerKind::all()
        .iter()
        .map(|&kind| {
            let status = match kind {
                TimerKind::Monotonic | TimerKind::Tick => Ok(()),
                TimerKind::HighResolution => HighResolutionTimer::new().map(|_| ()),
                TimerKind::Tsc => TscTimer::check_available(),
            };
            (kind, status.map_err(|e| e.to_string()))
        })
        .collect()
}

/// Times `f` with `timer`, returning its result and the elapsed nanoseconds.
#[inline]
pub fn time_with<T, F>(timer: &mut dyn TimerSource, f: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    timer.start();
    let out = f();
    let elapsed = timer.stop();
    (out, elapsed)
}
