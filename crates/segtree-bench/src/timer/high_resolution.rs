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

//! OS high-resolution counter backend.
//!
//! Reads `CLOCK_MONOTONIC` through `clock_gettime`. Only available on Unix;
//! elsewhere construction fails so the harness can refuse to start.

use super::TimerSource;
use crate::error::Result;

/// Timer reading the OS monotonic counter directly.
#[derive(Debug, Clone, Copy)]
pub struct HighResolutionTimer {
    started: u64,
    resolution_ns: u64,
}

impl HighResolutionTimer {
    /// Probes the counter and creates a timer started now.
    pub fn new() -> Result<Self> {
        let resolution_ns = sys::resolution_ns()?;
        Ok(Self {
            started: sys::now_ns(),
            resolution_ns,
        })
    }

    /// Counter resolution reported by the OS, in nanoseconds.
    pub fn resolution_ns(&self) -> u64 {
        self.resolution_ns
    }
}

impl TimerSource for HighResolutionTimer {
    fn name(&self) -> &'static str {
        "high-resolution"
    }

    #[inline]
    fn start(&mut self) {
        self.started = sys::now_ns();
    }

    #[inline]
    fn stop(&mut self) -> u64 {
        sys::now_ns().saturating_sub(self.started)
    }
}

#[cfg(unix)]
mod sys {
    use crate::error::{BenchError, Result};
    use crate::timer::NANOS_PER_SEC;

    fn to_ns(ts: &libc::timespec) -> u64 {
        ts.tv_sec as u64 * NANOS_PER_SEC + ts.tv_nsec as u64
    }

    pub fn resolution_ns() -> Result<u64> {
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        // SAFETY: `ts` is a valid, writable timespec.
        let rc = unsafe { libc::clock_getres(libc::CLOCK_MONOTONIC, &mut ts) };
        if rc != 0 {
            return Err(BenchError::timer_unavailable(
                "high-resolution",
                format!(
                    "clock_getres(CLOCK_MONOTONIC) failed: {}",
                    std::io::Error::last_os_error()
                ),
            ));
        }
        Ok(to_ns(&ts))
    }

    #[inline]
    pub fn now_ns() -> u64 {
        let mut ts = libc::timespec {
            tv_sec: 0,
            tv_nsec: 0,
        };
        // SAFETY: `ts` is a valid, writable timespec and CLOCK_MONOTONIC was
        // checked by `resolution_ns` before any timer was handed out.
        unsafe {
            libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts);
        }
        to_ns(&ts)
    }
}

#[cfg(not(unix))]
mod sys {
    use crate::error::{BenchError, Result};

    pub fn resolution_ns() -> Result<u64> {
        Err(BenchError::timer_unavailable(
            "high-resolution",
            "clock_gettime is only available on Unix hosts",
        ))
    }

    pub fn now_ns() -> u64 {
        0
    }
}
