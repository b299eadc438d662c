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

//! Monotonic clock backend.

use super::TimerSource;
use std::time::Instant;

/// Timer backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicTimer {
    started: Instant,
}

impl MonotonicTimer {
    /// Creates a timer started now.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for MonotonicTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerSource for MonotonicTimer {
    fn name(&self) -> &'static str {
        "monotonic"
    }

    #[inline]
    fn start(&mut self) {
        self.started = Instant::now();
    }

    #[inline]
    fn stop(&mut self) -> u64 {
        self.started.elapsed().as_nanos() as u64
    }
}
