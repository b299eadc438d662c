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

//! Trial sample collection.
//!
//! Collects the elapsed time and checksum of every trial for one algorithm
//! and reduces them to the reported minimum.

use serde::{Deserialize, Serialize};

/// Statistical summary of trial samples, all in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Fastest trial.
    pub min: u64,
    /// Slowest trial.
    pub max: u64,
    /// Mean over all trials.
    pub mean: f64,
    /// Median trial (lower middle for even counts).
    pub median: u64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Number of samples.
    pub count: usize,
}

/// Computes a statistical summary of `samples`.
///
/// An empty slice yields an all-zero summary.
pub fn compute_statistics(samples: &[u64]) -> Statistics {
    if samples.is_empty() {
        return Statistics {
            min: 0,
            max: 0,
            mean: 0.0,
            median: 0,
            std_dev: 0.0,
            count: 0,
        };
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let count = sorted.len();
    let mean = sorted.iter().map(|&s| s as f64).sum::<f64>() / count as f64;
    let variance = sorted
        .iter()
        .map(|&s| {
            let diff = s as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    Statistics {
        min: sorted[0],
        max: sorted[count - 1],
        mean,
        median: sorted[(count - 1) / 2],
        std_dev: variance.sqrt(),
        count,
    }
}

/// Collects trial results for one algorithm at one size and mode.
#[derive(Debug, Clone, Default)]
pub struct TrialCollector {
    samples: Vec<u64>,
    checksums: Vec<u64>,
}

impl TrialCollector {
    /// Creates a collector with room for `trials` samples.
    pub fn with_capacity(trials: usize) -> Self {
        Self {
            samples: Vec::with_capacity(trials),
            checksums: Vec::with_capacity(trials),
        }
    }

    /// Records one trial.
    pub fn record(&mut self, elapsed_ns: u64, checksum: u64) {
        self.samples.push(elapsed_ns);
        self.checksums.push(checksum);
    }

    /// Elapsed time of every trial, in recording order.
    pub fn samples(&self) -> &[u64] {
        &self.samples
    }

    /// Checksum of every trial, in recording order.
    pub fn checksums(&self) -> &[u64] {
        &self.checksums
    }

    /// Number of recorded trials.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no trial was recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Minimum elapsed time, the figure reported for the algorithm.
    pub fn min_ns(&self) -> Option<u64> {
        self.samples.iter().copied().min()
    }

    /// Summary of all samples.
    pub fn statistics(&self) -> Statistics {
        compute_statistics(&self.samples)
    }

    /// Consumes the collector, returning `(samples, checksums)`.
    pub fn into_parts(self) -> (Vec<u64>, Vec<u64>) {
        (self.samples, self.checksums)
    }
}
