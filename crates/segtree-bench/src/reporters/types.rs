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

//! Core report data structures.

use crate::core::config::BenchMode;
use crate::harness::aggregator::{aggregate_results, AggregatedResults};
use crate::harness::collector::{compute_statistics, Statistics};
use serde::{Deserialize, Serialize};

/// Comparison of both trees at one domain size in one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeResult {
    /// Domain size.
    pub size: usize,
    /// Operations replayed per trial.
    pub operations: usize,
    /// Trials per algorithm.
    pub trials: usize,
    /// Benchmark mode.
    pub mode: BenchMode,
    /// Minimum classic trial time in nanoseconds.
    pub classic_ns: u64,
    /// Minimum efficient trial time in nanoseconds.
    pub efficient_ns: u64,
    /// `classic_ns / efficient_ns`, absent when the efficient time is 0.
    pub ratio: Option<f64>,
    /// Checksum agreed on by both trees.
    pub checksum: u64,
    /// Every classic trial time.
    pub classic_samples: Vec<u64>,
    /// Every efficient trial time.
    pub efficient_samples: Vec<u64>,
}

impl SizeResult {
    /// Builds a result from raw trial samples, reducing each side to its
    /// minimum.
    pub fn new(
        size: usize,
        operations: usize,
        mode: BenchMode,
        checksum: u64,
        classic_samples: Vec<u64>,
        efficient_samples: Vec<u64>,
    ) -> Self {
        let classic_ns = classic_samples.iter().copied().min().unwrap_or(0);
        let efficient_ns = efficient_samples.iter().copied().min().unwrap_or(0);
        Self {
            size,
            operations,
            trials: classic_samples.len().max(efficient_samples.len()),
            mode,
            classic_ns,
            efficient_ns,
            ratio: speed_ratio(classic_ns, efficient_ns),
            checksum,
            classic_samples,
            efficient_samples,
        }
    }

    /// Summary of the classic trials.
    pub fn classic_statistics(&self) -> Statistics {
        compute_statistics(&self.classic_samples)
    }

    /// Summary of the efficient trials.
    pub fn efficient_statistics(&self) -> Statistics {
        compute_statistics(&self.efficient_samples)
    }

    /// Minimum efficient time per operation, in nanoseconds.
    pub fn efficient_ns_per_op(&self) -> f64 {
        per_op(self.efficient_ns, self.operations)
    }

    /// Minimum classic time per operation, in nanoseconds.
    pub fn classic_ns_per_op(&self) -> f64 {
        per_op(self.classic_ns, self.operations)
    }

    /// Ratio rendered for tables, `n/a` when undefined.
    pub fn ratio_display(&self) -> String {
        self.ratio
            .map(|r| format!("{:.2}x", r))
            .unwrap_or_else(|| "n/a".to_string())
    }
}

/// `classic / efficient`, `None` when `efficient == 0`.
pub fn speed_ratio(classic_ns: u64, efficient_ns: u64) -> Option<f64> {
    (efficient_ns > 0).then(|| classic_ns as f64 / efficient_ns as f64)
}

fn per_op(ns: u64, operations: usize) -> f64 {
    if operations == 0 {
        0.0
    } else {
        ns as f64 / operations as f64
    }
}

/// Complete benchmark report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Report title.
    pub title: String,
    /// Report timestamp (RFC 3339).
    pub timestamp: String,
    /// Timer backend used for every measurement.
    pub timer: String,
    /// Free-form notes (seed, configuration).
    pub notes: Vec<String>,
    /// One entry per size per mode, in run order.
    pub results: Vec<SizeResult>,
}

impl BenchmarkReport {
    /// Creates an empty report stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            timer: String::new(),
            notes: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Records the timer backend name.
    pub fn set_timer(&mut self, timer: impl Into<String>) {
        self.timer = timer.into();
    }

    /// Adds a note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Adds a size result.
    pub fn add_result(&mut self, result: SizeResult) {
        self.results.push(result);
    }

    /// Number of size results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Results for one mode, ordered by size as run.
    pub fn series(&self, mode: BenchMode) -> Vec<&SizeResult> {
        self.results.iter().filter(|r| r.mode == mode).collect()
    }

    /// Modes present in the report, in first-seen order.
    pub fn modes(&self) -> Vec<BenchMode> {
        let mut modes = Vec::new();
        for result in &self.results {
            if !modes.contains(&result.mode) {
                modes.push(result.mode);
            }
        }
        modes
    }

    /// Summary across all results.
    pub fn aggregate(&self) -> AggregatedResults {
        aggregate_results(&self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_result_reduces_to_minimum() {
        let result = SizeResult::new(1_000, 500, BenchMode::Query, 42, vec![90, 60, 80], vec![30, 20, 40]);
        assert_eq!(result.classic_ns, 60);
        assert_eq!(result.efficient_ns, 20);
        assert_eq!(result.trials, 3);
        assert_eq!(result.ratio, Some(3.0));
        assert_eq!(result.ratio_display(), "3.00x");
        assert!((result.efficient_ns_per_op() - 0.04).abs() < 1e-12);
        assert_eq!(result.classic_statistics().max, 90);
    }

    #[test]
    fn test_zero_efficient_time_has_no_ratio() {
        let result = SizeResult::new(10, 10, BenchMode::Update, 0, vec![5], vec![0]);
        assert_eq!(result.ratio, None);
        assert_eq!(result.ratio_display(), "n/a");
        assert_eq!(speed_ratio(0, 0), None);
    }

    #[test]
    fn test_report_series_and_modes() {
        let mut report = BenchmarkReport::new("Test");
        report.add_result(SizeResult::new(10, 1, BenchMode::Query, 0, vec![2], vec![1]));
        report.add_result(SizeResult::new(10, 1, BenchMode::Update, 0, vec![2], vec![1]));
        report.add_result(SizeResult::new(20, 1, BenchMode::Query, 0, vec![4], vec![2]));

        assert_eq!(report.result_count(), 3);
        assert_eq!(report.modes(), vec![BenchMode::Query, BenchMode::Update]);
        let sizes: Vec<usize> = report.series(BenchMode::Query).iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![10, 20]);
        assert!(!report.timestamp.is_empty());
    }
}
