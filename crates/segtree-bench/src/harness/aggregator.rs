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

//! Result aggregation across sizes and modes.

use crate::core::config::BenchMode;
use crate::reporters::types::{speed_ratio, SizeResult};
use serde::{Deserialize, Serialize};

/// Speed ratio observed at one size in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioPoint {
    /// Domain size.
    pub size: usize,
    /// Benchmark mode.
    pub mode: BenchMode,
    /// `classic / efficient`.
    pub ratio: f64,
}

/// Aggregated view of a set of size results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResults {
    /// Number of size results.
    pub total_results: usize,
    /// Sum of classic minimum times.
    pub classic_total_ns: u64,
    /// Sum of efficient minimum times.
    pub efficient_total_ns: u64,
    /// `classic_total_ns / efficient_total_ns`.
    pub overall_ratio: Option<f64>,
    /// Result where the efficient tree gained the most.
    pub best: Option<RatioPoint>,
    /// Result where the efficient tree gained the least.
    pub worst: Option<RatioPoint>,
}

/// Aggregates a slice of size results.
///
/// Results without a defined ratio count toward the totals but are never
/// picked as best or worst.
pub fn aggregate_results(results: &[SizeResult]) -> AggregatedResults {
    let classic_total_ns = results.iter().map(|r| r.classic_ns).sum::<u64>();
    let efficient_total_ns = results.iter().map(|r| r.efficient_ns).sum::<u64>();

    let points = results.iter().filter_map(|r| {
        r.ratio.map(|ratio| RatioPoint {
            size: r.size,
            mode: r.mode,
            ratio,
        })
    });

    let best = points.clone().max_by(|a, b| a.ratio.total_cmp(&b.ratio));
    let worst = points.min_by(|a, b| a.ratio.total_cmp(&b.ratio));

    AggregatedResults {
        total_results: results.len(),
        classic_total_ns,
        efficient_total_ns,
        overall_ratio: speed_ratio(classic_total_ns, efficient_total_ns),
        best,
        worst,
    }
}

/// Sizes and modes at which the efficient tree was not faster.
pub fn slower_efficient_sizes(results: &[SizeResult]) -> Vec<(usize, BenchMode)> {
    results
        .iter()
        .filter(|r| r.efficient_ns >= r.classic_ns)
        .map(|r| (r.size, r.mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(size: usize, mode: BenchMode, classic: u64, efficient: u64) -> SizeResult {
        SizeResult::new(size, 100, mode, 0, vec![classic], vec![efficient])
    }

    #[test]
    fn test_aggregate_results() {
        let results = vec![
            result(10, BenchMode::Query, 300, 100),
            result(20, BenchMode::Query, 200, 100),
            result(10, BenchMode::Update, 100, 100),
        ];
        let agg = aggregate_results(&results);

        assert_eq!(agg.total_results, 3);
        assert_eq!(agg.classic_total_ns, 600);
        assert_eq!(agg.efficient_total_ns, 300);
        assert_eq!(agg.overall_ratio, Some(2.0));
        assert_eq!(agg.best.map(|p| p.size), Some(10));
        assert_eq!(agg.best.map(|p| p.mode), Some(BenchMode::Query));
        assert_eq!(agg.worst.map(|p| p.mode), Some(BenchMode::Update));
    }

    #[test]
    fn test_aggregate_empty() {
        let agg = aggregate_results(&[]);
        assert_eq!(agg.total_results, 0);
        assert_eq!(agg.overall_ratio, None);
        assert!(agg.best.is_none());
        assert!(agg.worst.is_none());
    }

    #[test]
    fn test_slower_efficient_sizes() {
        let results = vec![
            result(10, BenchMode::Query, 300, 100),
            result(20, BenchMode::Update, 100, 150),
        ];
        assert_eq!(slower_efficient_sizes(&results), vec![(20, BenchMode::Update)]);
    }
}
