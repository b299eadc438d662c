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

//! Console reporter for benchmark results.
//!
//! Formatting is split from printing so the text can be checked in tests.

use crate::harness::aggregator::slower_efficient_sizes;
use crate::reporters::types::BenchmarkReport;
use std::fmt::Write;

/// Formats the full benchmark report.
pub fn format_report(report: &BenchmarkReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(80);
    let thin = "-".repeat(80);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "BENCHMARK REPORT: {}", report.title);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Timestamp: {}", report.timestamp);
    let _ = writeln!(out, "Timer: {}", report.timer);
    let _ = writeln!(out, "Results: {}", report.result_count());

    if !report.notes.is_empty() {
        let _ = writeln!(out, "\nNotes:");
        for note in &report.notes {
            let _ = writeln!(out, "  - {}", note);
        }
    }

    for mode in report.modes() {
        let _ = writeln!(out, "\n{}", thin);
        let _ = writeln!(out, "{} MODE:", mode.as_str().to_uppercase());
        let _ = writeln!(out, "{}", thin);
        let _ = writeln!(
            out,
            "{:>10} {:>14} {:>14} {:>9} {:>12}",
            "size", "classic (ns)", "efficient (ns)", "ratio", "checksum"
        );
        for result in report.series(mode) {
            let _ = writeln!(
                out,
                "{:>10} {:>14} {:>14} {:>9} {:>12}",
                result.size,
                result.classic_ns,
                result.efficient_ns,
                result.ratio_display(),
                result.checksum
            );
        }
    }

    let _ = write!(out, "{}", rule);
    out
}

/// Formats a short summary of the report.
pub fn format_summary(report: &BenchmarkReport) -> String {
    let agg = report.aggregate();
    let mut out = String::new();
    let rule = "=".repeat(60);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "SUMMARY: {}", report.title);
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Results: {}", agg.total_results);
    if let Some(ratio) = agg.overall_ratio {
        let _ = writeln!(out, "Overall speedup (classic / efficient): {:.2}x", ratio);
    }
    if let Some(best) = agg.best {
        let _ = writeln!(
            out,
            "Best: {:.2}x at size {} ({})",
            best.ratio, best.size, best.mode
        );
    }
    if let Some(worst) = agg.worst {
        let _ = writeln!(
            out,
            "Worst: {:.2}x at size {} ({})",
            worst.ratio, worst.size, worst.mode
        );
    }
    let slower = slower_efficient_sizes(&report.results);
    if !slower.is_empty() {
        let _ = writeln!(out, "Efficient tree not faster at {} point(s):", slower.len());
        for (size, mode) in slower {
            let _ = writeln!(out, "  - size {} ({})", size, mode);
        }
    }
    let _ = write!(out, "{}", rule);
    out
}

/// Prints the full benchmark report to stdout.
pub fn print_report(report: &BenchmarkReport) {
    println!("\n{}\n", format_report(report));
}

/// Prints a summary of the benchmark report to stdout.
pub fn print_summary(report: &BenchmarkReport) {
    println!("\n{}\n", format_summary(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BenchMode;
    use crate::reporters::types::SizeResult;

    fn report() -> BenchmarkReport {
        let mut report = BenchmarkReport::new("Console Test");
        report.set_timer("monotonic");
        report.add_note("seed 1");
        report.add_result(SizeResult::new(1000, 10, BenchMode::Query, 123, vec![400], vec![100]));
        report.add_result(SizeResult::new(1000, 10, BenchMode::Update, 9, vec![100], vec![200]));
        report
    }

    #[test]
    fn test_format_report() {
        let text = format_report(&report());
        assert!(text.contains("BENCHMARK REPORT: Console Test"));
        assert!(text.contains("Timer: monotonic"));
        assert!(text.contains("QUERY MODE:"));
        assert!(text.contains("UPDATE MODE:"));
        assert!(text.contains("4.00x"));
        assert!(text.contains("seed 1"));
    }

    #[test]
    fn test_format_summary() {
        let text = format_summary(&report());
        assert!(text.contains("SUMMARY: Console Test"));
        assert!(text.contains("Best: 4.00x at size 1000 (query)"));
        assert!(text.contains("Worst: 0.50x at size 1000 (update)"));
        assert!(text.contains("size 1000 (update)"));
    }
}
