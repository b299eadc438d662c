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

//! Markdown export for benchmark reports.

use crate::error::{BenchError, Result};
use crate::reporters::types::BenchmarkReport;
use std::fs;
use std::path::Path;

/// Renders the report as Markdown, one results table per mode.
pub fn render_markdown(report: &BenchmarkReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!("**Timestamp:** {}\n\n", report.timestamp));
    md.push_str(&format!("**Timer:** {}\n\n", report.timer));

    if !report.notes.is_empty() {
        md.push_str("## Notes\n\n");
        for note in &report.notes {
            md.push_str(&format!("- {}\n", note));
        }
        md.push('\n');
    }

    for mode in report.modes() {
        md.push_str(&format!("## {} mode\n\n", mode));
        md.push_str("| Size | Classic (ns) | Efficient (ns) | Median classic (ns) | Median efficient (ns) | Ratio | Checksum |\n");
        md.push_str("|-----:|-------------:|---------------:|--------------------:|----------------------:|------:|---------:|\n");

        for result in report.series(mode) {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} |\n",
                result.size,
                result.classic_ns,
                result.efficient_ns,
                result.classic_statistics().median,
                result.efficient_statistics().median,
                result.ratio_display(),
                result.checksum
            ));
        }
        md.push('\n');
    }

    let agg = report.aggregate();
    if let Some(ratio) = agg.overall_ratio {
        md.push_str(&format!("**Overall speedup:** {:.2}x\n", ratio));
    }

    md
}

/// Exports the benchmark report as Markdown.
///
/// # Arguments
///
/// * `report` - The benchmark report to export
/// * `path` - Output file path
pub fn export_markdown(report: &BenchmarkReport, path: &Path) -> Result<()> {
    fs::write(path, render_markdown(report))
        .map_err(|e| BenchError::Io(format!("{}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), "wrote Markdown report");
    Ok(())
}
