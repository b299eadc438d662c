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

//! Run and sweep commands - time both trees and report.

use crate::cli::RunOptions;
use crate::error::CliError;
use segtree_bench::reporters::{print_report, print_summary, render_markdown, to_json};
use segtree_bench::{BenchConfig, BenchmarkReport, BenchmarkRunner, SizeSweep};
use segtree_core::Limits;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Reads a JSON configuration file; missing fields take defaults.
pub fn load_config(path: &Path) -> Result<BenchConfig, CliError> {
    tracing::info!(path = %path.display(), "loading configuration");
    let text = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Loads `--config` (or the defaults) and applies every flag that was set.
pub fn build_config(options: &RunOptions) -> Result<BenchConfig, CliError> {
    let mut config = match &options.config {
        Some(path) => load_config(path)?,
        None => BenchConfig::default(),
    };

    if let Some(operations) = options.operations {
        config = config.with_operations(operations);
    }
    if let Some(trials) = options.trials {
        config = config.with_trials(trials);
    }
    if !options.modes.is_empty() {
        config = config.with_modes(options.modes.clone());
    }
    if let Some(timer) = options.timer {
        config = config.with_timer(timer);
    }
    if let Some(ms) = options.calibration_ms {
        config = config.with_calibration(Duration::from_millis(ms));
    }
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_value) = options.max_value {
        config = config.with_max_value(max_value);
    }
    if let Some(max_len) = options.max_len {
        config = config.with_limits(Limits::new(max_len));
    }

    Ok(config)
}

/// Benchmarks explicit sizes, or the configured sizes when none are given.
pub fn run(sizes: &[usize], options: &RunOptions) -> Result<(), CliError> {
    let mut config = build_config(options)?;
    if !sizes.is_empty() {
        config = config.with_sizes(sizes);
    }
    execute(config, options)
}

/// Benchmarks every size of `sweep`.
pub fn sweep(sweep: &SizeSweep, options: &RunOptions) -> Result<(), CliError> {
    let config = build_config(options)?.with_sweep(sweep)?;
    execute(config, options)
}

fn execute(config: BenchConfig, options: &RunOptions) -> Result<(), CliError> {
    let mut runner = BenchmarkRunner::new(config)?;
    let report = runner.run()?;

    print_report(&report);
    print_summary(&report);
    export(&report, options)
}

/// Writes the JSON and Markdown reports requested by `options`.
pub fn export(report: &BenchmarkReport, options: &RunOptions) -> Result<(), CliError> {
    if let Some(path) = &options.json {
        write_report(path, &to_json(report)?)?;
    }
    if let Some(path) = &options.markdown {
        write_report(path, &render_markdown(report))?;
    }
    Ok(())
}

fn write_report(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|e| CliError::io_error(path, e))?;
    tracing::info!(path = %path.display(), "wrote report");
    Ok(())
}
