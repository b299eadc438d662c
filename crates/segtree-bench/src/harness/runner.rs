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

//! Benchmark runner for executing and collecting results.
//!
//! For every configured size the runner generates one workload, then for
//! every mode runs all classic trials followed by all efficient trials.
//! Each trial rebuilds its tree from the base array outside the timed
//! region and times only the replay. The per-algorithm minimum is kept.

use super::collector::TrialCollector;
use super::trial::replay;
use crate::core::config::{BenchConfig, BenchMode};
use crate::error::{BenchError, Result};
use crate::generators::{Workload, WorkloadConfig, WorkloadGenerator};
use crate::reporters::types::{BenchmarkReport, SizeResult};
use crate::timer::{create_timer, time_with, TimerSource};
use segtree_core::{ClassicSegmentTree, EfficientSegmentTree, RangeSum};

/// Default report title.
pub const REPORT_TITLE: &str = "Segment Tree Comparison";

/// Runner for executing benchmarks with a validated configuration.
pub struct BenchmarkRunner {
    config: BenchConfig,
    timer: Box<dyn TimerSource>,
    generator: WorkloadGenerator,
}

impl BenchmarkRunner {
    /// Validates `config` and constructs its timer backend.
    ///
    /// Timer failures surface here, before any workload is generated.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let timer = create_timer(config.timer, config.calibration())?;
        Ok(Self::assemble(config, timer))
    }

    /// Validates `config` and uses the given timer instead of constructing
    /// one from `config.timer`.
    pub fn with_timer(config: BenchConfig, timer: Box<dyn TimerSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, timer))
    }

    fn assemble(config: BenchConfig, timer: Box<dyn TimerSource>) -> Self {
        let generator = WorkloadGenerator::new(WorkloadConfig::from(&config));
        Self {
            config,
            timer,
            generator,
        }
    }

    /// Returns the runner configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Name of the timer backend in use.
    pub fn timer_name(&self) -> &'static str {
        self.timer.name()
    }

    /// Runs every configured size and mode.
    pub fn run(&mut self) -> Result<BenchmarkReport> {
        let mut report = BenchmarkReport::new(REPORT_TITLE);
        report.set_timer(self.timer.name());
        report.add_note(format!(
            "{} operations per size, minimum of {} trials",
            self.config.operations, self.config.trials
        ));
        match self.config.seed {
            Some(seed) => report.add_note(format!("seed {}", seed)),
            None => report.add_note("seed drawn from OS entropy"),
        }

        tracing::info!(
            sizes = self.config.sizes.len(),
            operations = self.config.operations,
            trials = self.config.trials,
            timer = self.timer.name(),
            "starting benchmark run"
        );

        let sizes = self.config.sizes.clone();
        for size in sizes {
            for result in self.run_size(size)? {
                report.add_result(result);
            }
        }

        tracing::info!(results = report.result_count(), "benchmark run complete");
        Ok(report)
    }

    /// Generates a workload for `size` and runs every configured mode on it.
    pub fn run_size(&mut self, size: usize) -> Result<Vec<SizeResult>> {
        self.config.limits.check(size)?;
        let workload = self.generator.generate(size)?;
        tracing::info!(size, "benchmarking size");

        let modes = self.config.modes.clone();
        modes
            .into_iter()
            .map(|mode| self.run_mode(&workload, mode))
            .collect()
    }

    /// Runs `trials` classic trials then `trials` efficient trials of one
    /// mode over `workload`, and compares their checksums trial by trial.
    pub fn run_mode(&mut self, workload: &Workload, mode: BenchMode) -> Result<SizeResult> {
        let size = workload.size();
        let limits = self.config.limits;

        let mut classic = ClassicSegmentTree::from_values(workload.values(), &limits)?;
        let classic_trials = self.run_trials(&mut classic, workload, mode);
        drop(classic);

        let mut efficient = EfficientSegmentTree::from_values(workload.values(), &limits)?;
        let efficient_trials = self.run_trials(&mut efficient, workload, mode);
        drop(efficient);

        let checksum = compare_checksums(size, mode, &classic_trials, &efficient_trials)?;
        let (classic_samples, _) = classic_trials.into_parts();
        let (efficient_samples, _) = efficient_trials.into_parts();

        let result = SizeResult::new(
            size,
            workload.operations().len(),
            mode,
            checksum,
            classic_samples,
            efficient_samples,
        );
        tracing::info!(
            size,
            mode = %mode,
            classic_ns = result.classic_ns,
            efficient_ns = result.efficient_ns,
            ratio = %result.ratio_display(),
            "mode complete"
        );
        Ok(result)
    }

    fn run_trials<T: RangeSum>(
        &mut self,
        tree: &mut T,
        workload: &Workload,
        mode: BenchMode,
    ) -> TrialCollector {
        let mut collector = TrialCollector::with_capacity(self.config.trials);
        for trial in 0..self.config.trials {
            tree.rebuild(workload.values());
            let (checksum, elapsed) = time_with(self.timer.as_mut(), || {
                replay(tree, workload.operations(), mode)
            });
            collector.record(elapsed, checksum);
            tracing::debug!(
                tree = T::NAME,
                size = workload.size(),
                mode = %mode,
                trial,
                elapsed_ns = elapsed,
                checksum,
                "trial complete"
            );
        }
        collector
    }
}

fn compare_checksums(
    size: usize,
    mode: BenchMode,
    classic: &TrialCollector,
    efficient: &TrialCollector,
) -> Result<u64> {
    let pairs = classic.checksums().iter().zip(efficient.checksums());
    for (trial, (&c, &e)) in pairs.enumerate() {
        if c != e {
            return Err(BenchError::ChecksumMismatch {
                size,
                mode,
                trial,
                classic: c,
                efficient: e,
            });
        }
    }
    Ok(classic.checksums().first().copied().unwrap_or(0))
}
