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

//! Benchmarking commands.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand};
use segtree_bench::{BenchMode, SizeSweep, TimerKind};
use std::path::PathBuf;

/// Options shared by `run` and `sweep`.
///
/// Every option left unset keeps the value from `--config`, or the built-in
/// default when no file is given.
#[derive(Args, Debug, Clone, Default)]
pub struct RunOptions {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Operations generated per size
    #[arg(short = 'q', long)]
    pub operations: Option<usize>,

    /// Timed trials per tree (the minimum is reported)
    #[arg(short = 'k', long)]
    pub trials: Option<usize>,

    /// Mode to run: query, update or mixed (repeatable)
    #[arg(short, long = "mode", value_name = "MODE")]
    pub modes: Vec<BenchMode>,

    /// Timer backend: monotonic, high-resolution, tsc or tick
    #[arg(short, long)]
    pub timer: Option<TimerKind>,

    /// Cycle counter calibration window in milliseconds
    #[arg(long, value_name = "MS")]
    pub calibration_ms: Option<u64>,

    /// Workload seed for repeatable runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Largest generated leaf value
    #[arg(long)]
    pub max_value: Option<i64>,

    /// Largest domain size a tree may be built over
    #[arg(long)]
    pub max_len: Option<usize>,

    /// Write the report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Write the report as Markdown to this path
    #[arg(long, value_name = "PATH")]
    pub markdown: Option<PathBuf>,
}

/// Size progression for `sweep`.
#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    /// First size
    #[arg(long, default_value_t = 1_000)]
    pub start: usize,

    /// Step added while below the linear limit
    #[arg(long, default_value_t = 1_000)]
    pub linear_step: usize,

    /// Size at which stepping switches from additive to multiplicative
    #[arg(long, default_value_t = 10_000)]
    pub linear_limit: usize,

    /// Multiplier applied from the linear limit on
    #[arg(long, default_value_t = 2)]
    pub factor: usize,

    /// Largest size (inclusive)
    #[arg(long, default_value_t = 1_000_000)]
    pub max: usize,
}

impl From<&SweepArgs> for SizeSweep {
    fn from(args: &SweepArgs) -> Self {
        SizeSweep {
            start: args.start,
            linear_step: args.linear_step,
            linear_limit: args.linear_limit,
            factor: args.factor,
            max: args.max,
        }
    }
}

/// Benchmarking commands.
#[derive(Subcommand)]
pub enum BenchCommands {
    /// Benchmark explicit domain sizes
    ///
    /// Generates one workload per size and times both trees on it in every
    /// selected mode.
    Run {
        /// Domain size (repeatable); defaults to the configured sizes
        #[arg(short, long = "size", value_name = "N")]
        sizes: Vec<usize>,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Benchmark a sweep of domain sizes
    ///
    /// Sizes grow by a fixed step up to the linear limit, then by a factor
    /// up to the maximum.
    Sweep {
        #[command(flatten)]
        sweep: SweepArgs,

        #[command(flatten)]
        options: RunOptions,
    },
}

impl BenchCommands {
    /// Execute the benchmarking command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            BenchCommands::Run { sizes, options } => commands::run(&sizes, &options),
            BenchCommands::Sweep { sweep, options } => {
                commands::sweep(&SizeSweep::from(&sweep), &options)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: BenchCommands,
    }

    #[test]
    fn test_sweep_defaults_match_library() {
        let cli = TestCli::parse_from(["segtree", "sweep"]);
        match cli.command {
            BenchCommands::Sweep { sweep, .. } => {
                assert_eq!(SizeSweep::from(&sweep), SizeSweep::default());
            }
            BenchCommands::Run { .. } => panic!("expected sweep"),
        }
    }

    #[test]
    fn test_run_parses_repeated_flags() {
        let cli = TestCli::parse_from([
            "segtree", "run", "-s", "10", "--size", "20", "--mode", "query", "-m", "mixed",
            "--timer", "hires", "--seed", "7",
        ]);
        match cli.command {
            BenchCommands::Run { sizes, options } => {
                assert_eq!(sizes, vec![10, 20]);
                assert_eq!(options.modes, vec![BenchMode::Query, BenchMode::Mixed]);
                assert_eq!(options.timer, Some(TimerKind::HighResolution));
                assert_eq!(options.seed, Some(7));
                assert_eq!(options.trials, None);
            }
            BenchCommands::Sweep { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_rejects_unknown_mode() {
        assert!(TestCli::try_parse_from(["segtree", "run", "--mode", "delete"]).is_err());
    }
}
