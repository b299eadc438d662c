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

//! segtree Command Line Interface

use clap::Parser;
use segtree_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// segtree - classic vs bottom-up segment tree benchmark
///
/// Times a recursive segment tree against an iterative bottom-up one on
/// identical random workloads and reports the minimum of repeated trials.
///
/// # Examples
///
/// ```bash
/// # One size, default modes
/// segtree run --size 100000 --operations 100000 --seed 42
///
/// # Size sweep with a Markdown report
/// segtree sweep --max 1000000 --markdown results.md
///
/// # Check both trees agree on a random workload
/// segtree verify --size 1000 --operations 1000
/// ```
#[derive(Parser)]
#[command(name = "segtree")]
#[command(author, version, about = "segtree - classic vs bottom-up segment tree benchmark", long_about = None)]
struct Cli {
    /// Log per-trial details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let directive = if verbose { "segtree=debug" } else { "segtree=info" };
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
