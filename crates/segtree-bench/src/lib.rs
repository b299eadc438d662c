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

//! Segment Tree Benchmark Framework
//!
//! Times a recursive top-down segment tree against a bottom-up iterative one
//! on identical random workloads.
//!
//! ## Features
//!
//! - **Timers**: interchangeable stopwatch backends, all reporting nanoseconds
//! - **Workloads**: seedable operation streams and base arrays
//! - **Harness**: minimum-of-trials timing with checksum cross-checks
//! - **Reporters**: console, JSON and Markdown output
//!
//! ## Usage
//!
//! ```no_run
//! use segtree_bench::{BenchConfig, BenchmarkRunner};
//!
//! let config = BenchConfig::default()
//!     .with_sizes(&[1_000, 10_000])
//!     .with_operations(100_000)
//!     .with_seed(42);
//! let mut runner = BenchmarkRunner::new(config)?;
//! let report = runner.run()?;
//! segtree_bench::reporters::print_report(&report);
//! # Ok::<(), segtree_bench::BenchError>(())
//! ```
//!
//! Run the criterion benches:
//! ```bash
//! cargo bench --package segtree-bench
//! ```

pub mod core;
pub mod error;
pub mod generators;
pub mod harness;
pub mod reporters;
pub mod timer;

// Re-export key types for convenience
pub use crate::core::{BenchConfig, BenchMode, SizeSweep};
pub use error::{BenchError, Result};
pub use generators::{OpKind, Operation, Workload, WorkloadConfig, WorkloadGenerator};
pub use harness::{cross_validate, BenchmarkRunner, ValidationSummary};
pub use reporters::{BenchmarkReport, SizeResult};
pub use timer::{create_timer, timer_availability, TimerKind, TimerSource};
