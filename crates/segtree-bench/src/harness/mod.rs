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

//! Benchmark execution harness.
//!
//! - **trial**: Replaying a workload against one tree and folding checksums
//! - **collector**: Per-algorithm trial samples and their statistics
//! - **aggregator**: Summaries across sizes and modes
//! - **runner**: Orchestration of sizes, modes and trials
//! - **validate**: Operation-by-operation cross-validation of both trees

pub mod aggregator;
pub mod collector;
pub mod runner;
pub mod trial;
pub mod validate;

// Re-export commonly used types
pub use aggregator::{aggregate_results, slower_efficient_sizes, AggregatedResults, RatioPoint};
pub use collector::{compute_statistics, Statistics, TrialCollector};
pub use runner::BenchmarkRunner;
pub use trial::{fold_checksum, replay, CHECKSUM_MODULUS};
pub use validate::{cross_validate, ValidationSummary};
