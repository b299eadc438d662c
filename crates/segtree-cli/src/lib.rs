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

//! segtree CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Benchmarking
//!
//! - **run**: Benchmark one or more explicit domain sizes
//! - **sweep**: Benchmark a linear-then-geometric progression of sizes
//!
//! ## Checks
//!
//! - **verify**: Replay a random workload against both trees and compare
//!   every answer
//! - **timers**: List timer backends and whether this host supports them
//!
//! Every benchmarking flag overrides the matching field of an optional JSON
//! configuration file (`--config`).

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
