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

//! Error types for segment tree benchmarking operations.
//!
//! This module provides structured error handling for configuration,
//! timer setup, workload generation and cross-validation.

use crate::core::config::BenchMode;
use segtree_core::SegTreeError;
use std::io;
use thiserror::Error;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The requested timer backend cannot run on this host
    #[error("Timer '{timer}' is unavailable: {reason}")]
    TimerUnavailable {
        /// Backend name
        timer: String,
        /// Why the backend could not be set up
        reason: String,
    },

    /// Classic and efficient trials produced different checksums
    #[error(
        "Checksum mismatch at size {size} ({mode}) trial {trial}: classic={classic}, efficient={efficient}"
    )]
    ChecksumMismatch {
        /// Domain size
        size: usize,
        /// Benchmark mode
        mode: BenchMode,
        /// Trial index
        trial: usize,
        /// Classic tree checksum
        classic: u64,
        /// Efficient tree checksum
        efficient: u64,
    },

    /// A single query answered differently on the two trees
    #[error(
        "Trees diverged at operation {index} on [{left}, {right}]: classic={classic}, efficient={efficient}"
    )]
    Divergence {
        /// Index of the operation in the workload
        index: usize,
        /// Inclusive left bound
        left: usize,
        /// Inclusive right bound
        right: usize,
        /// Classic tree answer
        classic: i64,
        /// Efficient tree answer
        efficient: i64,
    },

    /// A tree no longer satisfies parent = left + right
    #[error("Invariant violated in {tree} tree")]
    InvariantViolated {
        /// Tree name
        tree: &'static str,
    },

    /// Tree construction failed
    #[error(transparent)]
    Tree(#[from] SegTreeError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization or deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BenchError {
    /// Creates an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates a timer unavailable error.
    pub fn timer_unavailable(timer: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TimerUnavailable {
            timer: timer.into(),
            reason: reason.into(),
        }
    }
}

impl From<io::Error> for BenchError {
    fn from(source: io::Error) -> Self {
        Self::Io(source.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization(source.to_string())
    }
}
