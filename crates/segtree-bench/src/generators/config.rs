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

//! Generator configuration.

use crate::core::config::{BenchConfig, DEFAULT_MAX_VALUE, DEFAULT_OPERATIONS};

/// Workload generator configuration with builder pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadConfig {
    /// Number of operation records per workload.
    pub operations: usize,
    /// Fixed seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Largest leaf value (inclusive); values are drawn from `[0, max_value]`.
    pub max_value: i64,
}

impl WorkloadConfig {
    /// Creates a new configuration with default values.
    pub fn new(operations: usize) -> Self {
        Self {
            operations,
            seed: None,
            max_value: DEFAULT_MAX_VALUE,
        }
    }

    /// Sets a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the largest leaf value.
    pub fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OPERATIONS)
    }
}

impl From<&BenchConfig> for WorkloadConfig {
    fn from(config: &BenchConfig) -> Self {
        Self {
            operations: config.operations,
            seed: config.seed,
            max_value: config.max_value,
        }
    }
}
