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

//! Verify command - cross-validates both trees on a random workload.

use crate::error::CliError;
use segtree_bench::{cross_validate, WorkloadConfig, WorkloadGenerator};
use segtree_core::Limits;

/// Generates a workload and checks that both trees answer every query the
/// same way.
pub fn verify(
    size: usize,
    operations: usize,
    seed: Option<u64>,
    max_value: Option<i64>,
) -> Result<(), CliError> {
    let mut config = WorkloadConfig::new(operations);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(max_value) = max_value {
        if max_value < 0 {
            return Err(CliError::invalid_input("--max-value must not be negative"));
        }
        config = config.with_max_value(max_value);
    }

    let workload = WorkloadGenerator::new(config).generate(size)?;
    let summary = cross_validate(&workload, &Limits::default())?;

    println!(
        "OK: size {}: {} queries and {} updates agree",
        size, summary.queries, summary.updates
    );
    Ok(())
}
