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

//! Random operation streams and base arrays.
//!
//! A [`Workload`] is generated once per domain size and replayed unchanged
//! against both trees, so timing differences come from the algorithms and
//! not from the data.

use super::config::WorkloadConfig;
use crate::core::config::check_sum_range;
use crate::error::{BenchError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Kind of an operation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Range sum over `[left, right]`.
    Query,
    /// Assign `right` at position `left`.
    Update,
}

/// One operation record. Always `left <= right < n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation kind.
    pub kind: OpKind,
    /// Left bound, or the position for updates.
    pub left: usize,
    /// Right bound (inclusive), or the new value for updates.
    pub right: usize,
}

impl Operation {
    /// Creates a query over the closed range `[left, right]`.
    pub fn query(left: usize, right: usize) -> Self {
        Self {
            kind: OpKind::Query,
            left,
            right,
        }
    }

    /// Creates an update record.
    pub fn update(left: usize, right: usize) -> Self {
        Self {
            kind: OpKind::Update,
            left,
            right,
        }
    }

    /// Value written when the record is applied as an update.
    #[inline]
    pub fn value(&self) -> i64 {
        self.right as i64
    }
}

/// Base array plus operation stream for one domain size.
///
/// Fields are private so every instance has passed the record checks in
/// [`Workload::new`] or come from [`WorkloadGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    values: Vec<i64>,
    operations: Vec<Operation>,
}

impl Workload {
    /// Bundles an existing base array and operation stream.
    ///
    /// Fails if the array is empty or any record violates
    /// `left <= right < values.len()`. The check applies to update records
    /// too, even though their `right` is the value to write: every record
    /// shares one shape so any stream can be replayed in every mode, where
    /// `Query` mode reads an update record as the range `[left, right]`.
    pub fn new(values: Vec<i64>, operations: Vec<Operation>) -> Result<Self> {
        let n = values.len();
        if n == 0 {
            return Err(segtree_core::SegTreeError::EmptyDomain.into());
        }
        if let Some((i, op)) = operations
            .iter()
            .enumerate()
            .find(|(_, op)| op.left > op.right || op.right >= n)
        {
            return Err(BenchError::invalid_config(
                "operations",
                format!(
                    "record {} [{}, {}] is outside domain of size {}",
                    i, op.left, op.right, n
                ),
            ));
        }
        Ok(Self { values, operations })
    }

    /// Initial leaf values; their length is the domain size.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Operation records to replay.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Consumes the workload, returning `(values, operations)`.
    pub fn into_parts(self) -> (Vec<i64>, Vec<Operation>) {
        (self.values, self.operations)
    }

    /// Domain size.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Number of records of each kind, as `(queries, updates)`.
    pub fn kind_counts(&self) -> (usize, usize) {
        let queries = self
            .operations
            .iter()
            .filter(|op| op.kind == OpKind::Query)
            .count();
        (queries, self.operations.len() - queries)
    }
}

/// Seedable generator of base arrays and operation streams.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    config: WorkloadConfig,
    rng: StdRng,
}

impl WorkloadGenerator {
    /// Creates a generator; seeded from OS entropy unless the config fixes a
    /// seed.
    pub fn new(config: WorkloadConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Returns the generator configuration.
    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Draws `n` leaf values uniformly from `[0, max_value]`.
    pub fn generate_values(&mut self, n: usize) -> Vec<i64> {
        let max_value = self.config.max_value.max(0);
        (0..n).map(|_| self.rng.gen_range(0..=max_value)).collect()
    }

    /// Draws `count` records over `[0, n)`: kind uniform over query/update,
    /// two uniform bounds swapped into order.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn generate_operations(&mut self, n: usize, count: usize) -> Vec<Operation> {
        assert!(n > 0, "cannot generate operations over an empty domain");
        (0..count)
            .map(|_| {
                let kind = if self.rng.gen_bool(0.5) {
                    OpKind::Query
                } else {
                    OpKind::Update
                };
                let a = self.rng.gen_range(0..n);
                let b = self.rng.gen_range(0..n);
                let (left, right) = if a <= b { (a, b) } else { (b, a) };
                Operation { kind, left, right }
            })
            .collect()
    }

    /// Generates a complete workload for a domain of `n` positions.
    ///
    /// Fails if the domain is empty or its sums could overflow `i64`.
    pub fn generate(&mut self, n: usize) -> Result<Workload> {
        if n == 0 {
            return Err(segtree_core::SegTreeError::EmptyDomain.into());
        }
        check_sum_range(n, self.config.max_value)?;
        let values = self.generate_values(n);
        let operations = self.generate_operations(n, self.config.operations);
        tracing::debug!(size = n, operations = operations.len(), "generated workload");
        Ok(Workload { values, operations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_ordered_and_in_domain() {
        let mut gen = WorkloadGenerator::new(WorkloadConfig::new(5_000).with_seed(1));
        let workload = gen.generate(37).unwrap();
        assert_eq!(workload.size(), 37);
        assert_eq!(workload.operations().len(), 5_000);
        for op in workload.operations() {
            assert!(op.left <= op.right);
            assert!(op.right < 37);
        }
    }

    #[test]
    fn test_values_in_range() {
        let mut gen = WorkloadGenerator::new(WorkloadConfig::new(0).with_max_value(9).with_seed(2));
        let values = gen.generate_values(1_000);
        assert!(values.iter().all(|v| (0..=9).contains(v)));
    }

    #[test]
    fn test_same_seed_same_workload() {
        let config = WorkloadConfig::new(200).with_seed(12345);
        let a = WorkloadGenerator::new(config).generate(100).unwrap();
        let b = WorkloadGenerator::new(config).generate(100).unwrap();
        assert_eq!(a, b);

        let c = WorkloadGenerator::new(config.with_seed(54321))
            .generate(100)
            .unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_both_kinds_drawn() {
        let mut gen = WorkloadGenerator::new(WorkloadConfig::new(2_000).with_seed(3));
        let workload = gen.generate(10).unwrap();
        let (queries, updates) = workload.kind_counts();
        assert!(queries > 800 && updates > 800);
    }

    #[test]
    fn test_single_position_domain() {
        let mut gen = WorkloadGenerator::new(WorkloadConfig::new(10).with_seed(4));
        let workload = gen.generate(1).unwrap();
        assert!(workload
            .operations()
            .iter()
            .all(|op| op.left == 0 && op.right == 0));
    }

    #[test]
    fn test_overflowing_value_range_rejected() {
        let mut gen = WorkloadGenerator::new(WorkloadConfig::new(1).with_max_value(i64::MAX));
        assert!(matches!(
            gen.generate(4),
            Err(BenchError::InvalidConfig { .. })
        ));
        assert!(gen.generate(1).is_ok());
    }

    #[test]
    fn test_workload_accessors() {
        let workload = Workload::new(vec![5, 6], vec![Operation::update(0, 1)]).unwrap();
        assert_eq!(workload.values(), &[5, 6]);
        assert_eq!(workload.operations(), &[Operation::update(0, 1)]);
        let (values, operations) = workload.into_parts();
        assert_eq!(values.len(), 2);
        assert_eq!(operations.len(), 1);
    }

    #[test]
    fn test_empty_domain_rejected() {
        let mut gen = WorkloadGenerator::new(WorkloadConfig::new(10));
        assert!(gen.generate(0).is_err());
        assert!(Workload::new(Vec::new(), Vec::new()).is_err());
    }

    #[test]
    fn test_workload_new_validates_records() {
        assert!(Workload::new(vec![1, 2, 3], vec![Operation::query(0, 2)]).is_ok());
        assert!(Workload::new(vec![1, 2, 3], vec![Operation::query(2, 1)]).is_err());
        assert!(Workload::new(vec![1, 2, 3], vec![Operation::update(1, 3)]).is_err());
    }
}
