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

//! Operation-by-operation agreement between the two trees.

use crate::error::{BenchError, Result};
use crate::generators::{OpKind, Workload};
use segtree_core::{ClassicSegmentTree, EfficientSegmentTree, Limits, RangeSum};
use serde::{Deserialize, Serialize};

/// Counts of records replayed by [`cross_validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Queries whose answers matched.
    pub queries: usize,
    /// Updates applied to both trees.
    pub updates: usize,
}

/// Replays `workload` in mixed mode against fresh instances of both trees.
///
/// Every query answer is compared as it happens; the first disagreement
/// returns [`BenchError::Divergence`]. After the last record both trees are
/// checked for the parent = left + right invariant and must hold the same
/// total.
pub fn cross_validate(workload: &Workload, limits: &Limits) -> Result<ValidationSummary> {
    let mut classic = ClassicSegmentTree::from_values(workload.values(), limits)?;
    let mut efficient = EfficientSegmentTree::from_values(workload.values(), limits)?;
    let mut summary = ValidationSummary::default();

    for (index, op) in workload.operations().iter().enumerate() {
        match op.kind {
            OpKind::Query => {
                let c = RangeSum::query(&classic, op.left, op.right + 1);
                let e = RangeSum::query(&efficient, op.left, op.right + 1);
                if c != e {
                    return Err(BenchError::Divergence {
                        index,
                        left: op.left,
                        right: op.right,
                        classic: c,
                        efficient: e,
                    });
                }
                summary.queries += 1;
            }
            OpKind::Update => {
                classic.modify(op.left, op.value());
                efficient.modify(op.left, op.value());
                summary.updates += 1;
            }
        }
    }

    if !RangeSum::check_invariant(&classic) {
        return Err(BenchError::InvariantViolated {
            tree: ClassicSegmentTree::NAME,
        });
    }
    if !RangeSum::check_invariant(&efficient) {
        return Err(BenchError::InvariantViolated {
            tree: EfficientSegmentTree::NAME,
        });
    }
    let (c, e) = (RangeSum::total(&classic), RangeSum::total(&efficient));
    if c != e {
        return Err(BenchError::Divergence {
            index: workload.operations().len(),
            left: 0,
            right: workload.size() - 1,
            classic: c,
            efficient: e,
        });
    }

    tracing::debug!(
        size = workload.size(),
        queries = summary.queries,
        updates = summary.updates,
        "cross-validation passed"
    );
    Ok(summary)
}
