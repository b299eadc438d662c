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

//! Replaying one workload against one tree.
//!
//! [`replay`] is the body of every timed region, so it does no logging and
//! no allocation.

use crate::core::config::BenchMode;
use crate::generators::{OpKind, Operation};
use segtree_core::RangeSum;

/// Modulus for query checksums.
pub const CHECKSUM_MODULUS: u64 = 1_000_000_007;

/// Adds `value` to a running checksum, modulo [`CHECKSUM_MODULUS`].
#[inline]
pub fn fold_checksum(acc: u64, value: i64) -> u64 {
    let reduced = value.rem_euclid(CHECKSUM_MODULUS as i64) as u64;
    (acc + reduced) % CHECKSUM_MODULUS
}

/// Replays `ops` against `tree` in the given mode and returns the checksum.
///
/// - `Query`: every record is a closed range query `[left, right]`; the
///   checksum folds every answer.
/// - `Update`: every record assigns `right` at `left`; the checksum is the
///   final total.
/// - `Mixed`: records are dispatched on their kind; the checksum folds the
///   query answers.
pub fn replay<T: RangeSum>(tree: &mut T, ops: &[Operation], mode: BenchMode) -> u64 {
    match mode {
        BenchMode::Query => ops
            .iter()
            .fold(0, |acc, op| fold_checksum(acc, tree.query(op.left, op.right + 1))),
        BenchMode::Update => {
            for op in ops {
                tree.modify(op.left, op.value());
            }
            fold_checksum(0, tree.total())
        }
        BenchMode::Mixed => {
            let mut acc = 0;
            for op in ops {
                match op.kind {
                    OpKind::Query => acc = fold_checksum(acc, tree.query(op.left, op.right + 1)),
                    OpKind::Update => tree.modify(op.left, op.value()),
                }
            }
            acc
        }
    }
}
