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

//! Top-down recursive segment tree.
//!
//! Node `v` covers the closed interval `[lo, hi]`; its children are `2v`
//! over `[lo, mid]` and `2v + 1` over `[mid + 1, hi]` with
//! `mid = (lo + hi) / 2`. The root is node `1` over `[0, n - 1]`. Storage is
//! `4n` slots, enough for any `n` under this numbering.
//!
//! The native query here is closed (`[left, right]`). The half-open
//! [`RangeSum::query`] converts `[left, right)` to `[left, right - 1]`.

use crate::error::{check_index, check_range, SegTreeResult};
use crate::limits::Limits;
use crate::range_sum::RangeSum;

const ROOT: usize = 1;

/// Recursive segment tree with `4n` node slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicSegmentTree {
    n: usize,
    nodes: Vec<i64>,
}

impl ClassicSegmentTree {
    /// Builds a tree over `values` using the default [`Limits`].
    pub fn new(values: &[i64]) -> SegTreeResult<Self> {
        Self::with_limits(values, &Limits::default())
    }

    /// Builds a tree over `values`, failing if the domain is empty or larger
    /// than `limits.max_len`.
    pub fn with_limits(values: &[i64], limits: &Limits) -> SegTreeResult<Self> {
        limits.check(values.len())?;

        let n = values.len();
        let mut tree = Self {
            n,
            nodes: vec![0; 4 * n],
        };
        tree.build(values);
        Ok(tree)
    }

    /// Re-populates the whole tree from `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` differs from the domain size.
    pub fn build(&mut self, values: &[i64]) {
        assert_eq!(
            values.len(),
            self.n,
            "build expects {} values, got {}",
            self.n,
            values.len()
        );
        self.init(values, ROOT, 0, self.n - 1);
    }

    fn init(&mut self, values: &[i64], node: usize, lo: usize, hi: usize) {
        if lo == hi {
            self.nodes[node] = values[lo];
        } else {
            let mid = (lo + hi) / 2;
            self.init(values, node * 2, lo, mid);
            self.init(values, node * 2 + 1, mid + 1, hi);
            self.nodes[node] = self.nodes[node * 2] + self.nodes[node * 2 + 1];
        }
    }

    /// Sets `index` to `value`, recomputing every ancestor on the way back up.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn update(&mut self, index: usize, value: i64) {
        assert!(
            index < self.n,
            "index {} out of bounds for domain of size {}",
            index,
            self.n
        );
        self.update_node(ROOT, 0, self.n - 1, index, value);
    }

    fn update_node(&mut self, node: usize, lo: usize, hi: usize, index: usize, value: i64) {
        if lo == hi {
            self.nodes[node] = value;
        } else {
            let mid = (lo + hi) / 2;
            if index > mid {
                self.update_node(node * 2 + 1, mid + 1, hi, index, value);
            } else {
                self.update_node(node * 2, lo, mid, index, value);
            }
            self.nodes[node] = self.nodes[node * 2] + self.nodes[node * 2 + 1];
        }
    }

    /// Sum over the closed range `[left, right]`. Returns 0 when
    /// `left > right`.
    ///
    /// # Panics
    ///
    /// Panics if `left <= right` and `right >= len()`.
    #[inline]
    pub fn query_closed(&self, left: usize, right: usize) -> i64 {
        if left > right {
            return 0;
        }
        assert!(
            right < self.n,
            "invalid range [{}, {}] for domain of size {}",
            left,
            right,
            self.n
        );
        self.query_node(ROOT, 0, self.n - 1, left, right)
    }

    fn query_node(&self, node: usize, lo: usize, hi: usize, left: usize, right: usize) -> i64 {
        if left > right {
            return 0;
        }
        if left == lo && right == hi {
            return self.nodes[node];
        }
        let mid = (lo + hi) / 2;
        self.query_node(node * 2, lo, mid, left, right.min(mid))
            + self.query_node(node * 2 + 1, mid + 1, hi, left.max(mid + 1), right)
    }

    /// Sum over the half-open range `[left, right)`.
    ///
    /// # Panics
    ///
    /// Panics unless `left <= right <= len()`.
    #[inline]
    pub fn query(&self, left: usize, right: usize) -> i64 {
        assert!(
            left <= right && right <= self.n,
            "invalid range [{}, {}) for domain of size {}",
            left,
            right,
            self.n
        );
        if left == right {
            return 0;
        }
        self.query_node(ROOT, 0, self.n - 1, left, right - 1)
    }

    /// Like [`update`](Self::update) but reports a bad index as an error.
    pub fn checked_update(&mut self, index: usize, value: i64) -> SegTreeResult<()> {
        check_index(index, self.n)?;
        self.update(index, value);
        Ok(())
    }

    /// Like [`query`](Self::query) but reports a bad range as an error.
    pub fn checked_query(&self, left: usize, right: usize) -> SegTreeResult<i64> {
        check_range(left, right, self.n)?;
        Ok(self.query(left, right))
    }

    /// Number of leaf positions.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`: construction rejects empty domains.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Current value at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<i64> {
        if index >= self.n {
            return None;
        }
        let (mut node, mut lo, mut hi) = (ROOT, 0, self.n - 1);
        while lo != hi {
            let mid = (lo + hi) / 2;
            if index > mid {
                node = node * 2 + 1;
                lo = mid + 1;
            } else {
                node *= 2;
                hi = mid;
            }
        }
        Some(self.nodes[node])
    }

    /// Root node, which holds the sum of every leaf.
    pub fn root(&self) -> i64 {
        self.nodes[ROOT]
    }

    /// Verifies that every internal node equals the sum of its children.
    pub fn check_invariant(&self) -> bool {
        self.check_node(ROOT, 0, self.n - 1)
    }

    fn check_node(&self, node: usize, lo: usize, hi: usize) -> bool {
        if lo == hi {
            return true;
        }
        let mid = (lo + hi) / 2;
        self.nodes[node] == self.nodes[node * 2] + self.nodes[node * 2 + 1]
            && self.check_node(node * 2, lo, mid)
            && self.check_node(node * 2 + 1, mid + 1, hi)
    }
}

impl RangeSum for ClassicSegmentTree {
    const NAME: &'static str = "classic";

    fn from_values(values: &[i64], limits: &Limits) -> SegTreeResult<Self> {
        Self::with_limits(values, limits)
    }

    fn len(&self) -> usize {
        self.n
    }

    fn rebuild(&mut self, values: &[i64]) {
        self.build(values);
    }

    #[inline]
    fn modify(&mut self, position: usize, value: i64) {
        self.update(position, value);
    }

    #[inline]
    fn query(&self, left: usize, right: usize) -> i64 {
        ClassicSegmentTree::query(self, left, right)
    }

    fn total(&self) -> i64 {
        self.root()
    }

    fn check_invariant(&self) -> bool {
        ClassicSegmentTree::check_invariant(self)
    }
}
