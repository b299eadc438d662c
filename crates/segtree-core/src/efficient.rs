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

//! Bottom-up iterative segment tree.
//!
//! Leaves live at slots `[n, 2n)`; slot `p` has parent `p >> 1` and sibling
//! `p ^ 1`. Slot `0` is never read. Every operation is a loop over slot
//! indices, so there is no recursion and no allocation after construction.
//!
//! # Example
//!
//! ```
//! use segtree_core::EfficientSegmentTree;
//!
//! let mut tree = EfficientSegmentTree::new(&[1, 2, 3, 4]).unwrap();
//! assert_eq!(tree.query(0, 4), 10);
//!
//! tree.modify(2, 10);
//! assert_eq!(tree.query(0, 4), 17);
//! assert_eq!(tree.query(2, 3), 10);
//! ```

use crate::error::{check_index, check_range, SegTreeResult};
use crate::limits::Limits;
use crate::range_sum::RangeSum;

/// Array-packed segment tree with `2n` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EfficientSegmentTree {
    n: usize,
    slots: Vec<i64>,
}

impl EfficientSegmentTree {
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
            slots: vec![0; 2 * n],
        };
        tree.build(values);
        Ok(tree)
    }

    /// Places `values[i]` at slot `n + i` and recomputes every internal slot
    /// from `n - 1` down to the root.
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

        let n = self.n;
        self.slots[n..].copy_from_slice(values);
        for i in (1..n).rev() {
            self.slots[i] = self.slots[i << 1] + self.slots[i << 1 | 1];
        }
    }

    /// Sets `position` to `value` and recomputes its ancestors.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()`.
    #[inline]
    pub fn modify(&mut self, position: usize, value: i64) {
        assert!(
            position < self.n,
            "position {} out of bounds for domain of size {}",
            position,
            self.n
        );

        let mut p = position + self.n;
        self.slots[p] = value;
        while p > 1 {
            self.slots[p >> 1] = self.slots[p] + self.slots[p ^ 1];
            p >>= 1;
        }
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

        let mut sum = 0;
        let mut l = left + self.n;
        let mut r = right + self.n;
        while l < r {
            if l & 1 == 1 {
                sum += self.slots[l];
                l += 1;
            }
            if r & 1 == 1 {
                r -= 1;
                sum += self.slots[r];
            }
            l >>= 1;
            r >>= 1;
        }
        sum
    }

    /// Like [`modify`](Self::modify) but reports a bad index as an error.
    pub fn checked_modify(&mut self, position: usize, value: i64) -> SegTreeResult<()> {
        check_index(position, self.n)?;
        self.modify(position, value);
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

    /// Current value at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<i64> {
        if position < self.n {
            Some(self.slots[self.n + position])
        } else {
            None
        }
    }

    /// Root slot, which holds the sum of every leaf.
    pub fn root(&self) -> i64 {
        self.slots[1]
    }

    /// Raw slot storage (`2n` entries, slot `0` unused).
    pub fn slots(&self) -> &[i64] {
        &self.slots
    }

    /// Verifies `slot[i] == slot[2i] + slot[2i + 1]` for every internal slot.
    pub fn check_invariant(&self) -> bool {
        (1..self.n).all(|i| self.slots[i] == self.slots[i << 1] + self.slots[i << 1 | 1])
    }
}

impl RangeSum for EfficientSegmentTree {
    const NAME: &'static str = "efficient";

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
        EfficientSegmentTree::modify(self, position, value);
    }

    #[inline]
    fn query(&self, left: usize, right: usize) -> i64 {
        EfficientSegmentTree::query(self, left, right)
    }

    fn total(&self) -> i64 {
        self.root()
    }

    fn check_invariant(&self) -> bool {
        EfficientSegmentTree::check_invariant(self)
    }
}
