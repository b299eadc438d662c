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

//! Common interface over both segment tree layouts.

use crate::error::SegTreeResult;
use crate::limits::Limits;

/// A fixed-size array of `i64` supporting point assignment and range sums.
///
/// All ranges passed through this trait are half-open (`[left, right)`).
/// Implementations whose native query is closed convert at this boundary, so
/// callers that only go through `RangeSum` never see the difference.
pub trait RangeSum {
    /// Short identifier used in reports and logs.
    const NAME: &'static str;

    /// Builds a tree over `values` under the given capacity limits.
    fn from_values(values: &[i64], limits: &Limits) -> SegTreeResult<Self>
    where
        Self: Sized;

    /// Number of addressable positions.
    fn len(&self) -> usize;

    /// Always `false`: construction rejects empty domains.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-populates every leaf from `values` and recomputes internal nodes.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != self.len()`.
    fn rebuild(&mut self, values: &[i64]);

    /// Sets `position` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    fn modify(&mut self, position: usize, value: i64);

    /// Sum over `[left, right)`; an empty range yields 0.
    ///
    /// # Panics
    ///
    /// Panics unless `left <= right <= self.len()`.
    fn query(&self, left: usize, right: usize) -> i64;

    /// Sum over the whole domain.
    fn total(&self) -> i64;

    /// Returns `true` if every internal node equals the sum of its children.
    fn check_invariant(&self) -> bool;
}
