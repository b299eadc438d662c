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

//! Shared strategies for the property tests.

use proptest::prelude::*;

pub mod equivalence;
pub mod invariant;
pub mod updates;

/// A single step applied identically to both trees.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Assign `value` at `position % n`.
    Assign { position: usize, value: i64 },
    /// Query the closed range spanned by two raw bounds (`% n`, sorted).
    Sum { a: usize, b: usize },
}

impl Step {
    /// Maps raw bounds onto a closed range `[left, right]` inside `[0, n)`.
    pub fn closed_bounds(a: usize, b: usize, n: usize) -> (usize, usize) {
        let (a, b) = (a % n, b % n);
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Leaf values small enough that no sum can overflow.
pub fn values_strategy(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000_i64..1_000_000, 1..=max_len)
}

/// An interleaved sequence of assignments and queries.
pub fn steps_strategy(max_steps: usize) -> impl Strategy<Value = Vec<Step>> {
    let step = prop_oneof![
        (any::<usize>(), -1_000_000_i64..1_000_000)
            .prop_map(|(position, value)| Step::Assign { position, value }),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Step::Sum { a, b }),
    ];
    prop::collection::vec(step, 0..=max_steps)
}
