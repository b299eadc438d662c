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

//! Property-based tests for point update semantics.

use super::values_strategy;
use proptest::prelude::*;
use segtree_core::{ClassicSegmentTree, EfficientSegmentTree};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: applying the same assignment twice equals applying it once.
    #[test]
    fn prop_modify_is_idempotent(
        values in values_strategy(100),
        position in any::<usize>(),
        value in -1_000_000_i64..1_000_000
    ) {
        let p = position % values.len();

        let mut once = EfficientSegmentTree::new(&values).unwrap();
        once.modify(p, value);
        let mut twice = once.clone();
        twice.modify(p, value);
        prop_assert_eq!(&once, &twice);

        let mut once = ClassicSegmentTree::new(&values).unwrap();
        once.update(p, value);
        let mut twice = once.clone();
        twice.update(p, value);
        prop_assert_eq!(&once, &twice);
    }

    /// Property: updates at the first and last position reach the root.
    #[test]
    fn prop_boundary_updates_reach_root(
        values in values_strategy(100),
        first in -1_000_000_i64..1_000_000,
        last in -1_000_000_i64..1_000_000
    ) {
        let n = values.len();
        let mut expected: Vec<i64> = values.clone();
        expected[0] = first;
        expected[n - 1] = last;
        let expected_sum: i64 = expected.iter().sum();

        let mut classic = ClassicSegmentTree::new(&values).unwrap();
        let mut efficient = EfficientSegmentTree::new(&values).unwrap();
        classic.update(0, first);
        classic.update(n - 1, last);
        efficient.modify(0, first);
        efficient.modify(n - 1, last);

        prop_assert_eq!(classic.root(), expected_sum);
        prop_assert_eq!(efficient.root(), expected_sum);
    }

    /// Property: a rebuild from the original values discards all updates.
    #[test]
    fn prop_rebuild_restores_state(
        values in values_strategy(100),
        position in any::<usize>(),
        value in -1_000_000_i64..1_000_000
    ) {
        let pristine = EfficientSegmentTree::new(&values).unwrap();
        let mut tree = pristine.clone();
        tree.modify(position % values.len(), value);
        tree.build(&values);
        prop_assert_eq!(&tree, &pristine);

        let pristine = ClassicSegmentTree::new(&values).unwrap();
        let mut tree = pristine.clone();
        tree.update(position % values.len(), value);
        tree.build(&values);
        prop_assert_eq!(&tree, &pristine);
    }
}
