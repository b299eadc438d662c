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

//! Property-based tests for classic/efficient query equivalence.

use super::{steps_strategy, values_strategy, Step};
use proptest::prelude::*;
use segtree_core::{ClassicSegmentTree, EfficientSegmentTree, RangeSum};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the closed classic query on [l, r] equals the half-open
    /// efficient query on [l, r + 1) under any shared update history.
    #[test]
    fn prop_closed_matches_half_open(
        values in values_strategy(200),
        steps in steps_strategy(200)
    ) {
        let n = values.len();
        let mut classic = ClassicSegmentTree::new(&values).unwrap();
        let mut efficient = EfficientSegmentTree::new(&values).unwrap();

        for step in steps {
            match step {
                Step::Assign { position, value } => {
                    classic.update(position % n, value);
                    efficient.modify(position % n, value);
                }
                Step::Sum { a, b } => {
                    let (l, r) = Step::closed_bounds(a, b, n);
                    prop_assert_eq!(
                        classic.query_closed(l, r),
                        efficient.query(l, r + 1),
                        "range [{}, {}]", l, r
                    );
                }
            }
        }
    }

    /// Property: every half-open range agrees through the shared trait,
    /// including empty ranges.
    #[test]
    fn prop_trait_queries_agree(values in values_strategy(64)) {
        let n = values.len();
        let classic = ClassicSegmentTree::new(&values).unwrap();
        let efficient = EfficientSegmentTree::new(&values).unwrap();

        for l in 0..=n {
            for r in l..=n {
                let expected: i64 = values[l..r].iter().sum();
                prop_assert_eq!(RangeSum::query(&classic, l, r), expected);
                prop_assert_eq!(RangeSum::query(&efficient, l, r), expected);
            }
        }
    }

    /// Property: the full-domain query equals the sum of all leaves.
    #[test]
    fn prop_full_domain_is_leaf_sum(values in values_strategy(500)) {
        let n = values.len();
        let expected: i64 = values.iter().sum();
        let classic = ClassicSegmentTree::new(&values).unwrap();
        let efficient = EfficientSegmentTree::new(&values).unwrap();

        prop_assert_eq!(classic.query(0, n), expected);
        prop_assert_eq!(efficient.query(0, n), expected);
        prop_assert_eq!(classic.total(), expected);
        prop_assert_eq!(efficient.total(), expected);
    }
}
