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

//! Property-based tests for the parent = left + right invariant.

use super::{steps_strategy, values_strategy, Step};
use proptest::prelude::*;
use segtree_core::{ClassicSegmentTree, EfficientSegmentTree};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: the invariant holds right after construction.
    #[test]
    fn prop_invariant_after_build(values in values_strategy(300)) {
        prop_assert!(ClassicSegmentTree::new(&values).unwrap().check_invariant());
        prop_assert!(EfficientSegmentTree::new(&values).unwrap().check_invariant());
    }

    /// Property: the invariant holds after every single update.
    #[test]
    fn prop_invariant_after_each_update(
        values in values_strategy(100),
        steps in steps_strategy(100)
    ) {
        let n = values.len();
        let mut classic = ClassicSegmentTree::new(&values).unwrap();
        let mut efficient = EfficientSegmentTree::new(&values).unwrap();

        for step in steps {
            if let Step::Assign { position, value } = step {
                classic.update(position % n, value);
                efficient.modify(position % n, value);
                prop_assert!(classic.check_invariant());
                prop_assert!(efficient.check_invariant());
            }
        }
    }

    /// Property: leaves read back exactly what was last written.
    #[test]
    fn prop_leaves_track_assignments(
        values in values_strategy(100),
        steps in steps_strategy(100)
    ) {
        let n = values.len();
        let mut shadow = values.clone();
        let mut classic = ClassicSegmentTree::new(&values).unwrap();
        let mut efficient = EfficientSegmentTree::new(&values).unwrap();

        for step in steps {
            if let Step::Assign { position, value } = step {
                shadow[position % n] = value;
                classic.update(position % n, value);
                efficient.modify(position % n, value);
            }
        }

        for (i, v) in shadow.iter().enumerate() {
            prop_assert_eq!(classic.get(i), Some(*v));
            prop_assert_eq!(efficient.get(i), Some(*v));
        }
    }
}
