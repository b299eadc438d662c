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

//! Segment trees for range-sum queries with point updates.
//!
//! Two layouts of the same structure over a fixed domain `[0, n)`:
//!
//! - [`ClassicSegmentTree`]: recursive, top-down, `4n` node slots. Its native
//!   query takes a closed interval `[left, right]`.
//! - [`EfficientSegmentTree`]: iterative, bottom-up, `2n` slots with leaves at
//!   `[n, 2n)`. Its query takes a half-open interval `[left, right)`.
//!
//! Both implement [`RangeSum`], whose `query` is always half-open, so code
//! written against the trait can drive either tree with the same operation
//! stream and expect identical answers.
//!
//! # Example
//!
//! ```
//! use segtree_core::{ClassicSegmentTree, EfficientSegmentTree, RangeSum};
//!
//! let values = [5, 1, 4, 2, 3];
//! let classic = ClassicSegmentTree::new(&values).unwrap();
//! let efficient = EfficientSegmentTree::new(&values).unwrap();
//!
//! // closed [1, 3] on the classic tree == half-open [1, 4) on the efficient one
//! assert_eq!(classic.query_closed(1, 3), efficient.query(1, 4));
//! assert_eq!(RangeSum::query(&classic, 1, 4), 7);
//! ```

mod classic;
mod efficient;
mod error;
mod limits;
mod range_sum;

pub use classic::ClassicSegmentTree;
pub use efficient::EfficientSegmentTree;
pub use error::{SegTreeError, SegTreeResult};
pub use limits::{Limits, DEFAULT_MAX_LEN};
pub use range_sum::RangeSum;
