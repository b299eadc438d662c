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

//! Capacity limits for tree construction.

use crate::error::{SegTreeError, SegTreeResult};

/// Default maximum domain size (5M positions).
pub const DEFAULT_MAX_LEN: usize = 5_000_000;

/// Construction-time capacity for segment trees.
///
/// Storage is allocated per instance and sized to the actual domain, so the
/// limit only bounds how large a single tree may grow. The classic tree needs
/// `4 * max_len` slots, the efficient tree `2 * max_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Maximum number of leaf positions (default: 5M).
    pub max_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

impl Limits {
    /// Creates limits with the given maximum domain size.
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        // 4n slots must still be addressable.
        Self {
            max_len: usize::MAX / 4,
        }
    }

    /// Checks that a domain of `len` positions can be built under these limits.
    pub fn check(&self, len: usize) -> SegTreeResult<()> {
        if len == 0 {
            return Err(SegTreeError::EmptyDomain);
        }
        if len > self.max_len {
            return Err(SegTreeError::CapacityExceeded {
                requested: len,
                max: self.max_len,
            });
        }
        Ok(())
    }
}
