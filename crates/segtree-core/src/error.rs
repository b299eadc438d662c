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

//! Error types for segment tree construction and checked access.

use thiserror::Error;

/// Errors raised by tree construction and the `checked_*` accessors.
///
/// The unchecked hot-path methods (`modify`, `query`, `update`) treat an
/// out-of-domain index as a contract violation and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegTreeError {
    /// The tree was asked to cover zero positions.
    #[error("segment tree domain must contain at least one position")]
    EmptyDomain,

    /// The requested domain does not fit within the configured capacity.
    #[error("domain size {requested} exceeds capacity limit of {max}")]
    CapacityExceeded {
        /// Requested number of leaf positions.
        requested: usize,
        /// Maximum number of leaf positions allowed by the limits.
        max: usize,
    },

    /// A point index fell outside `[0, len)`.
    #[error("index {index} is out of bounds for domain of size {len}")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Domain size of the tree.
        len: usize,
    },

    /// A half-open range was reversed or reached past the end of the domain.
    #[error("invalid range [{left}, {right}) for domain of size {len}")]
    InvalidRange {
        /// Inclusive left bound.
        left: usize,
        /// Exclusive right bound.
        right: usize,
        /// Domain size of the tree.
        len: usize,
    },
}

/// Result type for segment tree operations.
pub type SegTreeResult<T> = std::result::Result<T, SegTreeError>;

impl SegTreeError {
    /// Builds an [`SegTreeError::IndexOutOfBounds`] error.
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Builds an [`SegTreeError::InvalidRange`] error.
    pub fn invalid_range(left: usize, right: usize, len: usize) -> Self {
        Self::InvalidRange { left, right, len }
    }
}

/// Validates a point index against a domain size.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> SegTreeResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(SegTreeError::index_out_of_bounds(index, len))
    }
}

/// Validates a half-open range against a domain size.
#[inline]
pub(crate) fn check_range(left: usize, right: usize, len: usize) -> SegTreeResult<()> {
    if left <= right && right <= len {
        Ok(())
    } else {
        Err(SegTreeError::invalid_range(left, right, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(check_index(0, 1).is_ok());
        assert!(check_index(9, 10).is_ok());
        assert_eq!(
            check_index(10, 10),
            Err(SegTreeError::IndexOutOfBounds { index: 10, len: 10 })
        );
    }

    #[test]
    fn test_check_range() {
        assert!(check_range(0, 0, 4).is_ok());
        assert!(check_range(0, 4, 4).is_ok());
        assert!(check_range(4, 4, 4).is_ok());
        assert!(check_range(3, 2, 4).is_err());
        assert!(check_range(0, 5, 4).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = SegTreeError::CapacityExceeded {
            requested: 20_000_000,
            max: 5_000_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("20000000"));
        assert!(msg.contains("5000000"));

        let msg = SegTreeError::invalid_range(3, 2, 4).to_string();
        assert!(msg.contains("[3, 2)"));
        assert!(msg.contains("size 4"));

        assert!(SegTreeError::EmptyDomain.to_string().contains("at least one"));
    }
}
