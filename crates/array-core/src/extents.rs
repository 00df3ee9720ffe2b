// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Runtime shape descriptors.

use std::fmt;

/// Runtime extents of a rank-1 or rank-2 array.
///
/// Rank itself is a compile-time property of the array handle (see
/// [`crate::Rank1`] / [`crate::Rank2`]); `Extents` only records how many
/// elements exist along each dimension. The second extent of a rank-1
/// array is fixed at 1, so two extents can always be compared pairwise.
///
/// # Examples
/// ```
/// use array_core::Extents;
/// let e = Extents::matrix(2, 3);
/// assert_eq!(e.extent(0), 2);
/// assert_eq!(e.extent(1), 3);
/// assert_eq!(e.num_elements(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Extents {
    extent0: usize,
    extent1: usize,
}

impl Extents {
    /// Extents of a rank-1 array of `len` elements.
    pub fn vector(len: usize) -> Self {
        Self {
            extent0: len,
            extent1: 1,
        }
    }

    /// Extents of a rank-2 array with `rows` rows and `cols` columns.
    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            extent0: rows,
            extent1: cols,
        }
    }

    /// Number of elements along dimension `dim`.
    ///
    /// Dimensions past the array's rank report 1, so rank-1 and rank-2
    /// extents can go through the same arithmetic.
    pub fn extent(&self, dim: usize) -> usize {
        match dim {
            0 => self.extent0,
            1 => self.extent1,
            _ => 1,
        }
    }

    /// Total number of elements.
    pub fn num_elements(&self) -> usize {
        self.extent0 * self.extent1
    }

    /// Returns `true` if either extent is zero.
    pub fn is_empty(&self) -> bool {
        self.num_elements() == 0
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.extent0, self.extent1)
    }
}
