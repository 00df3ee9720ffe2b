// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Memory layout tags mapping indices to linear offsets.

use crate::Extents;
use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::RowMajor {}
    impl Sealed for super::ColMajor {}
}

/// Maps a multidimensional index to an offset into flat storage.
///
/// Each supported layout is a zero-sized tag type. Kernels monomorphize
/// over the tag, so the offset arithmetic inlines down to plain index math
/// with no runtime branching on the layout.
pub trait Layout:
    sealed::Sealed + fmt::Debug + Copy + Default + Send + Sync + 'static
{
    /// Human-readable tag name, used in trace output.
    const NAME: &'static str;

    /// Linear offset of element `(i, j)` under the given extents.
    ///
    /// Rank-1 arrays index with `j == 0` and a second extent of 1, which
    /// makes the offset `i` under either layout.
    fn offset(extents: Extents, i: usize, j: usize) -> usize;
}

/// Row-major (C-order): consecutive elements of a row are adjacent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMajor;

/// Column-major (Fortran-order): consecutive elements of a column are adjacent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColMajor;

impl Layout for RowMajor {
    const NAME: &'static str = "row-major";

    #[inline(always)]
    fn offset(extents: Extents, i: usize, j: usize) -> usize {
        i * extents.extent(1) + j
    }
}

impl Layout for ColMajor {
    const NAME: &'static str = "col-major";

    #[inline(always)]
    fn offset(extents: Extents, i: usize, j: usize) -> usize {
        i + j * extents.extent(0)
    }
}
