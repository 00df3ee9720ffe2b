// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Compile-time rank markers.

use std::fmt;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Rank1 {}
    impl Sealed for super::Rank2 {}
}

/// Number of dimensions of an array handle, lifted to the type level.
///
/// The trait is sealed: rank-1 and rank-2 are the only ranks the kernel
/// entry points support. Keeping the set closed turns a higher-rank
/// argument into a missing-bound build error instead of a runtime check.
pub trait Rank:
    sealed::Sealed + fmt::Debug + Copy + Default + Send + Sync + 'static
{
    /// The runtime value of this rank.
    const RANK: usize;
}

/// Marker for one-dimensional arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rank1;

/// Marker for two-dimensional arrays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rank2;

impl Rank for Rank1 {
    const RANK: usize = 1;
}

impl Rank for Rank2 {
    const RANK: usize = 2;
}
