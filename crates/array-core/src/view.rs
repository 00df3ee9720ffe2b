// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Non-owning views: the kernel-boundary representation of an array.

use crate::{Element, Extents, HostSpace, Layout, MemorySpace, Rank};
use std::fmt;
use std::marker::PhantomData;

/// A borrowed, read-only view over an array handle's elements.
///
/// Views are what crosses into a backend kernel. A view is stripped down
/// to its (element, rank, layout, space) signature plus runtime extents;
/// it owns nothing, allocates nothing, and the borrow checker prevents it
/// from outliving the handle it was built from.
pub struct ArrayView<'a, T: Element, R: Rank, L: Layout, S: MemorySpace = HostSpace> {
    data: &'a S::Buffer<T>,
    extents: Extents,
    _marker: PhantomData<(R, L)>,
}

impl<'a, T: Element, R: Rank, L: Layout, S: MemorySpace> ArrayView<'a, T, R, L, S> {
    /// Creates a view from a borrowed buffer and its extents.
    pub fn from_parts(data: &'a S::Buffer<T>, extents: Extents) -> Self {
        Self {
            data,
            extents,
            _marker: PhantomData,
        }
    }

    /// Runtime extents of the viewed array.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// The underlying buffer in the view's memory space.
    pub fn buffer(&self) -> &'a S::Buffer<T> {
        self.data
    }
}

impl<T: Element, R: Rank, L: Layout, S: MemorySpace> fmt::Debug
    for ArrayView<'_, T, R, L, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayView")
            .field("elem", &T::NAME)
            .field("rank", &R::RANK)
            .field("layout", &L::NAME)
            .field("space", &S::NAME)
            .field("extents", &self.extents)
            .finish_non_exhaustive()
    }
}

/// A borrowed, writable view over an array handle's elements.
///
/// The writable counterpart of [`ArrayView`]; used for destination
/// arguments. Holding one exclusively borrows the handle, so no other
/// reader or writer can observe the destination mid-kernel.
pub struct ArrayViewMut<'a, T: Element, R: Rank, L: Layout, S: MemorySpace = HostSpace> {
    data: &'a mut S::Buffer<T>,
    extents: Extents,
    _marker: PhantomData<(R, L)>,
}

impl<'a, T: Element, R: Rank, L: Layout, S: MemorySpace> ArrayViewMut<'a, T, R, L, S> {
    /// Creates a writable view from a borrowed buffer and its extents.
    pub fn from_parts(data: &'a mut S::Buffer<T>, extents: Extents) -> Self {
        Self {
            data,
            extents,
            _marker: PhantomData,
        }
    }

    /// Runtime extents of the viewed array.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// The underlying buffer in the view's memory space.
    pub fn buffer_mut(&mut self) -> &mut S::Buffer<T> {
        self.data
    }

    /// Consumes the view, releasing the buffer borrow at full lifetime.
    pub fn into_buffer_mut(self) -> &'a mut S::Buffer<T> {
        self.data
    }
}

impl<T: Element, R: Rank, L: Layout, S: MemorySpace> fmt::Debug
    for ArrayViewMut<'_, T, R, L, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayViewMut")
            .field("elem", &T::NAME)
            .field("rank", &R::RANK)
            .field("layout", &L::NAME)
            .field("space", &S::NAME)
            .field("extents", &self.extents)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank1, Rank2, RowMajor};

    #[test]
    fn test_view_from_parts() {
        let data = [1.0f32, 2.0, 3.0];
        let v: ArrayView<'_, f32, Rank1, RowMajor> =
            ArrayView::from_parts(&data[..], Extents::vector(3));
        assert_eq!(v.extents(), Extents::vector(3));
        assert_eq!(v.buffer(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_view_mut_writes_through() {
        let mut data = [1i32, -2, 3, -4];
        let mut v: ArrayViewMut<'_, i32, Rank2, RowMajor> =
            ArrayViewMut::from_parts(&mut data[..], Extents::matrix(2, 2));
        v.buffer_mut()[2] = 9;
        assert_eq!(data, [1, -2, 9, -4]);
    }

    #[test]
    fn test_debug_names_signature() {
        let data = [0u32; 4];
        let v: ArrayView<'_, u32, Rank2, RowMajor> =
            ArrayView::from_parts(&data[..], Extents::matrix(2, 2));
        let s = format!("{v:?}");
        assert!(s.contains("u32"));
        assert!(s.contains("row-major"));
        assert!(s.contains("host"));
    }
}
