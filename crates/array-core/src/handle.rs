// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The array-handle capability and the view adapters.

use crate::{ArrayView, ArrayViewMut, Element, Extents, Layout, MemorySpace, Rank};

/// The capability every kernel argument must have: a typed, shaped,
/// space-tagged array that can be reinterpreted as a non-owning view.
///
/// Kernel entry points accept `impl ArrayHandle` rather than one concrete
/// array type, so any abstraction that can hand out a view qualifies.
/// Passing something that is not an array fails to build with a
/// missing-bound diagnostic naming this trait.
pub trait ArrayHandle {
    /// Element type stored by this array.
    type Elem: Element;

    /// Compile-time rank (1 or 2).
    type Rank: Rank;

    /// Index-to-offset mapping of the underlying storage.
    type Layout: Layout;

    /// Memory space owning the bytes.
    type Space: MemorySpace;

    /// Runtime extents along each dimension.
    fn extents(&self) -> Extents;

    /// Reinterprets the array as a read-only view over the same memory.
    ///
    /// No copy, no allocation: the view borrows this handle's buffer and
    /// carries the handle's rank, layout, and space unchanged.
    fn view(&self) -> ArrayView<'_, Self::Elem, Self::Rank, Self::Layout, Self::Space>;
}

/// A writable array handle.
///
/// Destination arguments require this trait. Building the writable view
/// takes `&mut self`, which is what rules out a read-only destination at
/// compile time: there is no way to obtain an `ArrayViewMut` from a
/// shared borrow.
pub trait ArrayHandleMut: ArrayHandle {
    /// Reinterprets the array as a writable view over the same memory.
    fn view_mut(
        &mut self,
    ) -> ArrayViewMut<'_, Self::Elem, Self::Rank, Self::Layout, Self::Space>;
}
