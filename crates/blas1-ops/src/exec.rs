// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise execution backends.
//!
//! A backend attaches to a memory space: implementing [`UnaryExecute`] for
//! a space makes every array living in that space usable with every unary
//! kernel. By the time dispatch reaches a backend, the (element, rank,
//! layout, space) signature of both views is fixed, so the compiler
//! monomorphizes the matching loop; there is no backend registry and no
//! runtime lookup.

use crate::UnaryKernel;
use array_core::{ArrayView, ArrayViewMut, Element, HostSpace, Layout, MemorySpace, Rank};

/// Execution capability for elementwise unary kernels in a memory space.
///
/// Callers must validate that both views have equal extents before
/// invoking; the backend walks the destination's index space assuming so.
pub trait UnaryExecute: MemorySpace {
    /// Writes `K::apply(src[idx])` into `dst[idx]` for every index of the
    /// shared extents. The two views may use different layouts; each one
    /// resolves offsets through its own.
    fn apply<K, T, R, LD, LS>(
        dst: ArrayViewMut<'_, T, R, LD, Self>,
        src: ArrayView<'_, T, R, LS, Self>,
    ) where
        K: UnaryKernel<T>,
        T: Element,
        R: Rank,
        LD: Layout,
        LS: Layout;

    /// Overwrites every element of `dst` with `K::apply` of itself.
    fn apply_in_place<K, T, R, L>(dst: ArrayViewMut<'_, T, R, L, Self>)
    where
        K: UnaryKernel<T>,
        T: Element,
        R: Rank,
        L: Layout;
}

impl UnaryExecute for HostSpace {
    fn apply<K, T, R, LD, LS>(
        dst: ArrayViewMut<'_, T, R, LD, Self>,
        src: ArrayView<'_, T, R, LS, Self>,
    ) where
        K: UnaryKernel<T>,
        T: Element,
        R: Rank,
        LD: Layout,
        LS: Layout,
    {
        let extents = dst.extents();
        let d = dst.into_buffer_mut();
        let s = src.buffer();

        if R::RANK == 1 {
            // Rank-1 arrays are contiguous under either layout.
            for (out, &x) in d.iter_mut().zip(s.iter()) {
                *out = K::apply(x);
            }
        } else {
            for i in 0..extents.extent(0) {
                for j in 0..extents.extent(1) {
                    d[LD::offset(extents, i, j)] = K::apply(s[LS::offset(extents, i, j)]);
                }
            }
        }
    }

    fn apply_in_place<K, T, R, L>(dst: ArrayViewMut<'_, T, R, L, Self>)
    where
        K: UnaryKernel<T>,
        T: Element,
        R: Rank,
        L: Layout,
    {
        // A pointwise op touches every element exactly once, so the walk
        // order (and therefore the layout) does not matter here.
        for x in dst.into_buffer_mut().iter_mut() {
            *x = K::apply(*x);
        }
    }
}
