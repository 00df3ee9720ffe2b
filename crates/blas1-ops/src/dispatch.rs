// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The dispatch layer: contract checks, view construction, backend routing.
//!
//! ```text
//! caller
//!   │  apply_unary::<K>(dst, src)
//!   ▼
//! [trait bounds]            — rank/element/space agreement, writability
//!   │
//! [extents comparison]      — the one runtime check
//!   │
//! view_mut() / view()       — zero-copy adapters
//!   ▼
//! <Space as UnaryExecute>   — backend picked by the view types
//! ```

use crate::{KernelError, UnaryExecute, UnaryKernel};
use array_core::{ArrayHandle, ArrayHandleMut, Layout, MemorySpace};

/// Applies kernel `K` elementwise, writing `K::apply(src[idx])` into `dst`.
///
/// The argument contract is carried by the trait bounds: both arguments
/// are array handles of the same element type, rank (1 or 2), and memory
/// space, and the destination is writable. Layouts may differ — each view
/// keeps its own. A call site violating any of this does not build.
///
/// The only runtime condition is shape equality. On success every element
/// of the destination is written; the call introduces no state and holds
/// no resources past its return.
///
/// # Errors
/// Returns [`KernelError::ShapeMismatch`] if the extents differ, in which
/// case the destination is untouched.
pub fn apply_unary<K, Dst, Src>(dst: &mut Dst, src: &Src) -> Result<(), KernelError>
where
    Dst: ArrayHandleMut,
    Src: ArrayHandle<Elem = Dst::Elem, Rank = Dst::Rank, Space = Dst::Space>,
    Dst::Space: UnaryExecute,
    K: UnaryKernel<Dst::Elem>,
{
    let dst_extents = dst.extents();
    let src_extents = src.extents();
    if dst_extents != src_extents {
        return Err(KernelError::ShapeMismatch {
            op: K::NAME,
            dst: dst_extents,
            src: src_extents,
        });
    }

    tracing::trace!(
        op = K::NAME,
        space = <Dst::Space as MemorySpace>::NAME,
        dst_layout = <Dst::Layout as Layout>::NAME,
        src_layout = <Src::Layout as Layout>::NAME,
        extents = %dst_extents,
        "dispatching unary elementwise kernel"
    );

    let dst_view = dst.view_mut();
    let src_view = src.view();
    <Dst::Space as UnaryExecute>::apply::<K, _, _, _, _>(dst_view, src_view);
    Ok(())
}

/// Applies kernel `K` to every element of `dst` in place.
///
/// This is the aliasing-safe spelling of `apply_unary(x, x)`, which the
/// borrow rules reject. With a single array there are no shapes to
/// compare, so the call cannot fail.
pub fn apply_unary_in_place<K, A>(dst: &mut A)
where
    A: ArrayHandleMut,
    A::Space: UnaryExecute,
    K: UnaryKernel<A::Elem>,
{
    tracing::trace!(
        op = K::NAME,
        space = <A::Space as MemorySpace>::NAME,
        layout = <A::Layout as Layout>::NAME,
        extents = %dst.extents(),
        "dispatching in-place unary elementwise kernel"
    );

    <A::Space as UnaryExecute>::apply_in_place::<K, _, _, _>(dst.view_mut());
}
