// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # array-core
//!
//! Rank-typed array handles and non-owning views for elementwise kernels.
//!
//! This crate provides:
//! - [`HostArray`] (with the [`HostVector`] / [`HostMatrix`] aliases) — an
//!   owned, contiguous array whose element type, rank, layout, and memory
//!   space are all part of its type.
//! - [`ArrayHandle`] / [`ArrayHandleMut`] — the capability a kernel
//!   argument must have: expose extents and reinterpret itself as a view.
//! - [`ArrayView`] / [`ArrayViewMut`] — the non-owning, zero-copy views
//!   that cross into kernel backends.
//! - [`Extents`] — runtime shape descriptors for rank-1/rank-2 arrays.
//! - Type-level tags: [`Rank1`]/[`Rank2`], [`RowMajor`]/[`ColMajor`],
//!   [`HostSpace`].
//!
//! # Design Goals
//! - Everything a backend needs to pick its code path — element type,
//!   rank, layout, memory space — is in the types, so kernel selection is
//!   monomorphization rather than runtime branching.
//! - Views never copy, never allocate, and cannot outlive the array they
//!   were built from; the borrow checker enforces the lifetime bound.
//! - Rank and layout tags are sealed: the supported set is closed, and an
//!   out-of-set argument is a build error.

mod array;
mod element;
mod error;
mod extents;
mod handle;
mod layout;
mod rank;
mod space;
mod view;

pub use array::{HostArray, HostMatrix, HostVector};
pub use element::Element;
pub use error::ArrayError;
pub use extents::Extents;
pub use handle::{ArrayHandle, ArrayHandleMut};
pub use layout::{ColMajor, Layout, RowMajor};
pub use rank::{Rank, Rank1, Rank2};
pub use space::{HostSpace, MemorySpace};
pub use view::{ArrayView, ArrayViewMut};
