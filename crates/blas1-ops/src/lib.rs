// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # blas1-ops
//!
//! Elementwise unary kernel dispatch over rank-typed array views.
//!
//! This crate provides:
//! - [`abs`] / [`abs_in_place`] — absolute value over rank-1/rank-2 arrays.
//! - [`reciprocal`] / [`reciprocal_in_place`] — float reciprocal.
//! - [`UnaryKernel`] — the per-element function seam; an operation is one
//!   tag type plus impls for the element types it supports.
//! - [`UnaryExecute`] — the backend seam; implementing it for a memory
//!   space routes every kernel for arrays living in that space.
//! - [`apply_unary`] / [`apply_unary_in_place`] — the shared dispatch
//!   path, public so downstream code can plug in its own kernels.
//!
//! # Design Goals
//! - Every argument contract except shape equality is compile-time: rank,
//!   element type, memory space, and destination writability are carried
//!   in the types, so a bad call site fails to build with a diagnostic
//!   naming the missing bound.
//! - The views crossing the backend boundary are zero-copy, non-owning,
//!   and lifetime-bound to the caller's arrays.
//! - Backend selection is monomorphization over the view types; the shape
//!   comparison is the only runtime branch on the dispatch path.
//!
//! # Example
//! ```
//! use array_core::HostMatrix;
//! use blas1_ops::abs;
//!
//! let src: HostMatrix<f32> = HostMatrix::from_vec(2, 2, vec![-1.0, 2.0, -3.0, 4.0]).unwrap();
//! let mut dst = HostMatrix::<f32>::zeros(2, 2);
//! abs(&mut dst, &src).unwrap();
//! assert_eq!(dst.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
//! ```

mod dispatch;
mod error;
mod exec;
mod kernel;
mod ops;

pub use dispatch::{apply_unary, apply_unary_in_place};
pub use error::KernelError;
pub use exec::UnaryExecute;
pub use kernel::UnaryKernel;
pub use ops::{abs, abs_in_place, reciprocal, reciprocal_in_place, AbsKernel, RecipKernel};
