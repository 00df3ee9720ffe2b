// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise kernel entry points.
//!
//! Each operation is one tag type implementing [`crate::UnaryKernel`] for
//! the element types it supports, plus thin public entry points over the
//! shared dispatch path. Adding an operation means adding one module here;
//! the dispatch and backend layers are untouched.

mod abs_op;
mod reciprocal_op;

pub use abs_op::{abs, abs_in_place, AbsKernel};
pub use reciprocal_op::{reciprocal, reciprocal_in_place, RecipKernel};
