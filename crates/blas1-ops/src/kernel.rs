// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-element kernel functions.

use array_core::Element;

/// A pure per-element function `T -> T`.
///
/// Operations are zero-sized tag types implementing this trait once per
/// element type they support. Which `(operation, element)` pairs exist is
/// therefore part of the type system: calling an operation on an element
/// type it does not support is a missing-bound build error, never a
/// runtime failure.
pub trait UnaryKernel<T: Element> {
    /// Operation name, used in diagnostics and trace output.
    const NAME: &'static str;

    /// Computes the output element for one input element.
    fn apply(x: T) -> T;
}
