// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Supported array element types.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Numeric types an array handle can hold.
///
/// The set is closed over the primitives the kernels support. Keeping it a
/// trait (rather than a runtime tag) lets views and kernels monomorphize
/// per element type, so there is no per-element dynamic dispatch.
pub trait Element:
    sealed::Sealed + Copy + PartialEq + fmt::Debug + Send + Sync + 'static
{
    /// Human-readable name of this element type.
    const NAME: &'static str;

    /// The additive identity, used by allocation helpers.
    const ZERO: Self;
}

macro_rules! impl_element {
    ($($ty:ty => $name:literal, $zero:expr;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const NAME: &'static str = $name;
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_element! {
    f32 => "f32", 0.0;
    f64 => "f64", 0.0;
    i32 => "i32", 0;
    i64 => "i64", 0;
    u32 => "u32", 0;
    u64 => "u64", 0;
}
