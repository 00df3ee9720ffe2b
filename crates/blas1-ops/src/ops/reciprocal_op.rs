// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise reciprocal.

use crate::{apply_unary, apply_unary_in_place, KernelError, UnaryExecute, UnaryKernel};
use array_core::{ArrayHandle, ArrayHandleMut};

/// Per-element reciprocal kernel, `1 / x`.
///
/// Implemented for float elements only; division follows IEEE 754, so a
/// zero input produces an infinity of matching sign. Integer elements have
/// no `UnaryKernel` impl here, so an integer call site does not build.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipKernel;

macro_rules! impl_recip_float {
    ($($ty:ty),*) => {
        $(impl UnaryKernel<$ty> for RecipKernel {
            const NAME: &'static str = "reciprocal";

            #[inline(always)]
            fn apply(x: $ty) -> $ty {
                x.recip()
            }
        })*
    };
}

impl_recip_float!(f32, f64);

/// Writes the reciprocal of every element of `src` into `dst`.
///
/// Same argument contract as [`crate::abs`], restricted to float element
/// types.
///
/// # Errors
/// Returns [`KernelError::ShapeMismatch`] if extents differ; the
/// destination is left untouched.
pub fn reciprocal<Dst, Src>(dst: &mut Dst, src: &Src) -> Result<(), KernelError>
where
    Dst: ArrayHandleMut,
    Src: ArrayHandle<Elem = Dst::Elem, Rank = Dst::Rank, Space = Dst::Space>,
    Dst::Space: UnaryExecute,
    RecipKernel: UnaryKernel<Dst::Elem>,
{
    apply_unary::<RecipKernel, _, _>(dst, src)
}

/// Replaces every element of `dst` with its reciprocal.
///
/// The in-place form of [`reciprocal`]; it cannot fail.
pub fn reciprocal_in_place<A>(dst: &mut A)
where
    A: ArrayHandleMut,
    A::Space: UnaryExecute,
    RecipKernel: UnaryKernel<A::Elem>,
{
    apply_unary_in_place::<RecipKernel, _>(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use array_core::HostVector;

    #[test]
    fn test_reciprocal_f64() {
        let src = HostVector::from_vec(vec![1.0f64, 2.0, -4.0]);
        let mut dst = HostVector::zeros(3);
        reciprocal(&mut dst, &src).unwrap();
        assert_relative_eq!(dst.get(0).unwrap(), 1.0);
        assert_relative_eq!(dst.get(1).unwrap(), 0.5);
        assert_relative_eq!(dst.get(2).unwrap(), -0.25);
    }

    #[test]
    fn test_reciprocal_of_zero_is_infinite() {
        let src = HostVector::from_vec(vec![0.0f32, -0.0]);
        let mut dst = HostVector::zeros(2);
        reciprocal(&mut dst, &src).unwrap();
        assert_eq!(dst.get(0), Some(f32::INFINITY));
        assert_eq!(dst.get(1), Some(f32::NEG_INFINITY));
    }

    #[test]
    fn test_reciprocal_in_place_twice_is_near_identity() {
        let mut a = HostVector::from_vec(vec![2.0f64, 8.0, 0.5]);
        reciprocal_in_place(&mut a);
        reciprocal_in_place(&mut a);
        assert_relative_eq!(a.get(0).unwrap(), 2.0);
        assert_relative_eq!(a.get(1).unwrap(), 8.0);
        assert_relative_eq!(a.get(2).unwrap(), 0.5);
    }

    #[test]
    fn test_reciprocal_shape_mismatch() {
        let src = HostVector::from_vec(vec![1.0f32; 2]);
        let mut dst = HostVector::zeros(3);
        assert!(reciprocal(&mut dst, &src).is_err());
    }
}
