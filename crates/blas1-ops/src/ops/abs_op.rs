// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Elementwise absolute value.

use crate::{apply_unary, apply_unary_in_place, KernelError, UnaryExecute, UnaryKernel};
use array_core::{ArrayHandle, ArrayHandleMut};

/// Per-element absolute value kernel.
///
/// Edge behavior is pinned per element type:
/// - floats use [`f32::abs`] / [`f64::abs`]: the sign bit is cleared, so
///   `-0.0` maps to `0.0` and a NaN stays NaN with a cleared sign;
/// - signed integers use `wrapping_abs`: the minimum value has no positive
///   counterpart and maps to itself (`i32::MIN.wrapping_abs() == i32::MIN`);
/// - unsigned integers are returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsKernel;

macro_rules! impl_abs_float {
    ($($ty:ty),*) => {
        $(impl UnaryKernel<$ty> for AbsKernel {
            const NAME: &'static str = "abs";

            #[inline(always)]
            fn apply(x: $ty) -> $ty {
                x.abs()
            }
        })*
    };
}

macro_rules! impl_abs_signed {
    ($($ty:ty),*) => {
        $(impl UnaryKernel<$ty> for AbsKernel {
            const NAME: &'static str = "abs";

            #[inline(always)]
            fn apply(x: $ty) -> $ty {
                x.wrapping_abs()
            }
        })*
    };
}

macro_rules! impl_abs_unsigned {
    ($($ty:ty),*) => {
        $(impl UnaryKernel<$ty> for AbsKernel {
            const NAME: &'static str = "abs";

            #[inline(always)]
            fn apply(x: $ty) -> $ty {
                x
            }
        })*
    };
}

impl_abs_float!(f32, f64);
impl_abs_signed!(i32, i64);
impl_abs_unsigned!(u32, u64);

/// Writes the absolute value of every element of `src` into `dst`.
///
/// Both arguments must be rank-1 or rank-2 array handles with the same
/// element type, rank, and memory space; anything else fails to build.
/// Extents must match at run time. See [`AbsKernel`] for the exact
/// per-type behavior, including the minimum signed value.
///
/// # Errors
/// Returns [`KernelError::ShapeMismatch`] if extents differ; the
/// destination is left untouched.
///
/// # Examples
/// ```
/// use array_core::HostVector;
/// use blas1_ops::abs;
///
/// let src = HostVector::from_vec(vec![-1.5f32, 2.0, -3.0]);
/// let mut dst = HostVector::zeros(3);
/// abs(&mut dst, &src).unwrap();
/// assert_eq!(dst.as_slice(), &[1.5, 2.0, 3.0]);
/// ```
pub fn abs<Dst, Src>(dst: &mut Dst, src: &Src) -> Result<(), KernelError>
where
    Dst: ArrayHandleMut,
    Src: ArrayHandle<Elem = Dst::Elem, Rank = Dst::Rank, Space = Dst::Space>,
    Dst::Space: UnaryExecute,
    AbsKernel: UnaryKernel<Dst::Elem>,
{
    apply_unary::<AbsKernel, _, _>(dst, src)
}

/// Replaces every element of `dst` with its absolute value.
///
/// The in-place form of [`abs`]; it cannot fail.
pub fn abs_in_place<A>(dst: &mut A)
where
    A: ArrayHandleMut,
    A::Space: UnaryExecute,
    AbsKernel: UnaryKernel<A::Elem>,
{
    apply_unary_in_place::<AbsKernel, _>(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use array_core::{HostMatrix, HostVector};

    #[test]
    fn test_abs_f32_vector() {
        let src = HostVector::from_vec(vec![-1.0f32, 0.0, 2.5, -0.0]);
        let mut dst = HostVector::zeros(4);
        abs(&mut dst, &src).unwrap();
        assert_eq!(dst.as_slice(), &[1.0, 0.0, 2.5, 0.0]);
        // -0.0 gets its sign bit cleared.
        assert!(dst.get(3).unwrap().is_sign_positive());
    }

    #[test]
    fn test_abs_signed_min_wraps() {
        let src = HostVector::from_vec(vec![i32::MIN, -7, 7]);
        let mut dst = HostVector::zeros(3);
        abs(&mut dst, &src).unwrap();
        assert_eq!(dst.as_slice(), &[i32::MIN, 7, 7]);
    }

    #[test]
    fn test_abs_i64_min_wraps() {
        let src = HostVector::from_vec(vec![i64::MIN, -1]);
        let mut dst = HostVector::zeros(2);
        abs(&mut dst, &src).unwrap();
        assert_eq!(dst.as_slice(), &[i64::MIN, 1]);
    }

    #[test]
    fn test_abs_unsigned_is_identity() {
        let src = HostVector::from_vec(vec![0u64, 1, u64::MAX]);
        let mut dst = HostVector::zeros(3);
        abs(&mut dst, &src).unwrap();
        assert_eq!(dst.as_slice(), src.as_slice());
    }

    #[test]
    fn test_abs_matrix() {
        let src: HostMatrix<f64> = HostMatrix::from_vec(2, 2, vec![-1.0, 2.0, -3.0, 4.0]).unwrap();
        let mut dst = HostMatrix::<f64>::zeros(2, 2);
        abs(&mut dst, &src).unwrap();
        assert_eq!(dst.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_abs_shape_mismatch_leaves_dst_untouched() {
        let src = HostVector::from_vec(vec![-1.0f32; 4]);
        let mut dst = HostVector::from_vec(vec![9.0f32; 3]);
        let err = abs(&mut dst, &src).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch { op: "abs", .. }));
        assert_eq!(dst.as_slice(), &[9.0, 9.0, 9.0]);
    }

    #[test]
    fn test_abs_in_place() {
        let mut a = HostVector::from_vec(vec![-2.0f32, 3.0, -4.0]);
        abs_in_place(&mut a);
        assert_eq!(a.as_slice(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_abs_nan_stays_nan() {
        let src = HostVector::from_vec(vec![f64::NAN, -f64::NAN]);
        let mut dst = HostVector::zeros(2);
        abs(&mut dst, &src).unwrap();
        assert!(dst.get(0).unwrap().is_nan());
        assert!(dst.get(1).unwrap().is_sign_positive());
    }
}
