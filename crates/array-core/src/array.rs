// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Owned host-memory arrays.

use crate::{
    ArrayError, ArrayHandle, ArrayHandleMut, ArrayView, ArrayViewMut, Element, Extents,
    HostSpace, Layout, Rank, Rank1, Rank2, RowMajor,
};
use std::marker::PhantomData;

/// An owned, contiguous array in [`HostSpace`].
///
/// Rank and layout are type parameters, so a `HostArray` carries its full
/// kernel-dispatch signature in its type. Storage is a flat `Vec<T>` in
/// the order dictated by `L` (row-major by default).
///
/// # Examples
/// ```
/// use array_core::{HostMatrix, HostVector};
///
/// let v = HostVector::from_vec(vec![1.0f32, 2.0, 3.0]);
/// assert_eq!(v.extents().extent(0), 3);
///
/// let m: HostMatrix<i32> = HostMatrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
/// assert_eq!(m.get(1, 0), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HostArray<T: Element, R: Rank, L: Layout = RowMajor> {
    extents: Extents,
    data: Vec<T>,
    _marker: PhantomData<(R, L)>,
}

/// A rank-1 host array.
pub type HostVector<T> = HostArray<T, Rank1>;

/// A rank-2 host array, row-major unless stated otherwise.
pub type HostMatrix<T, L = RowMajor> = HostArray<T, Rank2, L>;

impl<T: Element, R: Rank, L: Layout> HostArray<T, R, L> {
    /// Runtime extents.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// The elements as a flat slice in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable flat slice in storage order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Overwrites every element with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|x| *x = value);
    }
}

impl<T: Element, L: Layout> HostArray<T, Rank1, L> {
    /// Creates a vector from its elements.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            extents: Extents::vector(data.len()),
            data,
            _marker: PhantomData,
        }
    }

    /// Creates a zero-filled vector of `len` elements.
    pub fn zeros(len: usize) -> Self {
        Self {
            extents: Extents::vector(len),
            data: vec![T::ZERO; len],
            _marker: PhantomData,
        }
    }

    /// Element at index `i`, or `None` if out of bounds.
    pub fn get(&self, i: usize) -> Option<T> {
        self.data.get(i).copied()
    }
}

impl<T: Element, L: Layout> HostArray<T, Rank2, L> {
    /// Creates a matrix from a flat buffer laid out according to `L`.
    ///
    /// # Errors
    /// Returns [`ArrayError::ElementCountMismatch`] if `data.len()` is not
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ArrayError> {
        let extents = Extents::matrix(rows, cols);
        let expected = extents.num_elements();
        if data.len() != expected {
            return Err(ArrayError::ElementCountMismatch {
                extents,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            extents,
            data,
            _marker: PhantomData,
        })
    }

    /// Creates a zero-filled matrix with `rows` rows and `cols` columns.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let extents = Extents::matrix(rows, cols);
        Self {
            extents,
            data: vec![T::ZERO; extents.num_elements()],
            _marker: PhantomData,
        }
    }

    /// Element at `(i, j)`, or `None` if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i >= self.extents.extent(0) || j >= self.extents.extent(1) {
            return None;
        }
        self.data.get(L::offset(self.extents, i, j)).copied()
    }
}

impl<T: Element, R: Rank, L: Layout> ArrayHandle for HostArray<T, R, L> {
    type Elem = T;
    type Rank = R;
    type Layout = L;
    type Space = HostSpace;

    fn extents(&self) -> Extents {
        self.extents
    }

    fn view(&self) -> ArrayView<'_, T, R, L, HostSpace> {
        ArrayView::from_parts(self.data.as_slice(), self.extents)
    }
}

impl<T: Element, R: Rank, L: Layout> ArrayHandleMut for HostArray<T, R, L> {
    fn view_mut(&mut self) -> ArrayViewMut<'_, T, R, L, HostSpace> {
        ArrayViewMut::from_parts(self.data.as_mut_slice(), self.extents)
    }
}
