// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for array construction.

use crate::Extents;

/// Errors that can occur when constructing an array handle.
#[derive(Debug, thiserror::Error)]
pub enum ArrayError {
    /// The provided buffer length does not match the product of the extents.
    #[error("element count mismatch: extents {extents} require {expected} elements, got {got}")]
    ElementCountMismatch {
        extents: Extents,
        expected: usize,
        got: usize,
    },
}
