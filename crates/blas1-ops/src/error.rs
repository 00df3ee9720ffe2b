// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for kernel dispatch.

use array_core::Extents;

/// Errors that can occur when dispatching an elementwise kernel.
///
/// Every other argument contract — rank, element type, memory space,
/// destination writability — is carried in the types and rejected at
/// build time, so shape mismatch is the only runtime failure this layer
/// can produce. It is detected before any element is written.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// Destination and source extents differ along some dimension.
    #[error("shape mismatch in {op}: destination is {dst}, source is {src}")]
    ShapeMismatch {
        op: &'static str,
        dst: Extents,
        src: Extents,
    },
}
