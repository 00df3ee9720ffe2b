// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Memory space tags: which execution domain owns an array's bytes.

use crate::Element;
use std::fmt;

/// The storage and execution domain an array's bytes live in.
///
/// Views are parameterized by their space, and backend implementations
/// attach to the space type, so routing a kernel call to the right backend
/// is ordinary trait resolution at compile time. The trait is open: a
/// device space can be added in its own crate without touching this one.
pub trait MemorySpace: fmt::Debug + Copy + Default + Send + Sync + 'static {
    /// Human-readable space name, used in trace output.
    const NAME: &'static str;

    /// How a borrowed run of `T` elements looks in this space.
    ///
    /// For host memory this is a plain slice. A device space would put its
    /// own non-owning buffer descriptor here.
    type Buffer<T: Element>: ?Sized + Send + Sync;
}

/// CPU-addressable memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostSpace;

impl MemorySpace for HostSpace {
    const NAME: &'static str = "host";

    type Buffer<T: Element> = [T];
}
