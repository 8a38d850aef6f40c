// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::String;
use core::fmt;

use crate::ElementId;

/// Errors returned by [`crate::Surface`] mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The element does not exist (never created, or removed with its parent).
    UnknownElement(ElementId),
    /// Another live element already carries this `id` attribute.
    DuplicateId(String),
    /// The surface ran out of element ids.
    Exhausted,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement(id) => write!(f, "unknown element {}", id.0),
            Self::DuplicateId(id) => write!(f, "duplicate element id `{id}`"),
            Self::Exhausted => f.write_str("element ids exhausted"),
        }
    }
}

impl core::error::Error for SurfaceError {}
