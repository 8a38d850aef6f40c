// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small retained element surface for chart output.
//!
//! The surface is an SVG/DOM-like tree:
//! - elements are created by tag and appended under a parent,
//! - an `id` attribute makes an element selectable by [`Surface::select`],
//! - attributes and styles are stored per element, in insertion order,
//! - pointer-enter/leave handlers are plain values bound per element and
//!   returned from [`Surface::handler`] for the caller to act on.
//!
//! Rendering to pixels or markup is out of scope; downstream crates walk the tree.

#![no_std]

extern crate alloc;

mod attr;
mod error;
mod surface;

pub use attr::AttrValue;
pub use error::SurfaceError;
pub use surface::{Element, ElementId, PointerEvent, Surface};
