// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles.
//!
//! The title sits outside the drawing canvas, as a heading element next to it.

extern crate alloc;

use alloc::string::String;

use peloton_core::{ElementId, Surface, SurfaceError};

/// A chart-level title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleSpec {
    /// Value of the `id` attribute.
    pub element_id: &'static str,
    /// Heading tag.
    pub tag: &'static str,
    /// Title text.
    pub text: String,
}

impl TitleSpec {
    /// Creates an `h1` title.
    pub fn new(element_id: &'static str, text: impl Into<String>) -> Self {
        Self {
            element_id,
            tag: "h1",
            text: text.into(),
        }
    }

    /// Sets the heading tag.
    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    /// Appends the title under `parent`.
    pub fn render<H>(
        &self,
        surface: &mut Surface<H>,
        parent: ElementId,
    ) -> Result<ElementId, SurfaceError> {
        let el = surface.append(parent, self.tag)?;
        surface.set_attr(el, "id", self.element_id)?;
        surface.set_text(el, self.text.clone())?;
        Ok(el)
    }
}
