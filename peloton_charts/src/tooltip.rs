// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single shared tooltip overlay.
//!
//! The overlay is one absolutely positioned element. Showing it replaces its content and moves it
//! next to the pointer; hiding it only flips `display`, whichever mark asked for it last.
//!
//! Line rows are created on first use and rewritten in place afterwards, so repeated hovers do
//! not grow the surface.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use peloton_core::{AttrValue, ElementId, Surface, SurfaceError};

/// Tooltip overlay configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipSpec {
    /// Value of the overlay's `id` attribute.
    pub element_id: &'static str,
    /// Offset from the pointer position to the overlay's top-left corner.
    pub offset: Vec2,
    /// Static style properties applied when the overlay is installed.
    pub styles: Vec<(&'static str, String)>,
}

impl Default for TooltipSpec {
    fn default() -> Self {
        Self {
            element_id: "tooltip",
            offset: Vec2::new(10.0, 10.0),
            styles: alloc::vec![
                ("position", "absolute".into()),
                ("padding", "10px".into()),
                ("background", "#f0f0f0".into()),
                ("border", "1px solid #ccc".into()),
                ("border-radius", "5px".into()),
                ("color", "black".into()),
                ("pointer-events", "none".into()),
            ],
        }
    }
}

impl TooltipSpec {
    /// Sets the pointer offset.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Creates the hidden overlay under `parent`.
    pub fn install<H>(
        &self,
        surface: &mut Surface<H>,
        parent: ElementId,
    ) -> Result<TooltipController, SurfaceError> {
        let el = surface.append(parent, "div")?;
        surface.set_attr(el, "id", self.element_id)?;
        for (name, value) in &self.styles {
            surface.set_style(el, name, value.clone())?;
        }
        surface.set_style(el, "display", "none")?;
        Ok(TooltipController {
            element: el,
            offset: self.offset,
        })
    }
}

/// What a tooltip shows: text lines plus extra attributes on the overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipContent {
    /// One entry per rendered line. Empty lines stay as blank rows.
    pub lines: Vec<String>,
    /// Attributes set on the overlay element (e.g. `data-year`).
    pub attrs: Vec<(&'static str, AttrValue)>,
}

/// Handle to an installed overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipController {
    element: ElementId,
    offset: Vec2,
}

impl TooltipController {
    /// The overlay element.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Shows the overlay at `pointer + offset` with `content`, replacing what it showed before.
    pub fn show<H>(
        &self,
        surface: &mut Surface<H>,
        pointer: Point,
        content: &TooltipContent,
    ) -> Result<(), SurfaceError> {
        let at = pointer + self.offset;
        surface.set_style(self.element, "display", "inline")?;
        surface.set_style(self.element, "left", alloc::format!("{}px", at.x))?;
        surface.set_style(self.element, "top", alloc::format!("{}px", at.y))?;
        for (name, value) in &content.attrs {
            surface.set_attr(self.element, name, value.clone())?;
        }
        let rows: Vec<ElementId> = surface
            .get(self.element)
            .ok_or(SurfaceError::UnknownElement(self.element))?
            .children()
            .to_vec();
        for (i, line) in content.lines.iter().enumerate() {
            let row = match rows.get(i) {
                Some(&row) => row,
                None => surface.append(self.element, "div")?,
            };
            surface.set_text(row, line.clone())?;
            surface.set_style(row, "display", "block")?;
        }
        // Rows beyond this content are kept for later, blank and hidden.
        for &row in rows.iter().skip(content.lines.len()) {
            surface.set_text(row, String::new())?;
            surface.set_style(row, "display", "none")?;
        }
        Ok(())
    }

    /// Hides the overlay.
    pub fn hide<H>(&self, surface: &mut Surface<H>) -> Result<(), SurfaceError> {
        surface.set_style(self.element, "display", "none")
    }

    /// Whether the overlay is currently displayed.
    pub fn is_visible<H>(&self, surface: &Surface<H>) -> bool {
        surface
            .style(self.element, "display")
            .is_some_and(|d| d != "none")
    }
}
