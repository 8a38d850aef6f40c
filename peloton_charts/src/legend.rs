// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend generation.
//!
//! A tiny "swatches + labels" legend: one row per item, each a filled square followed by a text
//! label, inside a single `g` group.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use peniko::Color;
use peniko::color::palette::css;
use peloton_core::{ElementId, Surface, SurfaceError};

use crate::layout::Size;

/// A simple legend row item.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label string shown next to the swatch.
    pub label: String,
    /// The swatch fill paint.
    pub fill: Color,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: color,
        }
    }
}

/// A legend anchored to the lower-right corner of the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendSpec {
    /// Value of the group's `id` attribute.
    pub element_id: &'static str,
    /// Swatch square size.
    pub swatch_size: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Label x offset from the row origin.
    pub label_dx: f64,
    /// Label baseline y offset from the row origin.
    pub label_dy: f64,
    /// Label color.
    pub text_fill: Color,
    /// Distance of the legend origin back from the plot's lower-right corner.
    pub inset: Vec2,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSpec {
    /// Creates a legend with 20px swatches, labels at `(30, 15)` and the origin inset `(200, 70)`
    /// from the lower-right corner.
    pub fn new(element_id: &'static str, items: Vec<LegendItem>) -> Self {
        Self {
            element_id,
            swatch_size: 20.0,
            row_gap: 6.0,
            label_dx: 30.0,
            label_dy: 15.0,
            text_fill: css::BLACK,
            inset: Vec2::new(200.0, 70.0),
            items,
        }
    }

    /// Set the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Set the label text paint.
    pub fn with_text_fill(mut self, text_fill: Color) -> Self {
        self.text_fill = text_fill;
        self
    }

    /// Set the inset from the plot's lower-right corner.
    pub fn with_inset(mut self, inset: Vec2) -> Self {
        self.inset = inset;
        self
    }

    /// Legend origin in plot coordinates.
    pub fn origin(&self, plot: Size) -> Point {
        Point::new(plot.width - self.inset.x, plot.height - self.inset.y)
    }

    /// Appends the legend group under `parent` for a plot of size `plot`.
    pub fn render<H>(
        &self,
        surface: &mut Surface<H>,
        parent: ElementId,
        plot: Size,
    ) -> Result<ElementId, SurfaceError> {
        let origin = self.origin(plot);
        let group = surface.append(parent, "g")?;
        surface.set_attr(group, "id", self.element_id)?;
        surface.set_attr(
            group,
            "transform",
            alloc::format!("translate({},{})", origin.x, origin.y),
        )?;

        let row_height = self.swatch_size + self.row_gap;
        for (i, item) in self.items.iter().enumerate() {
            let y = i as f64 * row_height;

            let swatch = surface.append(group, "rect")?;
            surface.set_attr(swatch, "y", y)?;
            surface.set_attr(swatch, "width", self.swatch_size)?;
            surface.set_attr(swatch, "height", self.swatch_size)?;
            surface.set_attr(swatch, "fill", item.fill)?;

            let label = surface.append(group, "text")?;
            surface.set_attr(label, "x", self.label_dx)?;
            surface.set_attr(label, "y", y + self.label_dy)?;
            surface.set_attr(label, "fill", self.text_fill)?;
            surface.set_text(label, item.label.clone())?;
        }
        Ok(group)
    }
}
