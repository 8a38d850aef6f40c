// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed chart layout: an outer canvas with margins around the plot area.
//!
//! Guides (axes, legend) are drawn inside the margins relative to the plot origin, so the plot
//! size is the only thing scales need to know.

use kurbo::{Rect, Vec2};

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Space reserved around the plot area for axes and labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Space above the plot.
    pub top: f64,
    /// Space right of the plot.
    pub right: f64,
    /// Space below the plot (x-axis labels).
    pub bottom: f64,
    /// Space left of the plot (y-axis labels).
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 50.0,
            bottom: 100.0,
            left: 70.0,
        }
    }
}

/// Canvas size plus margins.
///
/// Defaults to an 800x500 canvas with a 680x350 plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer canvas size.
    pub canvas: Size,
    /// Margins between the canvas edge and the plot area.
    pub margins: Margins,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            canvas: Size::new(800.0, 500.0),
            margins: Margins::default(),
        }
    }
}

impl ChartLayout {
    /// Sets the outer canvas size.
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Size::new(width, height);
        self
    }

    /// Sets the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// The plot area size. Never negative.
    pub fn plot_size(&self) -> Size {
        let m = self.margins;
        Size {
            width: (self.canvas.width - m.left - m.right).max(0.0),
            height: (self.canvas.height - m.top - m.bottom).max(0.0),
        }
    }

    /// Offset of the plot origin from the canvas origin.
    pub fn plot_origin(&self) -> Vec2 {
        Vec2::new(self.margins.left, self.margins.top)
    }

    /// The plot area in canvas coordinates.
    pub fn plot_rect(&self) -> Rect {
        let size = self.plot_size();
        let o = self.plot_origin();
        Rect::new(o.x, o.y, o.x + size.width, o.y + size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_680_by_350_plot() {
        let layout = ChartLayout::default();
        assert_eq!(layout.plot_size(), Size::new(680.0, 350.0));
        assert_eq!(layout.plot_rect(), Rect::new(70.0, 50.0, 750.0, 400.0));
    }

    #[test]
    fn oversized_margins_clamp_to_empty_plot() {
        let layout = ChartLayout::default().with_canvas(100.0, 100.0);
        assert_eq!(layout.plot_size(), Size::new(0.0, 0.0));
    }
}
