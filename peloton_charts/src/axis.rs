// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis generation.
//!
//! An axis is a `g` group holding a `path.domain` line and one `g.tick` per tick value; each tick
//! holds a tick `line` and a label `text`. The group is positioned at the plot edge given by
//! [`AxisOrient`], and tick positions come from the same scale instance the series uses.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::BezPath;
use peloton_core::{ElementId, Surface, SurfaceError};

use crate::format::format_tick_with_step;
use crate::layout::Size;
use crate::scale::ScaleContinuous;

/// Axis orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis along the bottom of the plot, labels below.
    Bottom,
    /// A vertical axis along the left of the plot, labels to the left.
    Left,
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Paint for the domain line, tick lines and labels (CSS value, e.g. `currentColor`).
    pub stroke: String,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Font family for tick labels.
    pub font_family: String,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            stroke: "currentColor".into(),
            label_font_size: 10.0,
            font_family: "sans-serif".into(),
        }
    }
}

/// Tick label formatter: `(value, step) -> label`.
pub type TickFormatter = Arc<dyn Fn(f64, f64) -> String>;

/// An axis specification bound to a scale instance.
#[derive(Clone)]
pub struct AxisSpec {
    /// Value of the group's `id` attribute (e.g. `x-axis`).
    pub element_id: &'static str,
    /// Scale used to place ticks.
    pub scale: ScaleContinuous,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks. Zero draws the domain line only.
    pub tick_count: usize,
    /// Tick line length.
    pub tick_size: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional tick label formatter.
    ///
    /// The second argument is the tick step, for consistent decimal formatting.
    pub tick_formatter: Option<TickFormatter>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("element_id", &self.element_id)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates an axis with `tick_count = 10`, `tick_size = 6` and `tick_padding = 3`.
    pub fn new(
        element_id: &'static str,
        scale: impl Into<ScaleContinuous>,
        orient: AxisOrient,
    ) -> Self {
        Self {
            element_id,
            scale: scale.into(),
            orient,
            tick_count: 10,
            tick_size: 6.0,
            tick_padding: 3.0,
            style: AxisStyle::default(),
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(element_id: &'static str, scale: impl Into<ScaleContinuous>) -> Self {
        Self::new(element_id, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(element_id: &'static str, scale: impl Into<ScaleContinuous>) -> Self {
        Self::new(element_id, scale, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set tick size.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Set the gap between tick and label.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Tick values and the step between them.
    pub fn tick_values(&self) -> (Vec<f64>, f64) {
        let ticks = self.scale.ticks(self.tick_count);
        let step = tick_step(&ticks);
        (ticks, step)
    }

    /// Formats a tick label.
    pub fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => match self.scale {
                ScaleContinuous::Time(_) => crate::time::format_minutes_seconds(v),
                ScaleContinuous::Linear(_) => format_tick_with_step(v, step),
            },
        }
    }

    /// Appends the axis group under `parent`, positioned for a plot of size `plot`.
    ///
    /// Returns the group element.
    pub fn render<H>(
        &self,
        surface: &mut Surface<H>,
        parent: ElementId,
        plot: Size,
    ) -> Result<ElementId, SurfaceError> {
        let group = surface.append(parent, "g")?;
        surface.set_attr(group, "id", self.element_id)?;
        surface.set_attr(group, "fill", "none")?;
        surface.set_attr(group, "font-size", self.style.label_font_size)?;
        surface.set_attr(group, "font-family", self.style.font_family.clone())?;
        match self.orient {
            AxisOrient::Bottom => {
                surface.set_attr(
                    group,
                    "transform",
                    alloc::format!("translate(0,{})", plot.height),
                )?;
                surface.set_attr(group, "text-anchor", "middle")?;
            }
            AxisOrient::Left => {
                surface.set_attr(group, "text-anchor", "end")?;
            }
        }

        let domain = surface.append(group, "path")?;
        surface.set_attr(domain, "class", "domain")?;
        surface.set_attr(domain, "stroke", self.style.stroke.clone())?;
        surface.set_attr(domain, "d", self.domain_path())?;

        let (ticks, step) = self.tick_values();
        for v in ticks {
            let pos = self.scale.map(v);
            if !pos.is_finite() {
                continue;
            }
            let label = self.format_tick(v, step);
            self.render_tick(surface, group, pos, label)?;
        }
        Ok(group)
    }

    fn render_tick<H>(
        &self,
        surface: &mut Surface<H>,
        group: ElementId,
        pos: f64,
        label: String,
    ) -> Result<(), SurfaceError> {
        let k = self.tick_size;
        let tick = surface.append(group, "g")?;
        surface.set_attr(tick, "class", "tick")?;
        surface.set_attr(tick, "opacity", 1_i64)?;

        let line = surface.append(tick, "line")?;
        surface.set_attr(line, "stroke", self.style.stroke.clone())?;

        let text = surface.append(tick, "text")?;
        surface.set_attr(text, "fill", self.style.stroke.clone())?;
        match self.orient {
            AxisOrient::Bottom => {
                surface.set_attr(tick, "transform", alloc::format!("translate({pos},0)"))?;
                surface.set_attr(line, "y2", k)?;
                surface.set_attr(text, "y", k.max(0.0) + self.tick_padding)?;
                surface.set_attr(text, "dy", "0.71em")?;
            }
            AxisOrient::Left => {
                surface.set_attr(tick, "transform", alloc::format!("translate(0,{pos})"))?;
                surface.set_attr(line, "x2", -k)?;
                surface.set_attr(text, "x", -(k.max(0.0) + self.tick_padding))?;
                surface.set_attr(text, "dy", "0.32em")?;
            }
        }
        surface.set_text(text, label)?;
        Ok(())
    }

    /// The domain line: a rule along the range with outer ticks at both ends.
    fn domain_path(&self) -> BezPath {
        let (r0, r1) = self.scale.range();
        let k = self.tick_size;
        let mut p = BezPath::new();
        match self.orient {
            AxisOrient::Bottom => {
                p.move_to((r0, k));
                p.line_to((r0, 0.0));
                p.line_to((r1, 0.0));
                p.line_to((r1, k));
            }
            AxisOrient::Left => {
                p.move_to((-k, r0));
                p.line_to((0.0, r0));
                p.line_to((0.0, r1));
                p.line_to((-k, r1));
            }
        }
        p
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 0.0,
    }
}
