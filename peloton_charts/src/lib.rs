// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `peloton_core`.
//!
//! This crate is a small layer above `peloton_core`:
//! - **Scales** map data values into plot coordinates.
//! - **Guides** (axes, legends, titles) are generated as elements on a [`peloton_core::Surface`].
//! - **Point marks** emit one circle per datum and bind a caller-chosen handler value to it.
//! - A **tooltip** overlay is installed once and shown or hidden on demand.
//!
//! Text shaping and layout are out of scope; text elements store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod legend;
mod point_mark;
mod scale;
mod time;
mod title;
mod tooltip;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, TickFormatter};
pub use format::format_integer;
pub use layout::{ChartLayout, Margins, Size};
pub use legend::{LegendItem, LegendSpec};
pub use point_mark::{DATA_X_ATTR, DATA_Y_ATTR, PointDatum, PointMarkSpec, mark_circle};
pub use scale::{
    ScaleContinuous, ScaleLinear, ScaleLinearSpec, ScaleTime, ScaleTimeSpec, infer_extent,
};
pub use time::{format_minutes_seconds, nice_time_ticks_seconds};
pub use title::TitleSpec;
pub use tooltip::{TooltipContent, TooltipController, TooltipSpec};
