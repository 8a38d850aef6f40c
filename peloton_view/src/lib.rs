// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cyclist scatterplot view.
//!
//! [`ScatterplotView`] ties the pieces together: it mounts a document skeleton on a
//! [`peloton_core::Surface`], loads the dataset once through a [`peloton_data::DataSource`],
//! renders axes, points and a legend with `peloton_charts`, and turns pointer events into
//! tooltip updates.
//!
//! Point marks store a [`PointHandler`] (the record index) rather than a closure; the view
//! dispatches it with a [`HandlerContext`] holding the scales and the tooltip handle.

mod config;
mod dispatch;
mod error;
mod render;
mod scales;
mod token;
mod view;

pub use config::ViewConfig;
pub use dispatch::{HandlerContext, PointHandler, tooltip_content};
pub use error::ViewError;
pub use scales::Scales;
pub use token::MountToken;
pub use view::{LoadOutcome, ScatterplotView};
