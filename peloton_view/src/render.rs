// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-replacement render of the scatterplot canvas.

use peloton_charts::{
    AxisSpec, LegendItem, LegendSpec, PointDatum, PointMarkSpec, format_integer,
};
use peloton_core::{AttrValue, ElementId, Surface, SurfaceError};
use peloton_data::ParsedRecord;

use crate::config::ViewConfig;
use crate::dispatch::PointHandler;
use crate::scales::Scales;

const AXIS_TICKS: usize = 10;

/// Replaces the children of `canvas` with axes, one point per valid record and the legend.
///
/// Returns the point marks in record order.
pub(crate) fn render(
    surface: &mut Surface<PointHandler>,
    canvas: ElementId,
    config: &ViewConfig,
    records: &[ParsedRecord],
    scales: &Scales,
) -> Result<Vec<ElementId>, SurfaceError> {
    let layout = config.layout;
    let plot_size = layout.plot_size();
    let origin = layout.plot_origin();

    surface.clear_children(canvas)?;
    surface.set_attr(canvas, "width", layout.canvas.width)?;
    surface.set_attr(canvas, "height", layout.canvas.height)?;
    let plot = surface.append(canvas, "g")?;
    surface.set_attr(
        plot,
        "transform",
        format!("translate({},{})", origin.x, origin.y),
    )?;

    let tick_count = if scales.has_data() { AXIS_TICKS } else { 0 };
    AxisSpec::bottom("x-axis", scales.x)
        .with_tick_count(tick_count)
        .with_tick_formatter(|v, _| format_integer(v))
        .render(surface, plot, plot_size)?;
    AxisSpec::left("y-axis", scales.y)
        .with_tick_count(tick_count)
        .render(surface, plot, plot_size)?;

    let marks = PointMarkSpec::new(scales.x, scales.y)
        .with_radius(config.point_radius)
        .with_fill(config.point_fill);
    let data = records.iter().enumerate().filter_map(|(i, r)| {
        let year = r.year()?;
        let datum = PointDatum {
            x: f64::from(year),
            y: r.seconds()?,
            x_value: AttrValue::Int(i64::from(year)),
            y_value: r.iso_time()?.into(),
        };
        Some((datum, PointHandler { record: i }))
    });
    let points = marks.render(surface, plot, data)?;

    LegendSpec::new(
        "legend",
        vec![LegendItem::solid(
            config.legend_label.clone(),
            config.legend_fill,
        )],
    )
    .render(surface, plot, plot_size)?;

    log::debug!(
        "rendered {} of {} records into a {}x{} plot",
        points.len(),
        records.len(),
        plot_size.width,
        plot_size.height
    );
    Ok(points)
}
