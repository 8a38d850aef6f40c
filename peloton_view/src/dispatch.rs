// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer handler values and their dispatch.

use kurbo::Point;
use peloton_charts::{TooltipContent, TooltipController};
use peloton_core::{AttrValue, PointerEvent, Surface, SurfaceError};
use peloton_data::ParsedRecord;

use crate::scales::Scales;

/// The value bound to each point mark: the index of the record it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointHandler {
    /// Index into the view's parsed records.
    pub record: usize,
}

/// Everything a point handler needs, passed in at dispatch time.
#[derive(Clone, Copy, Debug)]
pub struct HandlerContext<'a> {
    /// Parsed records, indexed by [`PointHandler::record`].
    pub records: &'a [ParsedRecord],
    /// Scales the marks were rendered with.
    pub scales: &'a Scales,
    /// The shared tooltip overlay.
    pub tooltip: TooltipController,
}

impl HandlerContext<'_> {
    /// Runs `handler` for `event`.
    ///
    /// Enter shows the tooltip for the handler's record at `pointer`; leave hides it whichever
    /// record showed it.
    pub fn dispatch(
        &self,
        surface: &mut Surface<PointHandler>,
        handler: PointHandler,
        event: PointerEvent,
        pointer: Point,
    ) -> Result<(), SurfaceError> {
        match event {
            PointerEvent::Enter => {
                let Some(record) = self.records.get(handler.record) else {
                    return Ok(());
                };
                self.tooltip
                    .show(surface, pointer, &tooltip_content(record))
            }
            PointerEvent::Leave => self.tooltip.hide(surface),
        }
    }

    /// Plot position of the handler's mark.
    pub fn anchor(&self, handler: PointHandler) -> Option<Point> {
        self.scales.position(self.records.get(handler.record)?)
    }
}

/// Tooltip lines for a record: name and country, year and time, then the doping note (possibly
/// blank).
///
/// A missing year leaves its slot blank and omits `data-year`.
pub fn tooltip_content(record: &ParsedRecord) -> TooltipContent {
    let r = &record.record;
    let time = record.display_time().unwrap_or_default();
    let year = r.year.map(|y| y.to_string()).unwrap_or_default();
    TooltipContent {
        lines: vec![
            format!("{}: {}", r.name, r.nationality),
            format!("Year: {year}, Time: {time}"),
            r.doping.clone(),
        ],
        attrs: r
            .year
            .map(|y| ("data-year", AttrValue::Int(i64::from(y))))
            .into_iter()
            .collect(),
    }
}
