// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use peloton_charts::{ScaleLinear, ScaleLinearSpec, ScaleTime, ScaleTimeSpec, Size, infer_extent};
use peloton_data::ParsedRecord;

/// Year and time scales derived once from the plotted records.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    /// Year to x, `[0, plot width]`.
    pub x: ScaleLinear,
    /// Seconds since midnight to y, `[plot height, 0]`: the shortest time sits on the x axis.
    pub y: ScaleTime,
    /// `[min, max]` year over valid records, `None` when there are none.
    pub year_extent: Option<(f64, f64)>,
    /// `[min, max]` time over valid records, `None` when there are none.
    pub time_extent: Option<(f64, f64)>,
}

impl Scales {
    /// Builds both scales over the records with a year and a parsable time.
    ///
    /// With no valid records the domains collapse to `(0, 0)`; every input then maps to the
    /// middle of the range.
    pub fn from_records(records: &[ParsedRecord], plot: Size) -> Self {
        let valid = || {
            records
                .iter()
                .filter_map(|r| Some((f64::from(r.year()?), r.seconds()?)))
        };
        let year_extent = infer_extent(valid().map(|(year, _)| year));
        let time_extent = infer_extent(valid().map(|(_, secs)| secs));

        let x = ScaleLinearSpec::new(year_extent.unwrap_or_default()).instantiate((0.0, plot.width));
        let y = ScaleTimeSpec::new(time_extent.unwrap_or_default()).instantiate((plot.height, 0.0));
        Self {
            x,
            y,
            year_extent,
            time_extent,
        }
    }

    /// Whether there is any extent to draw ticks for.
    pub fn has_data(&self) -> bool {
        self.year_extent.is_some() && self.time_extent.is_some()
    }

    /// Plot position of a record, `None` when its year is missing or its time is malformed.
    pub fn position(&self, record: &ParsedRecord) -> Option<Point> {
        let year = record.year()?;
        let secs = record.seconds()?;
        Some(Point::new(self.x.map(f64::from(year)), self.y.map(secs)))
    }
}

#[cfg(test)]
mod tests {
    use peloton_data::Record;

    use super::*;

    const PLOT: Size = Size::new(680.0, 350.0);

    fn parsed(year: i32, time: &str) -> ParsedRecord {
        ParsedRecord::new(Record {
            time: Some(time.into()),
            year: Some(year),
            ..Record::default()
        })
    }

    #[test]
    fn extents_map_to_plot_edges() {
        let records = [parsed(1994, "36:55"), parsed(2000, "39:50"), parsed(2015, "36:50")];
        let s = Scales::from_records(&records, PLOT);
        assert_eq!(s.x.map(1994.0), 0.0);
        assert_eq!(s.x.map(2015.0), 680.0);
        assert_eq!(s.y.map(2210.0), 350.0);
        assert_eq!(s.y.map(2390.0), 0.0);
    }

    #[test]
    fn malformed_records_do_not_widen_extents() {
        let records = [parsed(1994, "36:55"), parsed(1980, ""), parsed(1995, "36:28")];
        let s = Scales::from_records(&records, PLOT);
        assert_eq!(s.year_extent, Some((1994.0, 1995.0)));
        assert_eq!(s.position(&records[1]), None);
    }

    #[test]
    fn records_without_year_are_not_placed() {
        let no_year = ParsedRecord::new(Record {
            time: Some("30:00".into()),
            ..Record::default()
        });
        let records = [parsed(1994, "36:55"), no_year, parsed(1995, "36:28")];
        let s = Scales::from_records(&records, PLOT);
        assert_eq!(s.time_extent, Some((2188.0, 2215.0)));
        assert_eq!(s.position(&records[1]), None);
    }

    #[test]
    fn single_record_maps_to_midpoint() {
        let records = [parsed(1995, "36:28")];
        let s = Scales::from_records(&records, PLOT);
        assert_eq!(s.position(&records[0]), Some(Point::new(340.0, 175.0)));
    }

    #[test]
    fn empty_input_has_no_extent_and_does_not_panic() {
        let s = Scales::from_records(&[], PLOT);
        assert!(!s.has_data());
        assert_eq!(s.x.map(1994.0), 340.0);
        assert_eq!(s.y.map(2000.0), 175.0);
    }
}
