// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Circle, Point};
use peniko::Color;
use peniko::color::palette::css;
use peloton_core::{AttrValue, ElementId, PointerEvent, Surface, SurfaceError};

use crate::scale::ScaleContinuous;

/// Attribute carrying a point's raw x value.
pub const DATA_X_ATTR: &str = "data-xvalue";
/// Attribute carrying a point's raw y value.
pub const DATA_Y_ATTR: &str = "data-yvalue";

/// One datum to plot.
///
/// `x`/`y` are in domain units; `x_value`/`y_value` are exposed verbatim on the mark for
/// introspection (they need not be numeric).
#[derive(Clone, Debug, PartialEq)]
pub struct PointDatum {
    /// X in domain units.
    pub x: f64,
    /// Y in domain units.
    pub y: f64,
    /// Value written to [`DATA_X_ATTR`].
    pub x_value: AttrValue,
    /// Value written to [`DATA_Y_ATTR`].
    pub y_value: AttrValue,
}

/// A circle-per-datum point mark.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// X scale mapping data x into plot x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into plot y.
    pub y_scale: ScaleContinuous,
    /// Circle radius.
    pub radius: f64,
    /// Fill paint.
    pub fill: Color,
    /// Class attribute of each circle.
    pub class: &'static str,
}

impl PointMarkSpec {
    /// Creates a point mark spec with radius 5, black fill and class `dot`.
    pub fn new(x_scale: impl Into<ScaleContinuous>, y_scale: impl Into<ScaleContinuous>) -> Self {
        Self {
            x_scale: x_scale.into(),
            y_scale: y_scale.into(),
            radius: 5.0,
            fill: css::BLACK,
            class: "dot",
        }
    }

    /// Sets the circle radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the class attribute.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    /// Plot position of a datum, or `None` if either coordinate maps to a non-finite value.
    pub fn position(&self, datum: &PointDatum) -> Option<Point> {
        let x = self.x_scale.map(datum.x);
        let y = self.y_scale.map(datum.y);
        (x.is_finite() && y.is_finite()).then_some(Point::new(x, y))
    }

    /// The hit area of a datum's mark.
    pub fn circle(&self, datum: &PointDatum) -> Option<Circle> {
        self.position(datum).map(|c| Circle::new(c, self.radius))
    }

    /// Appends one circle per datum under `parent` and binds `handler` to both pointer-enter and
    /// pointer-leave.
    ///
    /// Data that do not map to a finite position are skipped. Returns the created marks in input
    /// order.
    pub fn render<H: Clone>(
        &self,
        surface: &mut Surface<H>,
        parent: ElementId,
        data: impl IntoIterator<Item = (PointDatum, H)>,
    ) -> Result<Vec<ElementId>, SurfaceError> {
        let mut out = Vec::new();
        for (datum, handler) in data {
            let Some(center) = self.position(&datum) else {
                continue;
            };
            let el = surface.append(parent, "circle")?;
            surface.set_attr(el, "class", self.class)?;
            surface.set_attr(el, "r", self.radius)?;
            surface.set_attr(el, "cx", center.x)?;
            surface.set_attr(el, "cy", center.y)?;
            surface.set_attr(el, "fill", self.fill)?;
            surface.set_attr(el, DATA_X_ATTR, datum.x_value)?;
            surface.set_attr(el, DATA_Y_ATTR, datum.y_value)?;
            surface.bind(el, PointerEvent::Enter, handler.clone())?;
            surface.bind(el, PointerEvent::Leave, handler)?;
            out.push(el);
        }
        Ok(out)
    }
}

/// Reads back the hit circle of a rendered point mark from its `cx`/`cy`/`r` attributes.
pub fn mark_circle<H>(surface: &Surface<H>, mark: ElementId) -> Option<Circle> {
    let cx = surface.attr(mark, "cx")?.as_f64()?;
    let cy = surface.attr(mark, "cy")?.as_f64()?;
    let r = surface.attr(mark, "r")?.as_f64()?;
    Some(Circle::new((cx, cy), r))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use kurbo::Shape;

    use super::*;
    use crate::scale::{ScaleLinear, ScaleTime};

    fn spec() -> PointMarkSpec {
        PointMarkSpec::new(
            ScaleLinear::new((1994.0, 1995.0), (0.0, 680.0)),
            ScaleTime::new((2188.0, 2215.0), (350.0, 0.0)),
        )
    }

    fn datum(year: i64, secs: f64) -> PointDatum {
        PointDatum {
            x: year as f64,
            y: secs,
            x_value: year.into(),
            y_value: "iso".into(),
        }
    }

    #[test]
    fn renders_one_circle_per_datum_with_data_attributes() {
        let mut s: Surface<usize> = Surface::new("g");
        let root = s.root();
        let marks = spec()
            .render(
                &mut s,
                root,
                vec![(datum(1994, 2215.0), 0), (datum(1995, 2188.0), 1)],
            )
            .unwrap();

        assert_eq!(marks.len(), 2);
        assert_eq!(s.attr(marks[0], "cx").unwrap().as_f64(), Some(0.0));
        assert_eq!(s.attr(marks[1], "cx").unwrap().as_f64(), Some(680.0));
        assert_eq!(s.attr(marks[0], "r").unwrap().to_string(), "5");
        assert_eq!(
            s.attr(marks[0], DATA_X_ATTR).unwrap().to_string(),
            "1994"
        );
        assert_eq!(s.handler(marks[1], PointerEvent::Enter), Some(&1));
        assert_eq!(s.handler(marks[1], PointerEvent::Leave), Some(&1));
    }

    #[test]
    fn non_finite_data_are_skipped() {
        let mut s: Surface<usize> = Surface::new("g");
        let root = s.root();
        let marks = spec()
            .render(
                &mut s,
                root,
                vec![(datum(1994, f64::NAN), 0), (datum(1995, 2188.0), 1)],
            )
            .unwrap();
        assert_eq!(marks.len(), 1);
        assert_eq!(s.handler(marks[0], PointerEvent::Enter), Some(&1));
    }

    #[test]
    fn mark_circle_matches_rendered_geometry() {
        let mut s: Surface<usize> = Surface::new("g");
        let root = s.root();
        let d = datum(1995, 2188.0);
        let spec = spec();
        let marks = spec.render(&mut s, root, vec![(d.clone(), 0)]).unwrap();
        let c = mark_circle(&s, marks[0]).unwrap();
        assert_eq!(Some(c), spec.circle(&d));
        assert!(c.contains(Point::new(682.0, 353.0)));
        assert!(!c.contains(Point::new(690.0, 350.0)));
    }

    #[test]
    fn class_radius_and_fill_are_configurable() {
        let mut s: Surface<usize> = Surface::new("g");
        let root = s.root();
        let marks = spec()
            .with_class("rider")
            .with_radius(8.0)
            .with_fill(css::STEEL_BLUE)
            .render(&mut s, root, vec![(datum(1995, 2188.0), 0)])
            .unwrap();
        assert_eq!(s.select_class(root, "rider"), marks);
        assert!(s.select_class(root, "dot").is_empty());
        assert_eq!(s.attr(marks[0], "r").unwrap().as_f64(), Some(8.0));
        assert_eq!(s.attr(marks[0], "fill").unwrap().to_string(), "#4682b4");
    }
}
