// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute values.

extern crate alloc;

use alloc::string::String;
use core::fmt;

use kurbo::{BezPath, PathEl, Point};
use peniko::Color;

/// A typed attribute value.
///
/// Values keep their type until they are written out, so callers can read back a number or a
/// paint without re-parsing. [`fmt::Display`] produces the markup form.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    /// Free-form text.
    Text(String),
    /// An integer (written without separators or a fractional part).
    Int(i64),
    /// A floating point number.
    Number(f64),
    /// A solid paint, written as `#rrggbb` (with `rgba(..)` when translucent).
    Paint(Color),
    /// A path, written in SVG path-data syntax.
    Path(BezPath),
}

impl AttrValue {
    /// Returns the value as a number, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as text, if it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Color> for AttrValue {
    fn from(value: Color) -> Self {
        Self::Paint(value)
    }
}

impl From<BezPath> for AttrValue {
    fn from(value: BezPath) -> Self {
        Self::Path(value)
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Paint(color) => {
                let rgba = color.to_rgba8();
                if rgba.a == 255 {
                    write!(f, "#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
                } else {
                    write!(
                        f,
                        "rgba({},{},{},{})",
                        rgba.r,
                        rgba.g,
                        rgba.b,
                        f64::from(rgba.a) / 255.0
                    )
                }
            }
            Self::Path(path) => write_path_data(f, path),
        }
    }
}

fn write_path_data(f: &mut fmt::Formatter<'_>, path: &BezPath) -> fmt::Result {
    fn pt(f: &mut fmt::Formatter<'_>, p: Point) -> fmt::Result {
        write!(f, "{},{}", p.x, p.y)
    }

    for (i, el) in path.elements().iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        match *el {
            PathEl::MoveTo(p) => {
                f.write_str("M")?;
                pt(f, p)?;
            }
            PathEl::LineTo(p) => {
                f.write_str("L")?;
                pt(f, p)?;
            }
            PathEl::QuadTo(p1, p2) => {
                f.write_str("Q")?;
                pt(f, p1)?;
                f.write_str(" ")?;
                pt(f, p2)?;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                f.write_str("C")?;
                pt(f, p1)?;
                f.write_str(" ")?;
                pt(f, p2)?;
                f.write_str(" ")?;
                pt(f, p3)?;
            }
            PathEl::ClosePath => f.write_str("Z")?,
        }
    }
    Ok(())
}
