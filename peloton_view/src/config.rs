// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use peloton_charts::ChartLayout;
use peloton_data::DATASET_URL;
use peniko::Color;
use peniko::color::palette::css;

/// Scatterplot view configuration.
///
/// The defaults reproduce the published chart: an 800x500 canvas, radius-5 black points and a
/// steelblue legend swatch.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Dataset location used by [`ViewConfig::http_source`].
    pub dataset_url: String,
    /// Canvas size and margins.
    pub layout: ChartLayout,
    /// Point radius.
    pub point_radius: f64,
    /// Point fill.
    pub point_fill: Color,
    /// Tooltip offset from the pointer.
    pub tooltip_offset: Vec2,
    /// Heading text.
    pub title: String,
    /// Legend swatch label.
    pub legend_label: String,
    /// Legend swatch fill.
    pub legend_fill: Color,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            dataset_url: DATASET_URL.into(),
            layout: ChartLayout::default(),
            point_radius: 5.0,
            point_fill: css::BLACK,
            tooltip_offset: Vec2::new(10.0, 10.0),
            title: "Scatterplot Graph".into(),
            legend_label: "Riders with doping allegations".into(),
            legend_fill: css::STEEL_BLUE,
        }
    }
}

impl ViewConfig {
    /// Sets the dataset URL.
    pub fn with_dataset_url(mut self, url: impl Into<String>) -> Self {
        self.dataset_url = url.into();
        self
    }

    /// Sets the layout.
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the point radius.
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    /// Sets the tooltip offset.
    pub fn with_tooltip_offset(mut self, offset: Vec2) -> Self {
        self.tooltip_offset = offset;
        self
    }

    /// Sets the heading text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// An HTTP source for [`ViewConfig::dataset_url`].
    pub fn http_source(&self) -> peloton_data::HttpSource {
        peloton_data::HttpSource::new(self.dataset_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use peloton_charts::Margins;

    use super::*;

    #[test]
    fn defaults_match_the_published_chart() {
        let config = ViewConfig::default();
        assert_eq!(config.dataset_url, DATASET_URL);
        assert_eq!(config.layout.canvas.width, 800.0);
        assert_eq!(config.point_radius, 5.0);
        assert_eq!(config.tooltip_offset, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn builders_replace_each_field() {
        let layout = ChartLayout::default()
            .with_canvas(600.0, 400.0)
            .with_margins(Margins {
                top: 20.0,
                right: 20.0,
                bottom: 40.0,
                left: 40.0,
            });
        let config = ViewConfig::default()
            .with_dataset_url("http://localhost:8080/cyclists.json")
            .with_layout(layout)
            .with_point_radius(3.0)
            .with_tooltip_offset(Vec2::new(0.0, 24.0))
            .with_title("Doping in cycling");

        assert_eq!(config.layout, layout);
        assert_eq!(config.point_radius, 3.0);
        assert_eq!(config.tooltip_offset, Vec2::new(0.0, 24.0));
        assert_eq!(config.title, "Doping in cycling");
        let source = config.http_source();
        assert_eq!(source.url(), "http://localhost:8080/cyclists.json");
        assert_eq!(source.timeout(), Duration::from_secs(15));
    }
}
