// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Shape};
use peloton_charts::{TitleSpec, TooltipController, TooltipSpec, mark_circle};
use peloton_core::{ElementId, PointerEvent, Surface};
use peloton_data::{DataSource, LoadError, ParsedRecord, Record, load_records, parse_records};

use crate::config::ViewConfig;
use crate::dispatch::{HandlerContext, PointHandler};
use crate::error::ViewError;
use crate::render::render;
use crate::scales::Scales;
use crate::token::MountToken;

/// What became of a load.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The chart was rendered with this many point marks.
    Rendered {
        /// Number of point marks.
        points: usize,
    },
    /// The load or the render failed; the canvas stays empty.
    Failed(ViewError),
    /// The view was unmounted before the result arrived; nothing was touched.
    Discarded,
    /// A load already ran for this view.
    AlreadyLoaded,
}

#[derive(Debug)]
struct Loaded {
    records: Vec<ParsedRecord>,
    scales: Scales,
    points: Vec<ElementId>,
}

/// The interactive cyclist scatterplot.
///
/// Mounting builds the static skeleton: the `#title` heading, an empty `svg#scatterplot` and the
/// hidden `#tooltip` overlay. A single load then renders the chart once; pointer events are fed
/// in by the host and dispatched to the tooltip.
#[derive(Debug)]
pub struct ScatterplotView {
    config: ViewConfig,
    surface: Surface<PointHandler>,
    canvas: ElementId,
    tooltip: TooltipController,
    token: MountToken,
    load_started: bool,
    load_finished: bool,
    loaded: Option<Loaded>,
    hovered: Option<ElementId>,
}

impl ScatterplotView {
    /// Builds the document skeleton.
    pub fn mount(config: ViewConfig) -> Result<Self, ViewError> {
        let mut surface = Surface::new("div");
        let root = surface.root();
        TitleSpec::new("title", config.title.clone()).render(&mut surface, root)?;
        let canvas = surface.append(root, "svg")?;
        surface.set_attr(canvas, "id", "scatterplot")?;
        let tooltip = TooltipSpec::default()
            .with_offset(config.tooltip_offset)
            .install(&mut surface, root)?;
        Ok(Self {
            config,
            surface,
            canvas,
            tooltip,
            token: MountToken::new(),
            load_started: false,
            load_finished: false,
            loaded: None,
            hovered: None,
        })
    }

    /// The view's configuration.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// A handle to this view's liveness flag.
    pub fn token(&self) -> MountToken {
        self.token.clone()
    }

    /// Whether the view is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.token.is_mounted()
    }

    /// Tears the view down: later load results are discarded, and records and scales are dropped.
    pub fn unmount(&mut self) {
        self.token.revoke();
        self.loaded = None;
        self.hovered = None;
        log::debug!("scatterplot unmounted");
    }

    /// Fetches from `source` and renders, once per view.
    pub async fn load(&mut self, source: &impl DataSource) -> LoadOutcome {
        if !self.token.is_mounted() {
            return LoadOutcome::Discarded;
        }
        if self.load_started {
            return LoadOutcome::AlreadyLoaded;
        }
        self.load_started = true;
        let result = load_records(source).await;
        self.complete_load(result)
    }

    /// Applies a fetch result obtained elsewhere.
    ///
    /// Results arriving after [`ScatterplotView::unmount`] are dropped without touching the
    /// surface.
    pub fn complete_load(&mut self, result: Result<Vec<Record>, LoadError>) -> LoadOutcome {
        if !self.token.is_mounted() {
            log::debug!("discarding dataset result: view is unmounted");
            return LoadOutcome::Discarded;
        }
        if self.load_finished {
            return LoadOutcome::AlreadyLoaded;
        }
        self.load_started = true;
        self.load_finished = true;

        let records = match result {
            Ok(records) => parse_records(records),
            Err(e) => return LoadOutcome::Failed(e.into()),
        };
        let scales = Scales::from_records(&records, self.config.layout.plot_size());
        match render(
            &mut self.surface,
            self.canvas,
            &self.config,
            &records,
            &scales,
        ) {
            Ok(points) => {
                let count = points.len();
                self.loaded = Some(Loaded {
                    records,
                    scales,
                    points,
                });
                LoadOutcome::Rendered { points: count }
            }
            Err(e) => {
                log::error!("failed to render scatterplot: {e}");
                LoadOutcome::Failed(e.into())
            }
        }
    }

    /// The element tree.
    pub fn surface(&self) -> &Surface<PointHandler> {
        &self.surface
    }

    /// The tooltip overlay.
    pub fn tooltip(&self) -> TooltipController {
        self.tooltip
    }

    /// Rendered point marks, in record order.
    pub fn point_marks(&self) -> &[ElementId] {
        self.loaded
            .as_ref()
            .map(|l| l.points.as_slice())
            .unwrap_or_default()
    }

    /// Parsed records, including those without a valid time.
    pub fn records(&self) -> &[ParsedRecord] {
        self.loaded
            .as_ref()
            .map(|l| l.records.as_slice())
            .unwrap_or_default()
    }

    /// The scales of the rendered chart.
    pub fn scales(&self) -> Option<&Scales> {
        self.loaded.as_ref().map(|l| &l.scales)
    }

    /// The point mark showing record `index`.
    pub fn mark_for_record(&self, index: usize) -> Option<ElementId> {
        self.point_marks().iter().copied().find(|&m| {
            self.surface
                .handler(m, PointerEvent::Enter)
                .is_some_and(|h| h.record == index)
        })
    }

    /// Center of a point mark in canvas coordinates.
    pub fn mark_anchor(&self, mark: ElementId) -> Option<Point> {
        let ctx = self.context()?;
        let handler = *self.surface.handler(mark, PointerEvent::Enter)?;
        Some(ctx.anchor(handler)? + self.config.layout.plot_origin())
    }

    /// Delivers pointer-enter on `mark` at `pointer`. Returns whether a handler ran.
    ///
    /// When it ran, `mark` becomes the hovered mark for later [`Self::pointer_moved`] calls.
    pub fn pointer_enter(&mut self, mark: ElementId, pointer: Point) -> Result<bool, ViewError> {
        let ran = self.dispatch(mark, PointerEvent::Enter, pointer)?;
        if ran {
            self.hovered = Some(mark);
        }
        Ok(ran)
    }

    /// Delivers pointer-leave on `mark`. Returns whether a handler ran.
    ///
    /// The tooltip is hidden whichever mark showed it, so nothing stays hovered.
    pub fn pointer_leave(&mut self, mark: ElementId) -> Result<bool, ViewError> {
        let ran = self.dispatch(mark, PointerEvent::Leave, Point::ZERO)?;
        if ran {
            self.hovered = None;
        }
        Ok(ran)
    }

    /// The mark the pointer is over, as last reported by enter, leave or move.
    pub fn hovered(&self) -> Option<ElementId> {
        self.hovered
    }

    /// Hit-tests `pointer` (canvas coordinates) against the point marks and synthesizes
    /// leave/enter transitions. Returns the mark under the pointer.
    pub fn pointer_moved(&mut self, pointer: Point) -> Result<Option<ElementId>, ViewError> {
        let local = pointer - self.config.layout.plot_origin();
        // Later marks paint over earlier ones.
        let hit = self.point_marks().iter().rev().copied().find(|&m| {
            mark_circle(&self.surface, m).is_some_and(|c| c.contains(local))
        });
        if hit == self.hovered {
            return Ok(hit);
        }
        if let Some(old) = self.hovered.take() {
            self.pointer_leave(old)?;
        }
        if let Some(new) = hit {
            self.pointer_enter(new, pointer)?;
        }
        self.hovered = hit;
        Ok(hit)
    }

    fn context(&self) -> Option<HandlerContext<'_>> {
        let loaded = self.loaded.as_ref()?;
        Some(HandlerContext {
            records: &loaded.records,
            scales: &loaded.scales,
            tooltip: self.tooltip,
        })
    }

    fn dispatch(
        &mut self,
        mark: ElementId,
        event: PointerEvent,
        pointer: Point,
    ) -> Result<bool, ViewError> {
        let Some(loaded) = &self.loaded else {
            return Ok(false);
        };
        let Some(&handler) = self.surface.handler(mark, event) else {
            return Ok(false);
        };
        let ctx = HandlerContext {
            records: &loaded.records,
            scales: &loaded.scales,
            tooltip: self.tooltip,
        };
        ctx.dispatch(&mut self.surface, handler, event, pointer)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use peloton_charts::{ChartLayout, DATA_Y_ATTR, Margins};
    use peloton_data::{FailingSource, StaticSource};

    use super::*;

    fn record(name: &str, nationality: &str, year: i32, time: &str, doping: &str) -> Record {
        Record {
            time: Some(time.into()),
            name: name.into(),
            year: Some(year),
            nationality: nationality.into(),
            doping: doping.into(),
            ..Record::default()
        }
    }

    fn two_riders() -> Vec<Record> {
        vec![
            record("A", "USA", 1994, "36:55", ""),
            record("B", "ITA", 1995, "36:28", "Admitted drug use"),
        ]
    }

    async fn loaded_view(records: &[Record]) -> ScatterplotView {
        let mut view = ScatterplotView::mount(ViewConfig::default()).unwrap();
        let source = StaticSource::from_records(records).unwrap();
        let outcome = view.load(&source).await;
        assert!(
            matches!(outcome, LoadOutcome::Rendered { .. }),
            "unexpected outcome {outcome:?}"
        );
        view
    }

    fn cx_cy(view: &ScatterplotView, mark: ElementId) -> (f64, f64) {
        let s = view.surface();
        (
            s.attr(mark, "cx").unwrap().as_f64().unwrap(),
            s.attr(mark, "cy").unwrap().as_f64().unwrap(),
        )
    }

    #[test]
    fn mount_builds_skeleton() {
        let view = ScatterplotView::mount(ViewConfig::default()).unwrap();
        let s = view.surface();
        let title = s.select("title").unwrap();
        assert_eq!(s.get(title).unwrap().tag(), "h1");
        assert_eq!(s.text_content(title), "Scatterplot Graph");
        assert!(s.select("scatterplot").is_some());
        assert_eq!(s.select("tooltip"), Some(view.tooltip().element()));
        assert!(!view.tooltip().is_visible(s));
        assert!(view.point_marks().is_empty());
    }

    #[tokio::test]
    async fn two_riders_render_at_plot_edges() {
        let view = loaded_view(&two_riders()).await;
        let s = view.surface();
        let marks = view.point_marks();
        assert_eq!(marks.len(), 2);

        let (ax, ay) = cx_cy(&view, marks[0]);
        let (bx, by) = cx_cy(&view, marks[1]);
        assert_eq!(ax, 0.0);
        assert_eq!(bx, 680.0);
        assert_eq!((ay, by), (0.0, 350.0));

        assert_eq!(s.attr(marks[1], "data-xvalue").unwrap().to_string(), "1995");
        assert_eq!(
            s.attr(marks[1], DATA_Y_ATTR).unwrap().to_string(),
            "1900-01-01T00:36:28.000Z"
        );
        assert!(s.get(marks[0]).unwrap().has_class("dot"));

        let svg = s.select("scatterplot").unwrap();
        assert_eq!(s.attr(svg, "width").unwrap().to_string(), "800");
        for id in ["x-axis", "y-axis", "legend"] {
            let el = s.select(id).unwrap();
            assert!(s.descendants(svg).contains(&el), "{id} must live in the canvas");
        }
    }

    #[tokio::test]
    async fn hover_shows_and_leave_hides_tooltip() {
        let mut view = loaded_view(&two_riders()).await;
        let b = view.point_marks()[1];

        assert!(view.pointer_enter(b, Point::new(300.0, 120.0)).unwrap());
        let tip = view.tooltip();
        let s = view.surface();
        assert!(tip.is_visible(s));
        let text = s.text_content(tip.element());
        assert!(text.contains("B: ITA"));
        assert!(text.contains("Year: 1995, Time: 36:28"));
        assert!(text.contains("Admitted drug use"));
        assert_eq!(s.style(tip.element(), "left"), Some("310px"));
        assert_eq!(s.style(tip.element(), "top"), Some("130px"));
        assert_eq!(
            s.attr(tip.element(), "data-year").unwrap().to_string(),
            "1995"
        );

        assert!(view.pointer_leave(b).unwrap());
        assert!(!view.tooltip().is_visible(view.surface()));
    }

    #[tokio::test]
    async fn last_enter_wins_and_any_leave_hides() {
        let mut view = loaded_view(&two_riders()).await;
        let (a, b) = (view.point_marks()[0], view.point_marks()[1]);
        view.pointer_enter(a, Point::ZERO).unwrap();
        view.pointer_enter(b, Point::ZERO).unwrap();
        let tip = view.tooltip();
        assert!(view.surface().text_content(tip.element()).starts_with("B: ITA"));

        view.pointer_leave(a).unwrap();
        assert!(!tip.is_visible(view.surface()));
    }

    #[tokio::test]
    async fn pointer_moves_hit_test_marks() {
        let mut view = loaded_view(&two_riders()).await;
        let b = view.point_marks()[1];
        let anchor = view.mark_anchor(b).unwrap();
        assert_eq!(anchor, Point::new(750.0, 400.0));

        assert_eq!(view.pointer_moved(anchor).unwrap(), Some(b));
        assert!(view.tooltip().is_visible(view.surface()));
        assert_eq!(view.pointer_moved(Point::new(400.0, 250.0)).unwrap(), None);
        assert!(!view.tooltip().is_visible(view.surface()));
    }

    #[tokio::test]
    async fn malformed_time_yields_one_fewer_mark() {
        let mut records = two_riders();
        records.push(record("C", "FRA", 1996, "", ""));
        let view = loaded_view(&records).await;
        assert_eq!(view.records().len(), 3);
        assert_eq!(view.point_marks().len(), 2);
        assert_eq!(view.mark_for_record(2), None);
        assert_eq!(view.scales().unwrap().year_extent, Some((1994.0, 1995.0)));
    }

    #[tokio::test]
    async fn entered_mark_is_left_when_pointer_moves_away() {
        let mut view = loaded_view(&two_riders()).await;
        let b = view.point_marks()[1];
        let anchor = view.mark_anchor(b).unwrap();

        assert!(view.pointer_enter(b, anchor).unwrap());
        assert_eq!(view.hovered(), Some(b));
        assert_eq!(view.pointer_moved(Point::new(400.0, 250.0)).unwrap(), None);
        assert!(!view.tooltip().is_visible(view.surface()));
        assert_eq!(view.hovered(), None);

        view.pointer_enter(b, anchor).unwrap();
        view.pointer_leave(b).unwrap();
        assert_eq!(view.hovered(), None);
        assert_eq!(view.pointer_moved(anchor).unwrap(), Some(b));
        assert!(view.tooltip().is_visible(view.surface()));
    }

    #[tokio::test]
    async fn configured_layout_radius_and_offset_are_used() {
        let config = ViewConfig::default()
            .with_layout(ChartLayout::default().with_canvas(600.0, 400.0).with_margins(
                Margins {
                    top: 20.0,
                    right: 20.0,
                    bottom: 40.0,
                    left: 40.0,
                },
            ))
            .with_point_radius(3.0)
            .with_tooltip_offset(Vec2::new(0.0, 24.0));
        let mut view = ScatterplotView::mount(config).unwrap();
        let source = StaticSource::from_records(&two_riders()).unwrap();
        assert!(matches!(
            view.load(&source).await,
            LoadOutcome::Rendered { points: 2 }
        ));

        let b = view.point_marks()[1];
        let s = view.surface();
        let svg = s.select("scatterplot").unwrap();
        assert_eq!(s.attr(svg, "width").unwrap().as_f64(), Some(600.0));
        assert_eq!(cx_cy(&view, b), (540.0, 340.0));
        assert_eq!(s.attr(b, "r").unwrap().as_f64(), Some(3.0));

        let anchor = view.mark_anchor(b).unwrap();
        assert_eq!(anchor, Point::new(580.0, 360.0));
        assert_eq!(view.pointer_moved(anchor).unwrap(), Some(b));
        let tip = view.tooltip().element();
        assert_eq!(view.surface().style(tip, "left"), Some("580px"));
        assert_eq!(view.surface().style(tip, "top"), Some("384px"));
    }

    async fn view_from_body(body: &[u8]) -> ScatterplotView {
        let mut view = ScatterplotView::mount(ViewConfig::default()).unwrap();
        let outcome = view.load(&StaticSource::new(body)).await;
        assert!(
            matches!(outcome, LoadOutcome::Rendered { .. }),
            "unexpected outcome {outcome:?}"
        );
        view
    }

    #[tokio::test]
    async fn null_year_entry_is_skipped_not_fatal() {
        let view = view_from_body(
            br#"[
                {"Time":"36:55","Name":"A","Year":1994,"Nationality":"USA","Doping":""},
                {"Time":"37:15","Name":"C","Year":null,"Nationality":"FRA","Doping":""},
                {"Time":"36:28","Name":"B","Year":1995,"Nationality":"ITA","Doping":""}
            ]"#,
        )
        .await;
        assert_eq!(view.records().len(), 3);
        assert_eq!(view.point_marks().len(), 2);
        assert_eq!(view.mark_for_record(1), None);
        assert_eq!(view.scales().unwrap().year_extent, Some((1994.0, 1995.0)));
        assert_eq!(view.scales().unwrap().time_extent, Some((2188.0, 2215.0)));
    }

    #[tokio::test]
    async fn missing_time_entry_is_skipped_not_fatal() {
        let view = view_from_body(
            br#"[
                {"Time":"36:55","Name":"A","Year":1994,"Nationality":"USA"},
                {"Name":"C","Year":1996,"Nationality":"FRA"},
                {"Time":"36:28","Name":"B","Year":1995,"Nationality":"ITA"}
            ]"#,
        )
        .await;
        assert_eq!(view.point_marks().len(), 2);
        assert!(view.mark_for_record(2).is_some());
        assert_eq!(view.scales().unwrap().year_extent, Some((1994.0, 1995.0)));
    }

    #[tokio::test]
    async fn fetch_failure_leaves_canvas_empty() {
        let mut view = ScatterplotView::mount(ViewConfig::default()).unwrap();
        let outcome = view.load(&FailingSource::default()).await;
        assert!(matches!(
            outcome,
            LoadOutcome::Failed(ViewError::Load(LoadError::Status(503)))
        ));
        assert!(view.point_marks().is_empty());
        let s = view.surface();
        let svg = s.select("scatterplot").unwrap();
        assert!(s.get(svg).unwrap().children().is_empty());
        assert!(s.select_class(svg, "dot").is_empty());
    }

    #[tokio::test]
    async fn dataset_is_loaded_once() {
        let mut view = loaded_view(&two_riders()).await;
        let source = StaticSource::from_records(&two_riders()[..1]).unwrap();
        assert!(matches!(view.load(&source).await, LoadOutcome::AlreadyLoaded));
        assert!(matches!(
            view.complete_load(Ok(Vec::new())),
            LoadOutcome::AlreadyLoaded
        ));
        assert_eq!(view.point_marks().len(), 2);
    }

    #[tokio::test]
    async fn late_result_after_unmount_is_discarded() {
        let mut view = ScatterplotView::mount(ViewConfig::default()).unwrap();
        let token = view.token();
        let source = StaticSource::from_records(&two_riders()).unwrap();
        let pending = tokio::spawn(async move { load_records(&source).await });

        view.unmount();
        assert!(!token.is_mounted());
        let result = pending.await.unwrap();
        assert!(matches!(view.complete_load(result), LoadOutcome::Discarded));

        let s = view.surface();
        let svg = s.select("scatterplot").unwrap();
        assert!(s.get(svg).unwrap().children().is_empty());
        assert!(view.scales().is_none());
    }

    #[tokio::test]
    async fn empty_dataset_renders_axes_without_ticks() {
        let view = loaded_view(&[]).await;
        let s = view.surface();
        assert!(view.point_marks().is_empty());
        for id in ["x-axis", "y-axis"] {
            let axis = s.select(id).unwrap();
            assert!(s.select_class(axis, "tick").is_empty());
            assert_eq!(s.select_class(axis, "domain").len(), 1);
        }
        assert!(s.select("legend").is_some());
    }

    #[tokio::test]
    async fn single_record_sits_at_plot_center() {
        let view = loaded_view(&two_riders()[1..]).await;
        let mark = view.point_marks()[0];
        assert_eq!(cx_cy(&view, mark), (340.0, 175.0));
        let s = view.surface();
        let x_axis = s.select("x-axis").unwrap();
        assert_eq!(s.select_class(x_axis, "tick").len(), 1);
    }

    #[tokio::test]
    async fn year_ticks_have_no_separators() {
        let records = vec![
            record("A", "USA", 1994, "36:55", ""),
            record("B", "ITA", 2015, "39:50", ""),
        ];
        let view = loaded_view(&records).await;
        let s = view.surface();
        let x_axis = s.select("x-axis").unwrap();
        let labels: Vec<String> = s
            .select_class(x_axis, "tick")
            .into_iter()
            .map(|t| s.text_content(t))
            .collect();
        assert_eq!(labels.first().map(String::as_str), Some("1994"));
        assert_eq!(labels.last().map(String::as_str), Some("2014"));
        assert!(labels.iter().all(|l| !l.contains(',')));
    }

    #[tokio::test]
    async fn renders_are_full_replacements() {
        let records: Vec<ParsedRecord> = two_riders().into_iter().map(ParsedRecord::new).collect();
        let config = ViewConfig::default();
        let scales = Scales::from_records(&records, config.layout.plot_size());
        let mut view = ScatterplotView::mount(config.clone()).unwrap();
        let canvas = view.canvas;

        let first = render(&mut view.surface, canvas, &config, &records, &scales).unwrap();
        let size = view.surface.descendants(canvas).len();
        let second = render(&mut view.surface, canvas, &config, &records, &scales).unwrap();

        assert_eq!(view.surface.descendants(canvas).len(), size);
        assert!(view.surface.get(first[0]).is_none());
        assert_eq!(
            view.surface.attr(second[1], "cy").and_then(|v| v.as_f64()),
            Some(350.0)
        );
        assert_eq!(view.surface.select_class(canvas, "dot"), second);
    }
}
