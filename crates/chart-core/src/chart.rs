// File: crates/chart-core/src/chart.rs
// Summary: ChartEngine: render pipeline (scales → grid/axes → gradient area/line) and hover handling.

use std::path::Path as FsPath;

use log::{debug, trace};

use crate::axis::{Axis, AXIS_FONT_PX};
use crate::config::ViewConfig;
use crate::curve::{catmull_rom, CENTRIPETAL_ALPHA};
use crate::error::Result;
use crate::focus::{self, Focus, FocusState, TooltipStyle};
use crate::format;
use crate::geometry::{Point, Rect};
use crate::gradient::GradientRegistry;
use crate::grid;
use crate::path::Path;
use crate::scale::{ScaleTransform, TimeScale, ValueScale};
use crate::scene::{Fill, Node, Role, Scene, Shape, Stroke, TextAnchor};
use crate::series::Series;
use crate::svg;
use crate::theme::Theme;
use crate::types::{X_TICK_COUNT, Y_TICK_COUNT};
use crate::view::Viewport;

/// Focus marker radius and outline width, in pixels.
pub const MARKER_RADIUS: f64 = 5.0;
pub const MARKER_STROKE: f64 = 2.0;
/// Line stroke width, in pixels.
pub const LINE_WIDTH: f64 = 2.0;

/// What the last non-empty render drew; pointer events resolve against it.
#[derive(Clone, Debug)]
struct Layout {
    viewport: Viewport,
    plot: Rect,
    x: TimeScale,
    y: ValueScale,
    series: Series,
    config: ViewConfig,
}

/// One chart instance: owns its scene, gradient ids and hover state.
pub struct ChartEngine {
    theme: Theme,
    tooltip_style: TooltipStyle,
    gradients: GradientRegistry,
    scene: Scene,
    layout: Option<Layout>,
    focus: FocusState,
}

impl Default for ChartEngine {
    fn default() -> Self { Self::new() }
}

impl ChartEngine {
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            tooltip_style: TooltipStyle::default(),
            gradients: GradientRegistry::new(),
            scene: Scene::default(),
            layout: None,
            focus: FocusState::default(),
        }
    }

    /// Scope gradient ids to `prefix` (e.g. the host element's id). Ids handed out
    /// earlier are forgotten, so call this before the first render.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.gradients = GradientRegistry::with_prefix(prefix);
        self
    }

    pub fn id_prefix(&self) -> &str { self.gradients.prefix() }

    pub fn theme(&self) -> &Theme { &self.theme }

    /// Takes effect on the next render.
    pub fn set_theme(&mut self, theme: Theme) { self.theme = theme; }

    pub fn set_tooltip_style(&mut self, style: TooltipStyle) { self.tooltip_style = style; }

    /// Replace everything drawn so far with `series` under `config` at `viewport`.
    ///
    /// Nothing is drawn (and no error is raised) when the viewport has no area or
    /// the series has fewer than two points. Hover state never survives a render.
    pub fn render(&mut self, series: &Series, config: &ViewConfig, viewport: Viewport) {
        self.scene.reset(viewport);
        self.layout = None;
        self.focus.clear();

        if viewport.is_empty() || series.len() < 2 {
            debug!(
                "render skipped: viewport {}x{}, {} point(s)",
                viewport.width, viewport.height, series.len()
            );
            return;
        }
        let plot = viewport.plot_rect(&config.margins);
        if plot.is_empty() {
            debug!("render skipped: margins leave no plot area in {}x{}", viewport.width, viewport.height);
            return;
        }
        let (Some(x), Some((vmin, vmax))) =
            (TimeScale::for_series(series, plot.width()), series.value_extent())
        else {
            debug!("render skipped: series has no finite extent");
            return;
        };
        let y = ValueScale::padded(vmin, vmax, plot.height(), 0.0);

        grid::draw_horizontal(&y, Y_TICK_COUNT, plot, &self.theme, &mut self.scene);
        Axis::time(&x, X_TICK_COUNT).draw(Point::new(plot.left, plot.bottom), &self.theme, &mut self.scene);
        Axis::value(&y, Y_TICK_COUNT).draw(plot.origin(), &self.theme, &mut self.scene);
        self.draw_axis_title(plot, config);

        let gradient = self.gradients.area_gradient(config.color);
        let gradient_id = gradient.id.clone();
        self.scene.push_gradient(gradient);

        let points: Vec<Point> = series
            .iter()
            .map(|p| Point::new(plot.left + x.to_px(p.millis()), plot.top + y.to_px(p.value)))
            .collect();

        let mut area = Path::new();
        catmull_rom(&points, CENTRIPETAL_ALPHA, &mut area);
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            area.line_to(Point::new(last.x, plot.bottom));
            area.line_to(Point::new(first.x, plot.bottom));
            area.close();
        }
        self.scene.push(Node::new(
            Role::Area,
            Shape::Path { path: area, fill: Fill::Gradient(gradient_id), stroke: None },
        ));

        let mut line = Path::new();
        catmull_rom(&points, CENTRIPETAL_ALPHA, &mut line);
        self.scene.push(Node::new(
            Role::Line,
            Shape::Path { path: line, fill: Fill::None, stroke: Some(Stroke::new(config.color, LINE_WIDTH)) },
        ));

        self.scene.push(Node::new(
            Role::Interaction,
            Shape::Rect { rect: plot, fill: Fill::None, stroke: None, radius: 0.0 },
        ));

        debug!(
            "rendered {} point(s) into {}x{} (value domain {:?})",
            series.len(), viewport.width, viewport.height, y.domain()
        );
        self.layout = Some(Layout { viewport, plot, x, y, series: series.clone(), config: config.clone() });
    }

    /// Title rotated -90° and centered on the value axis, 12px in from the left edge.
    fn draw_axis_title(&mut self, plot: Rect, config: &ViewConfig) {
        let at = Point::new(plot.left - config.margins.left + 12.0, plot.top + plot.height() / 2.0);
        self.scene.push(Node::new(
            Role::AxisTitle,
            Shape::Text {
                at,
                text: config.label.clone(),
                size: AXIS_FONT_PX,
                color: self.theme.muted_text,
                anchor: TextAnchor::Middle,
                rotation: -90.0,
            },
        ));
    }

    /// Resolve a pointer at surface coordinates (`x`, `y`) to the nearest point.
    ///
    /// Outside the plotted area this behaves like [`ChartEngine::pointer_leave`].
    /// Returns the focus after the event.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<&Focus> {
        let Some(layout) = &self.layout else { return None };
        if !layout.plot.contains(Point::new(x, y)) {
            self.focus.clear();
            return None;
        }
        let target = layout.x.invert(x - layout.plot.left);
        let Some(index) = focus::nearest_index(&layout.series, target) else {
            trace!("pointer at x={x} resolved to no point; ignored");
            return self.focus.get();
        };
        let Some(point) = layout.series.get(index) else {
            trace!("pointer resolved out of range index {index}; ignored");
            return self.focus.get();
        };
        let marker = Point::new(
            layout.plot.left + layout.x.to_px(point.millis()),
            layout.plot.top + layout.y.to_px(point.value),
        );
        let tooltip = focus::place_tooltip(
            marker,
            format::tooltip_date(point.timestamp),
            layout.config.format(point.value),
            layout.viewport.width,
            &self.tooltip_style,
        );
        trace!("pointer at x={x} focused index {index} ({:?} placement)", tooltip.placement);
        self.focus.set(Focus { index, marker, tooltip });
        self.focus.get()
    }

    pub fn pointer_leave(&mut self) {
        self.focus.clear();
    }

    pub fn focus(&self) -> Option<&Focus> { self.focus.get() }

    /// Static geometry of the last render (no hover overlay).
    pub fn scene(&self) -> &Scene { &self.scene }

    pub fn plot_area(&self) -> Option<Rect> { self.layout.as_ref().map(|l| l.plot) }

    pub fn scales(&self) -> Option<(&TimeScale, &ValueScale)> {
        self.layout.as_ref().map(|l| (&l.x, &l.y))
    }

    /// Static scene plus the focus marker and tooltip as the current hover state
    /// dictates, both beneath the interaction layer. Empty when the last render drew nothing.
    pub fn frame(&self) -> Scene {
        let mut frame = self.scene.clone();
        let Some(layout) = &self.layout else { return frame };
        frame.insert_before(Role::Interaction, self.overlay_nodes(layout));
        frame
    }

    fn overlay_nodes(&self, layout: &Layout) -> Vec<Node> {
        let focus = self.focus.get();
        let marker = Node::new(
            Role::FocusMarker,
            Shape::Circle {
                center: focus.map(|f| f.marker).unwrap_or(layout.plot.origin()),
                radius: MARKER_RADIUS,
                fill: Fill::Solid(layout.config.color),
                stroke: Some(Stroke::new(self.theme.surface, MARKER_STROKE)),
            },
        );
        let Some(focus) = focus else {
            return vec![marker.hidden(), self.tooltip_box(Rect::default()).hidden()];
        };
        let style = &self.tooltip_style;
        let b = focus.tooltip.bounds;
        let label_at = Point::new(b.left + style.padding, b.top + style.padding + style.label_px);
        let value_at = label_at.offset(0.0, style.line_gap + style.value_px);
        vec![
            marker,
            self.tooltip_box(b),
            Node::new(Role::Tooltip, Shape::Text {
                at: label_at,
                text: focus.tooltip.date_label.clone(),
                size: style.label_px,
                color: self.theme.muted_text,
                anchor: TextAnchor::Start,
                rotation: 0.0,
            }),
            Node::new(Role::Tooltip, Shape::Text {
                at: value_at,
                text: focus.tooltip.value_label.clone(),
                size: style.value_px,
                color: self.theme.tooltip_text,
                anchor: TextAnchor::Start,
                rotation: 0.0,
            }),
        ]
    }

    fn tooltip_box(&self, rect: Rect) -> Node {
        Node::new(Role::Tooltip, Shape::Rect {
            rect,
            fill: Fill::Solid(self.theme.tooltip_background),
            stroke: Some(Stroke::new(self.theme.tooltip_border, 1.0)),
            radius: 6.0,
        })
    }

    /// Current frame as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        svg::to_svg(&self.frame(), self.theme.surface)
    }

    pub fn write_svg(&self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg())?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}
