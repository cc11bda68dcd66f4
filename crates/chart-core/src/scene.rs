// File: crates/chart-core/src/scene.rs
// Summary: Retained drawing surface: gradient definitions plus an ordered list of shapes.

use crate::geometry::{Point, Rect};
use crate::path::Path;
use crate::theme::Color;
use crate::view::Viewport;

/// What a node is for; used as a styling hook and by tests to query geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Grid,
    AxisX,
    AxisY,
    AxisTitle,
    Area,
    Line,
    FocusMarker,
    Tooltip,
    Interaction,
}

impl Role {
    pub fn class(&self) -> &'static str {
        match self {
            Role::Grid => "grid",
            Role::AxisX => "axis axis--x",
            Role::AxisY => "axis axis--y",
            Role::AxisTitle => "axis-title",
            Role::Area => "chart-area",
            Role::Line => "chart-line",
            Role::FocusMarker => "focus-marker",
            Role::Tooltip => "tooltip",
            Role::Interaction => "interaction",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    None,
    Solid(Color),
    /// Reference to a [`LinearGradient`] by id.
    Gradient(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self { Self { color, width } }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line { from: Point, to: Point, stroke: Stroke },
    /// `at` is the text baseline anchor; `rotation` is in degrees around `at`.
    Text { at: Point, text: String, size: f64, color: Color, anchor: TextAnchor, rotation: f64 },
    Path { path: Path, fill: Fill, stroke: Option<Stroke> },
    Rect { rect: Rect, fill: Fill, stroke: Option<Stroke>, radius: f64 },
    Circle { center: Point, radius: f64, fill: Fill, stroke: Option<Stroke> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub role: Role,
    pub shape: Shape,
    pub visible: bool,
}

impl Node {
    pub fn new(role: Role, shape: Shape) -> Self { Self { role, shape, visible: true } }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// One gradient stop: offset in `[0, 1]` and opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub opacity: f64,
}

/// Top-to-bottom linear gradient in a single color.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub id: String,
    pub color: Color,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    viewport: Viewport,
    gradients: Vec<LinearGradient>,
    nodes: Vec<Node>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, gradients: Vec::new(), nodes: Vec::new() }
    }

    /// Drop every gradient and node; the viewport is replaced.
    pub fn reset(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.gradients.clear();
        self.nodes.clear();
    }

    pub fn viewport(&self) -> Viewport { self.viewport }
    pub fn nodes(&self) -> &[Node] { &self.nodes }
    pub fn gradients(&self) -> &[LinearGradient] { &self.gradients }

    /// True when nothing would be drawn.
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() && self.gradients.is_empty() }

    pub fn push(&mut self, node: Node) { self.nodes.push(node); }

    pub fn push_gradient(&mut self, gradient: LinearGradient) {
        if !self.gradients.iter().any(|g| g.id == gradient.id) {
            self.gradients.push(gradient);
        }
    }

    /// Insert `nodes` ahead of the first node with `role`, or append when there is none.
    pub fn insert_before(&mut self, role: Role, nodes: impl IntoIterator<Item = Node>) {
        let at = self.nodes.iter().position(|n| n.role == role).unwrap_or(self.nodes.len());
        self.nodes.splice(at..at, nodes);
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    pub fn count(&self, role: Role) -> usize { self.by_role(role).count() }

    /// Text content of every text node with `role`, in draw order.
    pub fn texts(&self, role: Role) -> Vec<&str> {
        self.by_role(role)
            .filter_map(|n| match &n.shape {
                Shape::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
