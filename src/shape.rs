//! Node glyph geometry, drawing scaffolding and the shape registry.
//!
//! Every node in a network owns one glyph renderer implementing
//! [`NodeGeometry`]. On each redraw frame the engine calls `resize` (to
//! recompute the glyph's extents and bounding box from options and label
//! metrics) and then `draw` (to paint at the node's position). Edge routing
//! calls `distance_to_border` to find where an edge line should stop
//! touching the glyph's outline.
//!
//! Concrete glyphs are thin bindings of a [`ShapeKind`] tag to the shared
//! [`ShapeCore`] scaffolding plus a border-distance policy; a
//! [`ShapeRegistry`] maps kind identifiers to constructors.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    f32::consts::FRAC_PI_2,
    rc::Rc,
};

use log::debug;

use crate::{
    canvas::{Canvas, ShadowScope},
    error::GlyphError,
    geometry::{self, Bounds, Point},
    label::LabelMeasurer,
    options::NodeOptions,
};

mod diamond;
mod dot;
mod hexagon;
mod square;
mod star;
mod triangle;
mod triangle_down;

pub use diamond::Diamond;
pub use dot::Dot;
pub use hexagon::Hexagon;
pub use square::Square;
pub use star::Star;
pub use triangle::Triangle;
pub use triangle_down::TriangleDown;

/// Vertical gap between the glyph's bottom edge and its label.
const LABEL_GAP: f32 = 3.0;

/// A label measurer shared by every node of a network.
pub type SharedLabelMeasurer = Rc<RefCell<dyn LabelMeasurer>>;

/// Shared rendering context for all nodes of one network surface.
///
/// Glyph scaffolding reads the view scale so stroke widths stay constant on
/// screen while the network is zoomed.
#[derive(Debug)]
pub struct Body {
    view_scale: Cell<f32>,
}

impl Body {
    pub fn new() -> Self {
        Self {
            view_scale: Cell::new(1.0),
        }
    }

    pub fn view_scale(&self) -> f32 {
        self.view_scale.get()
    }

    pub fn set_view_scale(&self, scale: f32) {
        self.view_scale.set(scale);
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

/// The capability contract every node glyph satisfies.
///
/// `resize` only recomputes geometry and never paints; `draw` only paints
/// already-resized geometry and never mutates the bounding box;
/// `distance_to_border` derives from the same extents `resize` and `draw`
/// use, so the painted outline and the reported border never diverge.
pub trait NodeGeometry {
    /// Recomputes the glyph's extents and bounding box from the current
    /// options and label metrics. Wholesale: nothing is patched
    /// incrementally.
    fn resize(&mut self);

    /// Paints the glyph centered at `(x, y)` with the given interaction
    /// state. Fails with [`GlyphError::UninitializedGeometry`] before the
    /// first `resize`.
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        x: f32,
        y: f32,
        selected: bool,
        hover: bool,
    ) -> Result<(), GlyphError>;

    /// Distance from the glyph's center to its visible border along a ray at
    /// `angle` radians (0 = positive x axis, counter-clockwise), including
    /// the stroke.
    fn distance_to_border(&self, angle: f32) -> Result<f32, GlyphError>;

    /// The glyph's occupied area, centered on the origin. Consumers
    /// translate it by the node's position ([`Bounds::translate`]).
    fn bounding_box(&self) -> Result<Bounds, GlyphError>;

    /// Replaces the options bag wholesale. Does not resize; callers resize
    /// explicitly afterward if geometry-affecting options changed.
    fn set_options(&mut self, options: NodeOptions);
}

/// Common per-node render state: options, shared context, label measurer
/// and the geometry derived from them.
pub struct NodeCore {
    options: NodeOptions,
    body: Rc<Body>,
    label_measurer: SharedLabelMeasurer,
    width: Option<f32>,
    height: Option<f32>,
    radius: Option<f32>,
    bounding_box: Bounds,
}

impl NodeCore {
    pub fn new(options: NodeOptions, body: Rc<Body>, label_measurer: SharedLabelMeasurer) -> Self {
        Self {
            options,
            body,
            label_measurer,
            width: None,
            height: None,
            radius: None,
            bounding_box: Bounds::default(),
        }
    }

    pub fn options(&self) -> &NodeOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: NodeOptions) {
        self.options = options;
    }

    pub fn width(&self) -> Result<f32, GlyphError> {
        self.width.ok_or(GlyphError::UninitializedGeometry)
    }

    pub fn height(&self) -> Result<f32, GlyphError> {
        self.height.ok_or(GlyphError::UninitializedGeometry)
    }

    /// Circular-shape extent; meaningful for round glyphs.
    pub fn radius(&self) -> Result<f32, GlyphError> {
        self.radius.ok_or(GlyphError::UninitializedGeometry)
    }

    /// Errors unless at least one resize has established the extents.
    pub fn ensure_resized(&self) -> Result<(), GlyphError> {
        self.width().map(|_| ())
    }

    pub fn bounding_box(&self) -> Result<Bounds, GlyphError> {
        self.ensure_resized()?;
        Ok(self.bounding_box)
    }

    /// Default border distance: approximates the glyph as an ellipse with
    /// semi-axes `width / 2` and `height / 2`. Adds a fixed one-unit border
    /// rather than `options.border_width`; glyphs with an exact formula
    /// override this.
    pub fn fallback_distance_to_border(&self, angle: f32) -> Result<f32, GlyphError> {
        const BORDER_WIDTH: f32 = 1.0;
        Ok(geometry::ellipse_border_distance(
            self.width()?,
            self.height()?,
            angle,
            BORDER_WIDTH,
        ))
    }
}

/// The glyph path a [`ShapeKind`] paints.
pub enum GlyphPath {
    Circle { center: Point, radius: f32 },
    Polygon(Vec<Point>),
}

/// Closed set of glyph outline tags understood by the shared scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Triangle,
    TriangleDown,
    Square,
    Diamond,
    Star,
    Hexagon,
}

impl ShapeKind {
    /// Number of outline vertices; zero for the circle primitive.
    pub fn sides(self) -> u32 {
        match self {
            ShapeKind::Circle => 0,
            ShapeKind::Triangle | ShapeKind::TriangleDown => 3,
            ShapeKind::Square | ShapeKind::Diamond => 4,
            ShapeKind::Hexagon => 6,
            ShapeKind::Star => 10,
        }
    }

    /// The outline painted for this kind, centered at `center` with the
    /// radius-like `size` extent.
    pub fn glyph_path(self, center: Point, size: f32) -> GlyphPath {
        match self {
            ShapeKind::Circle => GlyphPath::Circle {
                center,
                radius: size,
            },
            ShapeKind::Triangle => GlyphPath::Polygon(geometry::regular_polygon_vertices(
                center, size, 3, -FRAC_PI_2,
            )),
            ShapeKind::TriangleDown => GlyphPath::Polygon(geometry::regular_polygon_vertices(
                center, size, 3, FRAC_PI_2,
            )),
            // Axis-aligned, unlike the other regular polygons.
            ShapeKind::Square => GlyphPath::Polygon(vec![
                Point::new(center.x() - size, center.y() - size),
                Point::new(center.x() + size, center.y() - size),
                Point::new(center.x() + size, center.y() + size),
                Point::new(center.x() - size, center.y() + size),
            ]),
            ShapeKind::Diamond => GlyphPath::Polygon(geometry::regular_polygon_vertices(
                center, size, 4, -FRAC_PI_2,
            )),
            ShapeKind::Star => GlyphPath::Polygon(geometry::star_vertices(center, size)),
            ShapeKind::Hexagon => GlyphPath::Polygon(geometry::regular_polygon_vertices(
                center, size, 6, 0.0,
            )),
        }
    }
}

/// Shared sizing and drawing scaffolding for glyphs whose footprint is the
/// `2 * size` square around the node center. Concrete glyphs only supply
/// the kind tag and, where they have one, an exact border-distance formula.
pub struct ShapeCore {
    node: NodeCore,
    kind: ShapeKind,
}

impl ShapeCore {
    pub fn new(
        kind: ShapeKind,
        options: NodeOptions,
        body: Rc<Body>,
        label_measurer: SharedLabelMeasurer,
    ) -> Self {
        Self {
            node: NodeCore::new(options, body, label_measurer),
            kind,
        }
    }

    pub fn node(&self) -> &NodeCore {
        &self.node
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn options(&self) -> &NodeOptions {
        self.node.options()
    }

    pub fn set_options(&mut self, options: NodeOptions) {
        self.node.set_options(options);
    }

    pub fn bounding_box(&self) -> Result<Bounds, GlyphError> {
        self.node.bounding_box()
    }

    /// Recomputes extents and bounding box wholesale from the options and
    /// the label metrics. The bounding box is centered on the origin and
    /// grows below the glyph when a label is configured.
    pub fn resize_shape(&mut self) {
        let size = self.node.options.size;
        let extent = 2.0 * size;
        self.node.width = Some(extent);
        self.node.height = Some(extent);
        self.node.radius = Some(size);

        let mut bounds = Bounds::new(-size, -size, size, size);
        if let Some(label) = self.node.options.label.as_deref() {
            let metrics = self
                .node
                .label_measurer
                .borrow_mut()
                .measure(label, self.node.options.font_size);
            if metrics.width() > 0.0 {
                bounds = bounds.extend_below(
                    -metrics.width() / 2.0,
                    metrics.width() / 2.0,
                    metrics.height() + LABEL_GAP,
                );
            }
        }
        self.node.bounding_box = bounds;
    }

    /// Paints the glyph: fill under a shadow scope, then stroke. Stroke
    /// width follows the interaction state, stays constant under zoom and
    /// never exceeds the glyph's width.
    pub fn draw_shape(
        &self,
        canvas: &mut dyn Canvas,
        x: f32,
        y: f32,
        selected: bool,
        hover: bool,
    ) -> Result<(), GlyphError> {
        let width = self.node.width()?;
        let options = self.node.options();
        let center = Point::new(x, y);

        let line_width =
            (options.selection_border_width(selected) / self.node.body.view_scale()).min(width);
        canvas.set_fill_color(options.color.background_for(selected, hover).clone());
        canvas.set_stroke_color(options.color.border_for(selected, hover).clone());
        canvas.set_line_width(line_width);

        let path = self.kind.glyph_path(center, options.size);
        {
            let mut scope = ShadowScope::new(canvas, &options.shadow);
            match &path {
                GlyphPath::Circle { center, radius } => scope.fill_circle(*center, *radius),
                GlyphPath::Polygon(vertices) => scope.fill_polygon(vertices),
            }
        }
        match &path {
            GlyphPath::Circle { center, radius } => canvas.stroke_circle(*center, *radius),
            GlyphPath::Polygon(vertices) => canvas.stroke_polygon(vertices),
        }
        Ok(())
    }

    /// Ellipse-approximation border distance shared by the polygon glyphs.
    pub fn fallback_distance_to_border(&self, angle: f32) -> Result<f32, GlyphError> {
        self.node.fallback_distance_to_border(angle)
    }
}

/// Constructor signature stored in the [`ShapeRegistry`].
pub type ShapeConstructor =
    fn(NodeOptions, Rc<Body>, SharedLabelMeasurer) -> Box<dyn NodeGeometry>;

/// Maps shape-kind identifiers to glyph constructors.
pub struct ShapeRegistry {
    constructors: HashMap<&'static str, ShapeConstructor>,
}

impl ShapeRegistry {
    /// An empty registry. Most consumers want
    /// [`ShapeRegistry::with_builtin_shapes`].
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// A registry populated with every built-in glyph kind.
    pub fn with_builtin_shapes() -> Self {
        let mut registry = Self::new();
        registry.register("dot", |options, body, label| {
            Box::new(Dot::new(options, body, label))
        });
        registry.register("triangle", |options, body, label| {
            Box::new(Triangle::new(options, body, label))
        });
        registry.register("triangleDown", |options, body, label| {
            Box::new(TriangleDown::new(options, body, label))
        });
        registry.register("square", |options, body, label| {
            Box::new(Square::new(options, body, label))
        });
        registry.register("diamond", |options, body, label| {
            Box::new(Diamond::new(options, body, label))
        });
        registry.register("star", |options, body, label| {
            Box::new(Star::new(options, body, label))
        });
        registry.register("hexagon", |options, body, label| {
            Box::new(Hexagon::new(options, body, label))
        });
        debug!(shape_count = registry.constructors.len(); "Registered built-in node shapes");
        registry
    }

    pub fn register(&mut self, kind: &'static str, constructor: ShapeConstructor) {
        self.constructors.insert(kind, constructor);
    }

    /// Constructs a glyph renderer for the given kind identifier.
    pub fn create(
        &self,
        kind: &str,
        options: NodeOptions,
        body: Rc<Body>,
        label_measurer: SharedLabelMeasurer,
    ) -> Result<Box<dyn NodeGeometry>, GlyphError> {
        let constructor = self
            .constructors
            .get(kind)
            .ok_or_else(|| GlyphError::UnknownShape(kind.to_string()))?;
        Ok(constructor(options, body, label_measurer))
    }

    /// The registered kind identifiers, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constructors.keys().copied()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::with_builtin_shapes()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::{
        canvas::{PaintOp, RecordingCanvas},
        label::FixedMeasurer,
        options::ShadowOptions,
    };

    fn measurer() -> SharedLabelMeasurer {
        Rc::new(RefCell::new(FixedMeasurer::new(0.5)))
    }

    fn options(size: f32, border_width: f32) -> NodeOptions {
        NodeOptions {
            size,
            border_width,
            ..NodeOptions::default()
        }
    }

    #[test]
    fn test_dot_distance_is_angle_independent() {
        let mut dot = Dot::new(options(10.0, 2.0), Rc::new(Body::new()), measurer());
        dot.resize();

        assert_approx_eq!(f32, dot.distance_to_border(0.0).unwrap(), 12.0);
        assert_approx_eq!(f32, dot.distance_to_border(1.2).unwrap(), 12.0);
        assert_approx_eq!(f32, dot.distance_to_border(FRAC_PI_2).unwrap(), 12.0);
    }

    #[test]
    fn test_triangle_uses_ellipse_approximation() {
        // size 12 -> width == height == 24; the generic formula adds its
        // fixed one-unit border, not options.border_width.
        let mut triangle = Triangle::new(options(12.0, 2.0), Rc::new(Body::new()), measurer());
        triangle.resize();

        assert_approx_eq!(f32, triangle.distance_to_border(0.0).unwrap(), 13.0);
        assert_approx_eq!(f32, triangle.distance_to_border(FRAC_PI_2).unwrap(), 13.0);
    }

    #[test]
    fn test_distance_before_resize_faults() {
        let dot = Dot::new(options(10.0, 2.0), Rc::new(Body::new()), measurer());
        assert_eq!(
            dot.distance_to_border(0.0),
            Err(GlyphError::UninitializedGeometry)
        );

        let triangle = Triangle::new(options(10.0, 2.0), Rc::new(Body::new()), measurer());
        assert_eq!(
            triangle.distance_to_border(0.3),
            Err(GlyphError::UninitializedGeometry)
        );
    }

    #[test]
    fn test_draw_and_bounding_box_before_resize_fault() {
        let square = Square::new(options(10.0, 1.0), Rc::new(Body::new()), measurer());
        let mut canvas = RecordingCanvas::new();

        assert_eq!(
            square.draw(&mut canvas, 0.0, 0.0, false, false),
            Err(GlyphError::UninitializedGeometry)
        );
        assert_eq!(square.bounding_box(), Err(GlyphError::UninitializedGeometry));
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut star = Star::new(
            NodeOptions {
                size: 15.0,
                label: Some("node".to_string()),
                ..NodeOptions::default()
            },
            Rc::new(Body::new()),
            measurer(),
        );

        star.resize();
        let first = star.bounding_box().unwrap();
        star.resize();
        let second = star.bounding_box().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_resize_extends_bounds_below_label() {
        let mut dot = Dot::new(
            NodeOptions {
                size: 10.0,
                label: Some("abcd".to_string()),
                font_size: 10.0,
                ..NodeOptions::default()
            },
            Rc::new(Body::new()),
            measurer(),
        );
        dot.resize();

        let bounds = dot.bounding_box().unwrap();
        // Glyph extents stay at +/- size, the label hangs underneath with a
        // 3 unit gap: 10 + 12 + 3.
        assert_approx_eq!(f32, bounds.min_y(), -10.0);
        assert_approx_eq!(f32, bounds.max_y(), 25.0);
        // Label is 4 chars * 0.5 * 10 = 20 wide, wider than the glyph.
        assert_approx_eq!(f32, bounds.min_x(), -10.0);
        assert_approx_eq!(f32, bounds.max_x(), 10.0);
    }

    #[test]
    fn test_bounding_box_translates_to_node_position() {
        let mut dot = Dot::new(options(10.0, 1.0), Rc::new(Body::new()), measurer());
        dot.resize();

        let at_position = dot
            .bounding_box()
            .unwrap()
            .translate(Point::new(100.0, 50.0));
        assert_approx_eq!(f32, at_position.min_x(), 90.0);
        assert_approx_eq!(f32, at_position.max_x(), 110.0);
        assert_approx_eq!(f32, at_position.min_y(), 40.0);
        assert_approx_eq!(f32, at_position.max_y(), 60.0);
    }

    #[test]
    fn test_draw_paints_fill_then_stroke_without_touching_bounds() {
        let mut dot = Dot::new(options(10.0, 1.0), Rc::new(Body::new()), measurer());
        dot.resize();
        let before = dot.bounding_box().unwrap();

        let mut canvas = RecordingCanvas::new();
        dot.draw(&mut canvas, 40.0, 40.0, false, false).unwrap();

        assert_eq!(dot.bounding_box().unwrap(), before);
        match canvas.ops() {
            [
                PaintOp::FillCircle { center, radius, .. },
                PaintOp::StrokeCircle { .. },
            ] => {
                assert_approx_eq!(f32, center.x(), 40.0);
                assert_approx_eq!(f32, center.y(), 40.0);
                assert_approx_eq!(f32, *radius, 10.0);
            }
            ops => panic!("unexpected paint sequence: {ops:?}"),
        }
    }

    #[test]
    fn test_draw_scopes_shadow_to_fill() {
        let mut triangle = Triangle::new(
            NodeOptions {
                size: 10.0,
                shadow: ShadowOptions {
                    enabled: true,
                    size: 10.0,
                    x: 5.0,
                    y: 5.0,
                },
                ..NodeOptions::default()
            },
            Rc::new(Body::new()),
            measurer(),
        );
        triangle.resize();

        let mut canvas = RecordingCanvas::new();
        triangle.draw(&mut canvas, 0.0, 0.0, false, false).unwrap();

        match canvas.ops() {
            [PaintOp::FillPolygon { shadow, .. }, PaintOp::StrokePolygon { .. }] => {
                assert!(!shadow.is_baseline());
            }
            ops => panic!("unexpected paint sequence: {ops:?}"),
        }
        // No shadow styling leaks past the draw call.
        assert!(canvas.shadow().is_baseline());
    }

    #[test]
    fn test_selection_state_picks_highlight_style() {
        let mut dot = Dot::new(options(10.0, 2.0), Rc::new(Body::new()), measurer());
        dot.resize();

        let mut canvas = RecordingCanvas::new();
        dot.draw(&mut canvas, 0.0, 0.0, true, false).unwrap();

        let defaults = NodeOptions::default();
        assert_eq!(canvas.fill_color(), &defaults.color.highlight.background);
        // Selected stroke falls back to twice the border width.
        assert_approx_eq!(f32, canvas.line_width(), 4.0);
    }

    #[test]
    fn test_line_width_divides_by_view_scale_and_clamps() {
        let body = Rc::new(Body::new());
        body.set_view_scale(2.0);
        let mut dot = Dot::new(options(10.0, 2.0), body.clone(), measurer());
        dot.resize();

        let mut canvas = RecordingCanvas::new();
        dot.draw(&mut canvas, 0.0, 0.0, false, false).unwrap();
        assert_approx_eq!(f32, canvas.line_width(), 1.0);

        // A zoomed-out view never pushes the stroke past the glyph width.
        body.set_view_scale(0.001);
        dot.draw(&mut canvas, 0.0, 0.0, false, false).unwrap();
        assert_approx_eq!(f32, canvas.line_width(), 20.0);
    }

    #[test]
    fn test_set_options_does_not_resize() {
        let mut dot = Dot::new(options(10.0, 1.0), Rc::new(Body::new()), measurer());
        dot.resize();
        let before = dot.bounding_box().unwrap();

        dot.set_options(options(50.0, 1.0));
        // Geometry is stale until the caller resizes explicitly.
        assert_eq!(dot.bounding_box().unwrap(), before);

        dot.resize();
        assert_approx_eq!(f32, dot.bounding_box().unwrap().max_x(), 50.0);
    }

    #[test]
    fn test_square_path_is_axis_aligned() {
        match ShapeKind::Square.glyph_path(Point::new(0.0, 0.0), 8.0) {
            GlyphPath::Polygon(vertices) => {
                assert_eq!(vertices.len(), 4);
                for vertex in vertices {
                    assert_approx_eq!(f32, vertex.x().abs(), 8.0);
                    assert_approx_eq!(f32, vertex.y().abs(), 8.0);
                }
            }
            GlyphPath::Circle { .. } => panic!("square must paint a polygon"),
        }
    }

    #[test]
    fn test_registry_creates_every_builtin_kind() {
        let registry = ShapeRegistry::with_builtin_shapes();
        let body = Rc::new(Body::new());

        for kind in [
            "dot",
            "triangle",
            "triangleDown",
            "square",
            "diamond",
            "star",
            "hexagon",
        ] {
            let mut glyph = registry
                .create(kind, NodeOptions::default(), body.clone(), measurer())
                .unwrap_or_else(|err| panic!("{kind}: {err}"));
            glyph.resize();
            let distance = glyph.distance_to_border(0.7).unwrap();
            assert!(distance.is_finite() && distance > 0.0);
        }
    }

    #[test]
    fn test_registry_rejects_unknown_kind() {
        let registry = ShapeRegistry::with_builtin_shapes();
        let result = registry.create(
            "dodecahedron",
            NodeOptions::default(),
            Rc::new(Body::new()),
            measurer(),
        );
        assert!(matches!(
            result.map(|_| ()),
            Err(GlyphError::UnknownShape(kind)) if kind == "dodecahedron"
        ));
    }

    #[test]
    fn test_polygon_glyphs_have_expected_vertex_counts() {
        let center = Point::new(0.0, 0.0);
        for (kind, sides) in [
            (ShapeKind::Triangle, 3),
            (ShapeKind::TriangleDown, 3),
            (ShapeKind::Square, 4),
            (ShapeKind::Diamond, 4),
            (ShapeKind::Hexagon, 6),
            (ShapeKind::Star, 10),
        ] {
            assert_eq!(kind.sides(), sides);
            match kind.glyph_path(center, 10.0) {
                GlyphPath::Polygon(vertices) => assert_eq!(vertices.len(), sides as usize),
                GlyphPath::Circle { .. } => panic!("{kind:?} must paint a polygon"),
            }
        }
        assert!(matches!(
            ShapeKind::Circle.glyph_path(center, 10.0),
            GlyphPath::Circle { .. }
        ));
    }
}
