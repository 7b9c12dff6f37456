use std::rc::Rc;

use crate::{
    canvas::Canvas,
    error::GlyphError,
    geometry::Bounds,
    options::NodeOptions,
    shape::{Body, NodeGeometry, ShapeCore, ShapeKind, SharedLabelMeasurer},
};

/// A regular hexagon glyph.
pub struct Hexagon {
    shape: ShapeCore,
}

impl Hexagon {
    pub fn new(options: NodeOptions, body: Rc<Body>, label_measurer: SharedLabelMeasurer) -> Self {
        Self {
            shape: ShapeCore::new(ShapeKind::Hexagon, options, body, label_measurer),
        }
    }
}

impl NodeGeometry for Hexagon {
    fn resize(&mut self) {
        self.shape.resize_shape();
    }

    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        x: f32,
        y: f32,
        selected: bool,
        hover: bool,
    ) -> Result<(), GlyphError> {
        self.shape.draw_shape(canvas, x, y, selected, hover)
    }

    fn distance_to_border(&self, angle: f32) -> Result<f32, GlyphError> {
        self.shape.fallback_distance_to_border(angle)
    }

    fn bounding_box(&self) -> Result<Bounds, GlyphError> {
        self.shape.bounding_box()
    }

    fn set_options(&mut self, options: NodeOptions) {
        self.shape.set_options(options);
    }
}
