use std::rc::Rc;

use crate::{
    canvas::Canvas,
    error::GlyphError,
    geometry::Bounds,
    options::NodeOptions,
    shape::{Body, NodeGeometry, ShapeCore, ShapeKind, SharedLabelMeasurer},
};

/// An axis-aligned square glyph.
pub struct Square {
    shape: ShapeCore,
}

impl Square {
    pub fn new(options: NodeOptions, body: Rc<Body>, label_measurer: SharedLabelMeasurer) -> Self {
        Self {
            shape: ShapeCore::new(ShapeKind::Square, options, body, label_measurer),
        }
    }
}

impl NodeGeometry for Square {
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
