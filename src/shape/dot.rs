use std::rc::Rc;

use crate::{
    canvas::Canvas,
    error::GlyphError,
    geometry::Bounds,
    options::NodeOptions,
    shape::{Body, NodeGeometry, ShapeCore, ShapeKind, SharedLabelMeasurer},
};

/// A filled circle glyph.
///
/// The only glyph with an exact border distance: a circle is isotropic, so
/// the border sits `size + border_width` from the center at every angle.
pub struct Dot {
    shape: ShapeCore,
}

impl Dot {
    pub fn new(options: NodeOptions, body: Rc<Body>, label_measurer: SharedLabelMeasurer) -> Self {
        Self {
            shape: ShapeCore::new(ShapeKind::Circle, options, body, label_measurer),
        }
    }
}

impl NodeGeometry for Dot {
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

    fn distance_to_border(&self, _angle: f32) -> Result<f32, GlyphError> {
        self.shape.node().ensure_resized()?;
        let options = self.shape.options();
        Ok(options.size + options.border_width)
    }

    fn bounding_box(&self) -> Result<Bounds, GlyphError> {
        self.shape.bounding_box()
    }

    fn set_options(&mut self, options: NodeOptions) {
        self.shape.set_options(options);
    }
}
