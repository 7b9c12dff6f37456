//! SVG-backed canvas implementation.
//!
//! [`SvgCanvas`] replays the immediate-mode paint calls of the [`Canvas`]
//! trait into SVG elements. The active shadow style is expressed as a CSS
//! `drop-shadow` filter on filled elements, which matches the fill-only
//! shadow semantics of the glyph scaffolding.

use svg::{self, Document, node::element as svg_element};

use crate::{
    canvas::{Canvas, ShadowStyle},
    color::Color,
    geometry::Point,
};

/// A [`Canvas`] that accumulates SVG nodes.
pub struct SvgCanvas {
    nodes: Vec<Box<dyn svg::Node>>,
    fill_color: Color,
    stroke_color: Color,
    line_width: f32,
    shadow: ShadowStyle,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            fill_color: Color::default(),
            stroke_color: Color::default(),
            line_width: 1.0,
            shadow: ShadowStyle::baseline(),
        }
    }

    /// Builds an SVG document from the accumulated paint calls with the
    /// given view box.
    pub fn into_document(self, min: Point, width: f32, height: f32) -> Document {
        let mut document =
            Document::new().set("viewBox", (min.x(), min.y(), width, height));
        for node in self.nodes {
            document = document.add(node);
        }
        document
    }

    fn shadow_filter(&self) -> Option<String> {
        if self.shadow.is_baseline() {
            return None;
        }
        Some(format!(
            "filter: drop-shadow({}px {}px {}px {})",
            self.shadow.offset_x, self.shadow.offset_y, self.shadow.blur, self.shadow.color,
        ))
    }

    fn circle(&self, center: Point, radius: f32) -> svg_element::Circle {
        svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius)
    }

    fn polygon(&self, vertices: &[Point]) -> svg_element::Polygon {
        let points = vertices
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");
        svg_element::Polygon::new().set("points", points)
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for SvgCanvas {
    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_shadow(&mut self, shadow: ShadowStyle) {
        self.shadow = shadow;
    }

    fn shadow(&self) -> ShadowStyle {
        self.shadow.clone()
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        let mut circle = self
            .circle(center, radius)
            .set("fill", self.fill_color.to_string())
            .set("stroke", "none");
        if let Some(style) = self.shadow_filter() {
            circle = circle.set("style", style);
        }
        self.nodes.push(Box::new(circle));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32) {
        let circle = self
            .circle(center, radius)
            .set("fill", "none")
            .set("stroke", self.stroke_color.to_string())
            .set("stroke-width", self.line_width);
        self.nodes.push(Box::new(circle));
    }

    fn fill_polygon(&mut self, vertices: &[Point]) {
        let mut polygon = self
            .polygon(vertices)
            .set("fill", self.fill_color.to_string())
            .set("stroke", "none");
        if let Some(style) = self.shadow_filter() {
            polygon = polygon.set("style", style);
        }
        self.nodes.push(Box::new(polygon));
    }

    fn stroke_polygon(&mut self, vertices: &[Point]) {
        let polygon = self
            .polygon(vertices)
            .set("fill", "none")
            .set("stroke", self.stroke_color.to_string())
            .set("stroke-width", self.line_width);
        self.nodes.push(Box::new(polygon));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_paints_fill_and_stroke_elements() {
        let mut canvas = SvgCanvas::new();
        canvas.set_fill_color(Color::new("#97C2FC").unwrap());
        canvas.set_stroke_color(Color::new("#2B7CE9").unwrap());
        canvas.set_line_width(2.0);
        canvas.fill_circle(Point::new(10.0, 10.0), 5.0);
        canvas.stroke_circle(Point::new(10.0, 10.0), 5.0);

        let rendered = canvas
            .into_document(Point::new(0.0, 0.0), 20.0, 20.0)
            .to_string();
        assert_eq!(rendered.matches("<circle").count(), 2);
        assert!(rendered.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_shadow_becomes_drop_shadow_filter() {
        let mut canvas = SvgCanvas::new();
        canvas.set_shadow(ShadowStyle {
            color: Color::shadow(),
            blur: 10.0,
            offset_x: 5.0,
            offset_y: 5.0,
        });
        canvas.fill_polygon(&[
            Point::new(0.0, -10.0),
            Point::new(8.0, 5.0),
            Point::new(-8.0, 5.0),
        ]);
        canvas.set_shadow(ShadowStyle::baseline());
        canvas.stroke_polygon(&[
            Point::new(0.0, -10.0),
            Point::new(8.0, 5.0),
            Point::new(-8.0, 5.0),
        ]);

        let rendered = canvas
            .into_document(Point::new(-20.0, -20.0), 40.0, 40.0)
            .to_string();
        assert_eq!(rendered.matches("drop-shadow").count(), 1);
        assert_eq!(rendered.matches("<polygon").count(), 2);
    }
}
