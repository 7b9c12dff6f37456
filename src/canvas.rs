//! The drawing-surface contract and scoped shadow styling.
//!
//! Node glyphs paint through the [`Canvas`] trait: an immediate-mode API of
//! fill/stroke calls over circles and polygons, plus mutable shadow-style
//! state. The canvas is a shared resource; shadow styling set on it persists
//! until explicitly reset, so glyph code never toggles it directly and goes
//! through a [`ShadowScope`] instead, which restores the baseline on every
//! exit path.

use crate::{
    color::Color,
    geometry::Point,
    options::ShadowOptions,
};

pub mod svg;

pub use self::svg::SvgCanvas;

/// Shadow styling state carried by a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowStyle {
    pub color: Color,
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ShadowStyle {
    /// The disabled baseline: fully transparent color, zero blur and offsets.
    pub fn baseline() -> Self {
        Self {
            color: Color::transparent(),
            blur: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// True when painting with this style produces no visible shadow.
    pub fn is_baseline(&self) -> bool {
        self.color.is_transparent()
    }
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self::baseline()
    }
}

/// A 2D immediate-mode drawing surface.
///
/// Fill and stroke calls paint with the current fill/stroke style; the
/// shadow style applies to fill calls only. Implementations never need to
/// report paint results back to glyph code.
pub trait Canvas {
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);

    /// Replaces the surface's shadow-style state.
    fn set_shadow(&mut self, shadow: ShadowStyle);
    /// Returns the surface's current shadow-style state.
    fn shadow(&self) -> ShadowStyle;

    fn fill_circle(&mut self, center: Point, radius: f32);
    fn stroke_circle(&mut self, center: Point, radius: f32);
    fn fill_polygon(&mut self, vertices: &[Point]);
    fn stroke_polygon(&mut self, vertices: &[Point]);
}

/// Scoped shadow styling over a canvas.
///
/// On construction, applies the drop-shadow described by the node's shadow
/// options (a no-op when disabled); on drop, restores the canvas shadow state
/// to [`ShadowStyle::baseline`]. Paint calls issued through the scope hit the
/// underlying canvas directly.
pub struct ShadowScope<'a> {
    canvas: &'a mut dyn Canvas,
    active: bool,
}

impl<'a> ShadowScope<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, options: &ShadowOptions) -> Self {
        let active = options.enabled;
        if active {
            canvas.set_shadow(ShadowStyle {
                color: Color::shadow(),
                blur: options.size,
                offset_x: options.x,
                offset_y: options.y,
            });
        }
        Self { canvas, active }
    }
}

impl Drop for ShadowScope<'_> {
    fn drop(&mut self) {
        if self.active {
            self.canvas.set_shadow(ShadowStyle::baseline());
        }
    }
}

impl<'a> std::ops::Deref for ShadowScope<'a> {
    type Target = dyn Canvas + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.canvas
    }
}

impl std::ops::DerefMut for ShadowScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.canvas
    }
}

/// One paint call captured by a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    FillCircle {
        center: Point,
        radius: f32,
        shadow: ShadowStyle,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
    },
    FillPolygon {
        vertices: Vec<Point>,
        shadow: ShadowStyle,
    },
    StrokePolygon {
        vertices: Vec<Point>,
    },
}

/// An in-memory canvas that records paint calls and style state instead of
/// rasterizing. Used by tests and headless consumers that only need the
/// glyph's paint sequence (hit testing, golden output).
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<PaintOp>,
    fill_color: Color,
    stroke_color: Color,
    line_width: f32,
    shadow: ShadowStyle,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn fill_color(&self) -> &Color {
        &self.fill_color
    }

    pub fn stroke_color(&self) -> &Color {
        &self.stroke_color
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }
}

impl Canvas for RecordingCanvas {
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
        self.ops.push(PaintOp::FillCircle {
            center,
            radius,
            shadow: self.shadow.clone(),
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32) {
        self.ops.push(PaintOp::StrokeCircle { center, radius });
    }

    fn fill_polygon(&mut self, vertices: &[Point]) {
        self.ops.push(PaintOp::FillPolygon {
            vertices: vertices.to_vec(),
            shadow: self.shadow.clone(),
        });
    }

    fn stroke_polygon(&mut self, vertices: &[Point]) {
        self.ops.push(PaintOp::StrokePolygon {
            vertices: vertices.to_vec(),
        });
    }
}
