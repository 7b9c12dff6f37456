//! Node Glyph Rendering Core
//!
//! This crate provides the node-shape rendering abstraction used by an
//! interactive graph/network visualization surface. It includes:
//!
//! - **Geometry**: points, sizes, bounds and border-distance math
//!   ([`geometry`] module)
//! - **Canvas**: the drawing-surface contract with scoped shadow styling
//!   ([`canvas`] module)
//! - **Labels**: label-measurement collaborators ([`label`] module)
//! - **Options**: per-node rendering configuration ([`options`] module)
//! - **Shapes**: glyph renderers (dot, triangle, square, ...) and the shape
//!   registry ([`shape`] module)

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod label;
pub mod options;
pub mod shape;

pub use canvas::{Canvas, RecordingCanvas, ShadowScope, ShadowStyle, SvgCanvas};
pub use color::Color;
pub use error::GlyphError;
pub use geometry::{Bounds, Point, Size};
pub use label::{FixedMeasurer, LabelMeasurer, TextMeasurer};
pub use options::{ColorOptions, NodeOptions, ShadowOptions, StateColors};
pub use shape::{Body, NodeGeometry, ShapeKind, ShapeRegistry};
