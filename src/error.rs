//! Error types for node glyph rendering.

use thiserror::Error;

/// The error type for glyph geometry and registry operations.
///
/// Rendering itself is infallible once geometry exists; every variant here
/// is a caller-side contract violation surfaced deterministically instead of
/// producing NaN geometry or a silently degenerate glyph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    /// `draw`, `distance_to_border` or `bounding_box` was consulted before
    /// any `resize` established the glyph's extents.
    #[error("node geometry accessed before resize")]
    UninitializedGeometry,

    /// The registry was asked for a shape kind it does not know.
    #[error("unknown shape kind: {0}")]
    UnknownShape(String),
}
