//! Geometric primitives and the border-distance math shared by node glyphs.
//!
//! Everything in this module is a pure value computation: glyph code combines
//! these helpers with its own sizing state, and the canvas layer consumes the
//! resulting points and bounds.

use std::f32::consts::PI;

/// A point in screen space. The y axis grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds, and the size
    /// is distributed equally in all directions around that center.
    pub fn to_bounds(self, size: Size) -> Bounds {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;

        Bounds {
            min_x: self.x - half_width,
            min_y: self.y - half_height,
            max_x: self.x + half_width,
            max_y: self.y + half_height,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Axis-aligned rectangle occupied by a node glyph in screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Extends the left/right edges to include the given x range and pushes
    /// the bottom edge down by `extra_height`. Used to grow a glyph's bounds
    /// around a label placed underneath it.
    pub fn extend_below(self, min_x: f32, max_x: f32, extra_height: f32) -> Self {
        Self {
            min_x: self.min_x.min(min_x),
            min_y: self.min_y,
            max_x: self.max_x.max(max_x),
            max_y: self.max_y + extra_height,
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset
    ///
    /// This translates both the minimum and maximum coordinates by the given amount.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }
}

/// Distance from the center of a `width` x `height` footprint to its border,
/// along a ray at `angle` radians (0 = positive x axis, counter-clockwise),
/// approximating the footprint as an ellipse.
///
/// When `cos(angle)` or `sin(angle)` is zero the corresponding term divides
/// to infinity and the `min` degenerates to the other, finite, projection.
/// The approximation bounds rectangle- and ellipse-like outlines correctly
/// but is inexact for polygonal glyphs such as triangles.
pub fn ellipse_border_distance(width: f32, height: f32, angle: f32, border_width: f32) -> f32 {
    let horizontal = (width / 2.0 / angle.cos()).abs();
    let vertical = (height / 2.0 / angle.sin()).abs();
    horizontal.min(vertical) + border_width
}

/// Vertices of a regular polygon with `sides` vertices on a circle of
/// `radius` around `center`. `rotation` is the angle of the first vertex;
/// `-PI / 2` puts it at the top of the glyph.
pub fn regular_polygon_vertices(
    center: Point,
    radius: f32,
    sides: u32,
    rotation: f32,
) -> Vec<Point> {
    let step = 2.0 * PI / sides as f32;
    (0..sides)
        .map(|i| {
            let angle = rotation + i as f32 * step;
            Point::new(
                angle.cos().mul_add(radius, center.x()),
                angle.sin().mul_add(radius, center.y()),
            )
        })
        .collect()
}

/// Vertices of a five-pointed star, point-up, with inner vertices at half
/// the outer radius.
pub fn star_vertices(center: Point, outer_radius: f32) -> Vec<Point> {
    let inner_radius = outer_radius * 0.5;
    let step = PI / 5.0;
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            let angle = -PI / 2.0 + i as f32 * step;
            Point::new(
                angle.cos().mul_add(radius, center.x()),
                angle.sin().mul_add(radius, center.y()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn test_point_to_bounds() {
        let bounds = Point::new(10.0, 20.0).to_bounds(Size::new(6.0, 8.0));

        assert_eq!(bounds.min_x(), 7.0);
        assert_eq!(bounds.min_y(), 16.0);
        assert_eq!(bounds.max_x(), 13.0);
        assert_eq!(bounds.max_y(), 24.0);
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::new(-5.0, -5.0, 5.0, 5.0).translate(Point::new(100.0, 40.0));

        assert_eq!(bounds.min_x(), 95.0);
        assert_eq!(bounds.min_y(), 35.0);
        assert_eq!(bounds.max_x(), 105.0);
        assert_eq!(bounds.max_y(), 45.0);
    }

    #[test]
    fn test_bounds_merge() {
        let merged = Bounds::new(0.0, 0.0, 4.0, 4.0).merge(&Bounds::new(-2.0, 1.0, 3.0, 6.0));

        assert_eq!(merged.min_x(), -2.0);
        assert_eq!(merged.min_y(), 0.0);
        assert_eq!(merged.max_x(), 4.0);
        assert_eq!(merged.max_y(), 6.0);
    }

    #[test]
    fn test_bounds_extend_below() {
        // A 20x20 glyph with a 30x10 label hanging underneath.
        let bounds = Bounds::new(-10.0, -10.0, 10.0, 10.0).extend_below(-15.0, 15.0, 10.0);

        assert_eq!(bounds.min_x(), -15.0);
        assert_eq!(bounds.min_y(), -10.0);
        assert_eq!(bounds.max_x(), 15.0);
        assert_eq!(bounds.max_y(), 20.0);
    }

    #[test]
    fn test_border_distance_axis_aligned() {
        // Along the x axis the sin term divides to infinity and the min
        // degenerates to the half-width projection.
        assert_approx_eq!(f32, ellipse_border_distance(24.0, 16.0, 0.0, 1.0), 13.0);
        assert_approx_eq!(f32, ellipse_border_distance(24.0, 16.0, PI, 1.0), 13.0);
        assert_approx_eq!(
            f32,
            ellipse_border_distance(24.0, 16.0, FRAC_PI_2, 1.0),
            9.0
        );
    }

    #[test]
    fn test_border_distance_diagonal_smaller_than_corner() {
        // At 45 degrees the formula picks the smaller projection, so the
        // distance never exceeds the half-diagonal of the footprint.
        let distance = ellipse_border_distance(20.0, 20.0, PI / 4.0, 0.0);
        assert!(distance <= 10.0 * 2.0_f32.sqrt() + 0.001);
        assert!(distance >= 10.0);
    }

    #[test]
    fn test_regular_polygon_point_up() {
        let vertices = regular_polygon_vertices(Point::new(0.0, 0.0), 10.0, 3, -FRAC_PI_2);

        assert_eq!(vertices.len(), 3);
        // First vertex at the top (negative y in screen coordinates).
        assert_approx_eq!(f32, vertices[0].x(), 0.0, epsilon = 0.001);
        assert_approx_eq!(f32, vertices[0].y(), -10.0, epsilon = 0.001);
        // Remaining vertices below the center.
        assert!(vertices[1].y() > 0.0);
        assert!(vertices[2].y() > 0.0);
    }

    #[test]
    fn test_star_vertices_alternate_radii() {
        let vertices = star_vertices(Point::new(0.0, 0.0), 12.0);

        assert_eq!(vertices.len(), 10);
        for (i, vertex) in vertices.iter().enumerate() {
            let expected = if i % 2 == 0 { 12.0 } else { 6.0 };
            assert_approx_eq!(f32, vertex.hypot(), expected, epsilon = 0.001);
        }
    }
}
