use tracing::warn;

use super::{rotate_vector, Aabb2, Bounds, Point2, Vector2, TOLERANCE};
use crate::error::Result;

/// Boundary vertices expressed relative to their own bounding box.
///
/// Each normalized coordinate lies in `[-0.5, 0.5]`. The bounds used for
/// the normalization are kept so the original extents can be restored.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedShape {
    /// X bounds of the source vertices.
    pub x_bounds: Bounds,
    /// Y bounds of the source vertices.
    pub y_bounds: Bounds,
    /// Normalized vertices, index-aligned with the source vertices.
    pub verts: Vec<Point2>,
}

impl NormalizedShape {
    /// Normalizes a non-empty vertex sequence against its bounding box.
    ///
    /// On an axis where the box has zero extent every vertex maps to `0`,
    /// the box centre, so placing the shape still restores the source.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyVertexSet` if `verts` is empty.
    pub fn from_vertices(verts: &[Point2]) -> Result<Self> {
        let bb = Aabb2::from_points(verts)?;
        let verts = verts
            .iter()
            .map(|v| Point2::new(unit(v.x, bb.x, "x"), unit(v.y, bb.y, "y")))
            .collect();
        Ok(Self {
            x_bounds: bb.x,
            y_bounds: bb.y,
            verts,
        })
    }

    /// Extents used to scale normalized coordinates back to world units.
    #[must_use]
    pub fn scale(&self) -> Vector2 {
        Vector2::new(
            nonzero_extent(self.x_bounds),
            nonzero_extent(self.y_bounds),
        )
    }

    /// Centre of the normalization box in the source frame.
    #[must_use]
    pub fn home(&self) -> Point2 {
        Point2::new(self.x_bounds.mid(), self.y_bounds.mid())
    }

    /// Places the shape with its box centre at `pivot`, rotated by `angle`.
    #[must_use]
    pub fn place(&self, pivot: Point2, angle: f64) -> Vec<Point2> {
        let scale = self.scale();
        self.verts
            .iter()
            .map(|n| {
                let local = Vector2::new(n.x * scale.x, n.y * scale.y);
                pivot + rotate_vector(local, angle)
            })
            .collect()
    }
}

fn nonzero_extent(b: Bounds) -> f64 {
    let e = b.extent();
    if e.abs() < TOLERANCE {
        1.0
    } else {
        e
    }
}

fn unit(value: f64, b: Bounds, axis: &str) -> f64 {
    let e = b.extent();
    if e.abs() < TOLERANCE {
        warn!(axis, value, "zero extent during normalization");
        return 0.0;
    }
    (value - b.min) / e - 0.5
}
