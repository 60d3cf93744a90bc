use super::{Point2, Vector2};
use crate::error::{GeometryError, Result};

/// A closed `[min, max]` interval along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length of the interval.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Scans `values` for the smallest and largest entries.
    ///
    /// Ties keep the first occurrence; only the value matters downstream.
    fn scan(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut out: Option<Self> = None;
        for v in values {
            out = Some(match out {
                None => Self::new(v, v),
                Some(b) => Self::new(
                    if v < b.min { v } else { b.min },
                    if v > b.max { v } else { b.max },
                ),
            });
        }
        out
    }
}

/// An axis-aligned bounding box in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Bounds along the X axis.
    pub x: Bounds,
    /// Bounds along the Y axis.
    pub y: Bounds,
}

impl Aabb2 {
    /// Computes the bounding box of a non-empty point set.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyVertexSet` if `points` is empty.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        let x = Bounds::scan(points.iter().map(|p| p.x));
        let y = Bounds::scan(points.iter().map(|p| p.y));
        match (x, y) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(GeometryError::EmptyVertexSet.into()),
        }
    }

    #[must_use]
    pub fn min(&self) -> Point2 {
        Point2::new(self.x.min, self.y.min)
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        Point2::new(self.x.max, self.y.max)
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x.mid(), self.y.mid())
    }

    /// Width and height of the box.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.x.extent(), self.y.extent())
    }
}
