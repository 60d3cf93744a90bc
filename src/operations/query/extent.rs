use super::CurrentVertices;
use crate::board::Board;
use crate::entity::EntityId;
use crate::error::Result;
use crate::math::Aabb2;

/// Computes the world-space bounding box of an entity's current vertices.
pub struct Extent {
    entity: EntityId,
}

impl Extent {
    /// Creates a new `Extent` query.
    #[must_use]
    pub fn new(entity: EntityId) -> Self {
        Self { entity }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is missing.
    pub fn execute(&self, board: &Board) -> Result<Aabb2> {
        let verts = CurrentVertices::new(self.entity).execute(board)?;
        Aabb2::from_points(&verts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{Point2, Vector2};
    use crate::operations::creation::MakePiece;

    #[test]
    fn rotated_extent_swaps_dimensions() {
        let mut board = Board::default();
        let verts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(20.0, 0.0),
            Point2::new(20.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let id = MakePiece::new(verts)
            .with_rotation(FRAC_PI_2)
            .execute(&mut board)
            .unwrap();
        let bb = Extent::new(id).execute(&board).unwrap();
        assert_relative_eq!(bb.size(), Vector2::new(10.0, 20.0), epsilon = 1e-9);
        assert_relative_eq!(bb.center(), Point2::new(10.0, 5.0), epsilon = 1e-9);
    }
}
