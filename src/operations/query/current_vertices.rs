use super::WorldPose;
use crate::board::Board;
use crate::entity::EntityId;
use crate::error::Result;
use crate::math::Point2;

/// Computes an entity's current boundary vertices in world space.
///
/// Works for group members too, by placing the member's shape at its
/// world pose.
pub struct CurrentVertices {
    entity: EntityId,
}

impl CurrentVertices {
    /// Creates a new `CurrentVertices` query.
    #[must_use]
    pub fn new(entity: EntityId) -> Self {
        Self { entity }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity or its parent is missing.
    pub fn execute(&self, board: &Board) -> Result<Vec<Point2>> {
        let pose = WorldPose::new(self.entity).execute(board)?;
        let entity = board.entity(self.entity)?;
        Ok(entity.shape().place(pose.pivot, pose.rotation))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector2;
    use crate::operations::creation::MakePiece;
    use crate::operations::snap::Merge;
    use crate::operations::transform::Translate;

    fn tile(x0: f64) -> Vec<Point2> {
        vec![
            Point2::new(x0, 0.0),
            Point2::new(x0 + 10.0, 0.0),
            Point2::new(x0 + 10.0, 10.0),
            Point2::new(x0, 10.0),
        ]
    }

    #[test]
    fn solved_placement_reproduces_input() {
        let mut board = Board::default();
        let a = MakePiece::new(tile(0.0))
            .with_rotation(0.0)
            .execute(&mut board)
            .unwrap();
        let verts = CurrentVertices::new(a).execute(&board).unwrap();
        for (v, w) in verts.iter().zip(tile(0.0)) {
            assert_relative_eq!(*v, w, epsilon = 1e-12);
        }
    }

    #[test]
    fn members_are_reported_in_world_space() {
        let mut board = Board::default();
        let a = MakePiece::new(tile(0.0)).with_rotation(PI).execute(&mut board).unwrap();
        let b = MakePiece::new(tile(10.0)).with_rotation(PI).execute(&mut board).unwrap();
        Translate::new(b, Vector2::new(-20.0, 0.0)).execute(&mut board).unwrap();
        let before = CurrentVertices::new(b).execute(&board).unwrap();

        let g = Merge::new(b, a).execute(&mut board).unwrap();
        let after = CurrentVertices::new(b).execute(&board).unwrap();
        for (v, w) in after.iter().zip(&before) {
            assert_relative_eq!(*v, *w, epsilon = 1e-9);
        }

        Translate::new(g, Vector2::new(1.5, 2.5)).execute(&mut board).unwrap();
        let shifted = CurrentVertices::new(b).execute(&board).unwrap();
        assert_relative_eq!(shifted[0], before[0] + Vector2::new(1.5, 2.5), epsilon = 1e-9);
    }
}
