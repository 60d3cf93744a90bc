use tracing::trace;

use crate::board::Board;
use crate::entity::EntityId;
use crate::error::Result;
use crate::math::rotation::same_angle;
use crate::math::vertex_2d::first_shared;
use crate::math::Vector2;

/// An accepted snap candidate for a moved entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMatch {
    /// The registered entity the moved one snaps to.
    pub other: EntityId,
    /// Index of the shared vertex in the moved entity's `init_verts`.
    pub moved_index: usize,
    /// Index of the shared vertex in the other entity's `init_verts`.
    pub other_index: usize,
    /// Current gap between the two copies of the shared vertex
    /// (moved minus other).
    pub offset: Vector2,
}

/// Scans the registry for the first entity a moved entity can snap to.
///
/// Candidates are visited in registry order. A candidate must have the
/// same rotation and share a boundary vertex value with the moved entity;
/// the first vertex of the moved entity's boundary that the candidate also
/// has is the one tested. The match is accepted when that vertex's current
/// copies are closer than the moved entity's connection distance on each
/// axis separately. The first accepted candidate wins, even if a later one
/// is closer.
pub struct FindMatch {
    entity: EntityId,
}

impl FindMatch {
    /// Creates a new `FindMatch` query.
    #[must_use]
    pub fn new(entity: EntityId) -> Self {
        Self { entity }
    }

    /// Executes the scan. Returns `None` when nothing is in reach.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is missing or is a group member.
    pub fn execute(&self, board: &Board) -> Result<Option<SnapMatch>> {
        let moved = board.top_level(self.entity)?;
        let tol = board.config().vertex_tolerance;
        let reach = moved.connection_distance();
        let moved_cur = moved.current_vertices();

        for &other_id in board.registry() {
            if other_id == self.entity {
                continue;
            }
            let other = board.entity(other_id)?;
            if !same_angle(other.rotation(), moved.rotation()) {
                trace!(?other_id, "rotation differs");
                continue;
            }
            let Some((i, j)) = first_shared(moved.init_verts(), other.init_verts(), tol) else {
                continue;
            };

            let offset = moved_cur[i] - other.current_vertices()[j];
            if offset.x.abs() < reach.x && offset.y.abs() < reach.y {
                return Ok(Some(SnapMatch {
                    other: other_id,
                    moved_index: i,
                    other_index: j,
                    offset,
                }));
            }
            trace!(?other_id, dx = offset.x, dy = offset.y, "shared vertex out of reach");
        }
        Ok(None)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Point2;
    use crate::operations::creation::MakePiece;

    fn tile(x0: f64, y0: f64) -> Vec<Point2> {
        vec![
            Point2::new(x0, y0),
            Point2::new(x0 + 10.0, y0),
            Point2::new(x0 + 10.0, y0 + 10.0),
            Point2::new(x0, y0 + 10.0),
        ]
    }

    fn board_with(left_pos: Vector2, right_pos: Vector2, right_rot: f64) -> (Board, EntityId, EntityId) {
        let mut board = Board::default();
        let a = MakePiece::new(tile(0.0, 0.0))
            .with_rotation(0.0)
            .with_position(left_pos)
            .execute(&mut board)
            .unwrap();
        let b = MakePiece::new(tile(10.0, 0.0))
            .with_rotation(right_rot)
            .with_position(right_pos)
            .execute(&mut board)
            .unwrap();
        (board, a, b)
    }

    #[test]
    fn just_inside_reach_matches() {
        let (board, a, b) = board_with(Vector2::zeros(), Vector2::new(39.9, 0.0), 0.0);
        let m = FindMatch::new(b).execute(&board).unwrap().unwrap();
        assert_eq!(m.other, a);
        assert_relative_eq!(m.offset, Vector2::new(39.9, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn just_outside_reach_does_not_match() {
        let (board, _, b) = board_with(Vector2::zeros(), Vector2::new(40.1, 0.0), 0.0);
        assert!(FindMatch::new(b).execute(&board).unwrap().is_none());
    }

    #[test]
    fn reach_is_per_axis_box() {
        // Euclidean distance ~50 but each axis under 40.
        let (board, _, b) = board_with(Vector2::zeros(), Vector2::new(35.0, -35.0), 0.0);
        assert!(FindMatch::new(b).execute(&board).unwrap().is_some());
    }

    #[test]
    fn different_rotation_never_matches() {
        let (board, _, b) = board_with(Vector2::zeros(), Vector2::zeros(), FRAC_PI_2);
        assert!(FindMatch::new(b).execute(&board).unwrap().is_none());
    }

    #[test]
    fn no_shared_vertex_no_match() {
        let mut board = Board::default();
        MakePiece::new(tile(0.0, 0.0)).with_rotation(0.0).execute(&mut board).unwrap();
        let far = MakePiece::new(tile(100.0, 100.0))
            .with_rotation(0.0)
            .execute(&mut board)
            .unwrap();
        assert!(FindMatch::new(far).execute(&board).unwrap().is_none());
    }

    #[test]
    fn first_registered_candidate_wins() {
        let mut board = Board::default();
        // Two candidates share vertex (10, 0) with the mover; the first one
        // in the registry is farther away but still in reach.
        let far = MakePiece::new(tile(0.0, 0.0))
            .with_rotation(0.0)
            .with_position(Vector2::new(-30.0, 0.0))
            .execute(&mut board)
            .unwrap();
        let _near = MakePiece::new(tile(10.0, -10.0))
            .with_rotation(0.0)
            .execute(&mut board)
            .unwrap();
        let mover = MakePiece::new(tile(10.0, 0.0))
            .with_rotation(0.0)
            .execute(&mut board)
            .unwrap();
        let m = FindMatch::new(mover).execute(&board).unwrap().unwrap();
        assert_eq!(m.other, far);
    }

    #[test]
    fn solved_placement_has_zero_offset() {
        let (board, _, b) = board_with(Vector2::zeros(), Vector2::zeros(), 0.0);
        let m = FindMatch::new(b).execute(&board).unwrap().unwrap();
        assert_relative_eq!(m.offset, Vector2::zeros(), epsilon = 1e-9);
    }
}
