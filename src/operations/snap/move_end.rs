use tracing::debug;

use super::{FindMatch, Merge};
use crate::board::Board;
use crate::entity::EntityId;
use crate::error::Result;

/// Handles the end of a drag: snap to the first entity in reach and merge.
///
/// At most one merge happens per call. Taking `&mut Board` for the whole
/// call keeps the scan, the snap and the merge from interleaving with any
/// other mutation.
pub struct MoveEnd {
    entity: EntityId,
}

impl MoveEnd {
    /// Creates a new `MoveEnd` operation for the entity that was dropped.
    #[must_use]
    pub fn new(entity: EntityId) -> Self {
        Self { entity }
    }

    /// Executes the operation.
    ///
    /// Returns the new group when a merge happened, or `None` when the
    /// entity stays where it was dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is missing or is a group member.
    pub fn execute(&self, board: &mut Board) -> Result<Option<EntityId>> {
        let Some(found) = FindMatch::new(self.entity).execute(board)? else {
            return Ok(None);
        };

        board.top_level_mut(self.entity)?.position -= found.offset;
        debug!(
            entity = ?self.entity,
            other = ?found.other,
            dx = found.offset.x,
            dy = found.offset.y,
            "snapped"
        );

        Merge::new(self.entity, found.other).execute(board).map(Some)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::board::BoardEvent;
    use crate::math::{Point2, RotateDirection, Vector2};
    use crate::operations::creation::MakePiece;
    use crate::operations::dispose::Dispose;
    use crate::operations::query::CurrentVertices;
    use crate::operations::transform::{Rotate, Translate};

    fn tile(x0: f64, y0: f64) -> Vec<Point2> {
        vec![
            Point2::new(x0, y0),
            Point2::new(x0 + 10.0, y0),
            Point2::new(x0 + 10.0, y0 + 10.0),
            Point2::new(x0, y0 + 10.0),
        ]
    }

    fn piece(board: &mut Board, x0: f64, y0: f64, rotation: f64) -> EntityId {
        MakePiece::new(tile(x0, y0))
            .with_rotation(rotation)
            .execute(board)
            .unwrap()
    }

    #[test]
    fn drop_near_neighbour_forms_group() {
        let mut board = Board::default();
        let p1 = piece(&mut board, 0.0, 0.0, 0.0);
        let p2 = piece(&mut board, 10.0, 0.0, 0.0);
        Translate::to(p2, Vector2::new(200.0, 90.0)).execute(&mut board).unwrap();
        assert!(MoveEnd::new(p2).execute(&mut board).unwrap().is_none());
        assert_eq!(board.registry().len(), 2);

        // Drag p2 so its (10, 0) corner lands a little off p1's.
        Translate::to(p2, Vector2::new(3.0, -2.5)).execute(&mut board).unwrap();
        let g = MoveEnd::new(p2).execute(&mut board).unwrap().unwrap();

        assert_eq!(board.registry(), &[g]);
        let children = board.entity(g).unwrap().children().unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.contains(&p1) && children.contains(&p2));

        // p2 was snapped exactly onto p1.
        let v1 = CurrentVertices::new(p1).execute(&board).unwrap();
        let v2 = CurrentVertices::new(p2).execute(&board).unwrap();
        assert_relative_eq!(v2[0], v1[1], epsilon = 1e-9);
        assert_relative_eq!(v2[0], Point2::new(10.0, 0.0), epsilon = 1e-9);
        assert!(board.is_solved());
    }

    #[test]
    fn different_rotation_never_merges() {
        let mut board = Board::default();
        piece(&mut board, 0.0, 0.0, 0.0);
        let p2 = piece(&mut board, 10.0, 0.0, FRAC_PI_2);
        for pos in [Vector2::zeros(), Vector2::new(1.0, 1.0), Vector2::new(-5.0, 0.0)] {
            Translate::to(p2, pos).execute(&mut board).unwrap();
            assert!(MoveEnd::new(p2).execute(&mut board).unwrap().is_none());
        }
        assert_eq!(board.registry().len(), 2);
    }

    #[test]
    fn tolerance_boundary() {
        for (dx, merges) in [(39.9, true), (40.1, false)] {
            let mut board = Board::default();
            piece(&mut board, 0.0, 0.0, 0.0);
            let p2 = piece(&mut board, 10.0, 0.0, 0.0);
            Translate::to(p2, Vector2::new(dx, 0.0)).execute(&mut board).unwrap();
            let merged = MoveEnd::new(p2).execute(&mut board).unwrap();
            assert_eq!(merged.is_some(), merges, "offset {dx}");
        }
    }

    #[test]
    fn one_merge_per_drop() {
        let mut board = Board::default();
        let left = piece(&mut board, 0.0, 0.0, 0.0);
        let right = piece(&mut board, 20.0, 0.0, 0.0);
        let middle = piece(&mut board, 10.0, 0.0, 0.0);
        let g = MoveEnd::new(middle).execute(&mut board).unwrap().unwrap();

        assert_eq!(board.registry().len(), 2);
        let children = board.entity(g).unwrap().children().unwrap();
        assert_eq!(children, &[middle, left]);
        assert!(board.is_registered(right));

        // A second drop picks up the remaining neighbour.
        let g2 = MoveEnd::new(g).execute(&mut board).unwrap().unwrap();
        assert_eq!(board.registry(), &[g2]);
        assert_eq!(board.entity(g2).unwrap().children().unwrap().len(), 3);
    }

    #[test]
    fn rotated_pieces_assemble() {
        let mut board = Board::default();
        let p1 = piece(&mut board, 0.0, 0.0, PI);
        let p2 = piece(&mut board, 10.0, 0.0, PI);
        // Under a half turn p2 sits to the left of p1; (10, 0) of p1 is at
        // (0, 10) and p2's (10, 0) at (20, 10) before moving.
        Translate::to(p2, Vector2::new(-19.0, 1.0)).execute(&mut board).unwrap();
        let g = MoveEnd::new(p2).execute(&mut board).unwrap().unwrap();
        let v1 = CurrentVertices::new(p1).execute(&board).unwrap();
        let v2 = CurrentVertices::new(p2).execute(&board).unwrap();
        assert_relative_eq!(v1[1], v2[0], epsilon = 1e-9);
        assert_relative_eq!(v1[2], v2[3], epsilon = 1e-9);

        // The group keeps rotating as one body.
        Rotate::new(g, RotateDirection::Right).execute(&mut board).unwrap();
        let v1 = CurrentVertices::new(p1).execute(&board).unwrap();
        let v2 = CurrentVertices::new(p2).execute(&board).unwrap();
        assert_relative_eq!(v1[1], v2[0], epsilon = 1e-9);
    }

    #[test]
    fn group_snaps_to_piece() {
        let mut board = Board::default();
        let a = piece(&mut board, 0.0, 0.0, 0.0);
        let b = piece(&mut board, 10.0, 0.0, 0.0);
        let c = piece(&mut board, 0.0, 10.0, 0.0);
        Translate::to(c, Vector2::new(300.0, 300.0)).execute(&mut board).unwrap();
        let g = MoveEnd::new(b).execute(&mut board).unwrap().unwrap();

        // Drag the group near c, which is far from home.
        Translate::new(g, Vector2::new(290.0, 295.0)).execute(&mut board).unwrap();
        let g2 = MoveEnd::new(g).execute(&mut board).unwrap().unwrap();
        let children = board.entity(g2).unwrap().children().unwrap();
        assert_eq!(children, &[b, a, c]);
        for &child in children {
            assert!(!board.entity(child).unwrap().is_group());
        }
        let va = CurrentVertices::new(a).execute(&board).unwrap();
        let vc = CurrentVertices::new(c).execute(&board).unwrap();
        assert_relative_eq!(va[3], vc[0], epsilon = 1e-9);
    }

    #[test]
    fn member_cannot_be_dropped() {
        let mut board = Board::default();
        let a = piece(&mut board, 0.0, 0.0, 0.0);
        let b = piece(&mut board, 10.0, 0.0, 0.0);
        MoveEnd::new(b).execute(&mut board).unwrap().unwrap();
        assert!(MoveEnd::new(a).execute(&mut board).is_err());
    }

    #[test]
    fn disposed_entity_is_error() {
        let mut board = Board::default();
        let a = piece(&mut board, 0.0, 0.0, 0.0);
        Dispose::new(a).execute(&mut board).unwrap();
        assert!(MoveEnd::new(a).execute(&mut board).is_err());
    }

    #[test]
    fn merge_events_follow_snap() {
        let mut board = Board::default();
        let a = piece(&mut board, 0.0, 0.0, 0.0);
        let b = piece(&mut board, 10.0, 0.0, 0.0);
        board.drain_events();
        let g = MoveEnd::new(b).execute(&mut board).unwrap().unwrap();
        let events = board.drain_events();
        assert_eq!(events.first(), Some(&BoardEvent::Removed(b)));
        assert_eq!(
            events.last(),
            Some(&BoardEvent::Merged {
                group: g,
                operands: [b, a],
            })
        );
    }

    #[test]
    fn groups_reach_further_than_pieces() {
        let mut board = Board::default();
        let a = piece(&mut board, 0.0, 0.0, 0.0);
        let b = piece(&mut board, 10.0, 0.0, 0.0);
        let g = Merge::new(a, b).execute(&mut board).unwrap();
        let c = piece(&mut board, 20.0, 0.0, 0.0);
        // The shared (20, 0) corners end up 45 apart along x.
        Translate::to(c, Vector2::new(45.0, 0.0)).execute(&mut board).unwrap();

        assert!(MoveEnd::new(c).execute(&mut board).unwrap().is_none());
        assert_eq!(board.registry().len(), 2);

        let g2 = MoveEnd::new(g).execute(&mut board).unwrap().unwrap();
        assert_eq!(board.registry(), &[g2]);
        let va = CurrentVertices::new(a).execute(&board).unwrap();
        assert_relative_eq!(va[0], Point2::new(45.0, 0.0), epsilon = 1e-9);
    }
}
