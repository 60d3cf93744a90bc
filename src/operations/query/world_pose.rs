use crate::board::Board;
use crate::entity::EntityId;
use crate::error::Result;
use crate::math::{rotate_vector, Point2};

/// World-space placement of an entity's pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub pivot: Point2,
    pub rotation: f64,
}

/// Composes the parent group's transform into an entity.
///
/// A top-level entity's pose is its own pivot and rotation. A group
/// member's pose is its local pivot offset rotated into the group's frame.
pub struct WorldPose {
    entity: EntityId,
}

impl WorldPose {
    /// Creates a new `WorldPose` query.
    #[must_use]
    pub fn new(entity: EntityId) -> Self {
        Self { entity }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity or its parent is missing.
    pub fn execute(&self, board: &Board) -> Result<Pose> {
        let entity = board.entity(self.entity)?;
        let Some(parent_id) = entity.parent() else {
            return Ok(Pose {
                pivot: entity.pivot(),
                rotation: entity.rotation(),
            });
        };
        let parent = board.entity(parent_id)?;
        debug_assert!(parent.parent().is_none(), "nested group");
        Ok(Pose {
            pivot: parent.pivot() + rotate_vector(entity.position(), parent.rotation()),
            rotation: parent.rotation() + entity.rotation(),
        })
    }
}
