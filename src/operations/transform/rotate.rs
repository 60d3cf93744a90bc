use tracing::warn;

use crate::board::Board;
use crate::entity::EntityId;
use crate::error::Result;
use crate::math::RotateDirection;

/// Steps a top-level entity to the adjacent angle of the rotation set.
pub struct Rotate {
    entity: EntityId,
    direction: RotateDirection,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    #[must_use]
    pub fn new(entity: EntityId, direction: RotateDirection) -> Self {
        Self { entity, direction }
    }

    /// Executes the rotation, modifying the entity in place.
    ///
    /// An entity whose current angle is not in the set is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is missing or is a group member.
    pub fn execute(&self, board: &mut Board) -> Result<()> {
        let current = board.top_level(self.entity)?.rotation();
        let Some(next) = board.config().rotations.step(current, self.direction) else {
            warn!(entity = ?self.entity, current, "rotation not in set, ignoring");
            return Ok(());
        };
        board.top_level_mut(self.entity)?.rotation = next;
        Ok(())
    }
}
