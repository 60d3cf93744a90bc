use crate::board::Board;
use crate::entity::EntityId;
use crate::error::Result;
use crate::math::Vector2;

/// Moves a top-level entity, as a drag does.
pub struct Translate {
    entity: EntityId,
    target: Target,
}

enum Target {
    By(Vector2),
    To(Vector2),
}

impl Translate {
    /// Creates a new `Translate` operation that offsets the position.
    #[must_use]
    pub fn new(entity: EntityId, displacement: Vector2) -> Self {
        Self {
            entity,
            target: Target::By(displacement),
        }
    }

    /// Creates a `Translate` operation that sets the position outright.
    #[must_use]
    pub fn to(entity: EntityId, position: Vector2) -> Self {
        Self {
            entity,
            target: Target::To(position),
        }
    }

    /// Executes the translation.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is missing or is a group member.
    pub fn execute(&self, board: &mut Board) -> Result<()> {
        let entity = board.top_level_mut(self.entity)?;
        entity.position = match self.target {
            Target::By(d) => entity.position + d,
            Target::To(p) => p,
        };
        Ok(())
    }
}
