use tracing::debug;

use crate::board::{Board, BoardEvent};
use crate::entity::{EntityId, EntityKind};
use crate::error::Result;

/// Removes an entity from the board and releases its render resources.
///
/// Disposing a group disposes all its members. Disposing a member detaches
/// it from its group; a group left without members is disposed as well.
/// Disposing an entity that is already gone does nothing.
pub struct Dispose {
    entity: EntityId,
}

impl Dispose {
    /// Creates a new `Dispose` operation.
    #[must_use]
    pub fn new(entity: EntityId) -> Self {
        Self { entity }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if a member's parent group is missing.
    pub fn execute(&self, board: &mut Board) -> Result<()> {
        if !board.contains(self.entity) {
            return Ok(());
        }

        let mut emptied_parent = None;
        let parent = board.entity(self.entity)?.parent();
        if let Some(parent_id) = parent {
            if let EntityKind::Group(g) = &mut board.entity_mut(parent_id)?.kind {
                g.children.retain(|c| *c != self.entity);
                if g.children.is_empty() {
                    emptied_parent = Some(parent_id);
                }
            }
        }

        board.unregister(self.entity);
        let mut stack = vec![self.entity];
        while let Some(id) = stack.pop() {
            let Some(entity) = board.remove(id) else {
                continue;
            };
            match entity.kind {
                EntityKind::Piece(p) => {
                    if let Some(handle) = p.handle {
                        board.emit(BoardEvent::Released(handle));
                    }
                }
                EntityKind::Group(g) => stack.extend(g.children),
            }
            debug!(?id, "disposed");
        }

        if let Some(parent_id) = emptied_parent {
            Dispose::new(parent_id).execute(board)?;
        }
        board.debug_check();
        Ok(())
    }
}
