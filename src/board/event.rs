use crate::entity::{EntityId, RenderHandle};

/// Change notifications for the presentation layer.
///
/// The board queues these as it mutates; a renderer drains them with
/// [`Board::drain_events`](super::Board::drain_events) and reacts
/// (adding or removing meshes, highlighting, sound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// An entity joined the registry.
    Added(EntityId),
    /// An entity left the registry.
    Removed(EntityId),
    /// Two entities snapped together into `group`.
    Merged {
        group: EntityId,
        operands: [EntityId; 2],
    },
    /// Render resources of a disposed piece may be freed.
    Released(RenderHandle),
}
