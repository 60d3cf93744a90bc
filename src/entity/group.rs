use super::EntityId;

/// Data specific to a composite group.
///
/// Children are always pieces; groups are flattened on merge and never
/// nest.
#[derive(Debug, Clone)]
pub struct GroupData {
    /// The member pieces, in absorption order.
    pub children: Vec<EntityId>,
}

impl GroupData {
    #[must_use]
    pub fn new(children: Vec<EntityId>) -> Self {
        Self { children }
    }
}
