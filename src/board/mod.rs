pub mod config;
pub mod event;

pub use config::BoardConfig;
pub use event::BoardEvent;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slotmap::SlotMap;

use crate::entity::{Entity, EntityId, EntityKind};
use crate::error::{BoardError, Result};
use crate::operations::dispose::Dispose;

/// Central arena that owns every entity, plus the scene registry.
///
/// The registry is the ordered list of independent, top-level entities.
/// Group members live in the arena but are never registered; only their
/// group is. Entities reference each other through [`EntityId`]s.
#[derive(Debug)]
pub struct Board {
    entities: SlotMap<EntityId, Entity>,
    registry: Vec<EntityId>,
    config: BoardConfig,
    rng: StdRng,
    events: Vec<BoardEvent>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            entities: SlotMap::with_key(),
            registry: Vec::new(),
            config,
            rng: StdRng::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the entity, or an error if it no longer exists.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::EntityNotFound` if the entity is not on the board.
    pub fn entity(&self, id: EntityId) -> Result<&Entity> {
        self.entities
            .get(id)
            .ok_or_else(|| BoardError::EntityNotFound(format!("{id:?}")).into())
    }

    pub(crate) fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity> {
        self.entities
            .get_mut(id)
            .ok_or_else(|| BoardError::EntityNotFound(format!("{id:?}")).into())
    }

    /// Returns the entity if it is registered at top level.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::EntityNotFound` if the entity does not exist, or
    /// `BoardError::NotTopLevel` if it is a group member.
    pub fn top_level(&self, id: EntityId) -> Result<&Entity> {
        let entity = self.entity(id)?;
        if entity.parent.is_some() || !self.is_registered(id) {
            return Err(BoardError::NotTopLevel.into());
        }
        Ok(entity)
    }

    pub(crate) fn top_level_mut(&mut self, id: EntityId) -> Result<&mut Entity> {
        self.top_level(id)?;
        self.entity_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Top-level entities in registry order.
    #[must_use]
    pub fn registry(&self) -> &[EntityId] {
        &self.registry
    }

    #[must_use]
    pub fn is_registered(&self, id: EntityId) -> bool {
        self.registry.contains(&id)
    }

    /// Number of live pieces, grouped or not.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.entities
            .values()
            .filter(|e| matches!(e.kind, EntityKind::Piece(_)))
            .count()
    }

    /// `true` once every piece has been joined into a single entity.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.piece_count() > 0 && self.registry.len() == 1
    }

    /// Disposes every registered entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is internally inconsistent.
    pub fn clear(&mut self) -> Result<()> {
        for id in self.registry.clone() {
            Dispose::new(id).execute(self)?;
        }
        Ok(())
    }

    /// Takes all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    /// Inserts an entity and registers it at top level.
    pub(crate) fn register_new(&mut self, entity: Entity) -> EntityId {
        let id = self.entities.insert(entity);
        self.registry.push(id);
        self.events.push(BoardEvent::Added(id));
        id
    }

    /// Removes an entity from the registry, keeping it in the arena.
    pub(crate) fn unregister(&mut self, id: EntityId) {
        if let Some(i) = self.registry.iter().position(|r| *r == id) {
            self.registry.remove(i);
            self.events.push(BoardEvent::Removed(id));
        }
    }

    /// Drops an entity from the arena.
    pub(crate) fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(id)
    }

    pub(crate) fn emit(&mut self, event: BoardEvent) {
        self.events.push(event);
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Checks the structural invariants in debug builds.
    pub(crate) fn debug_check(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for &id in &self.registry {
            debug_assert!(
                self.entities.get(id).is_some_and(|e| e.parent.is_none()),
                "registered entity must exist and have no parent"
            );
        }
        for (id, entity) in &self.entities {
            if let EntityKind::Group(g) = &entity.kind {
                debug_assert!(!g.children.is_empty(), "group without children");
                debug_assert!(entity.parent.is_none(), "nested group");
                for &child in &g.children {
                    debug_assert!(
                        self.entities
                            .get(child)
                            .is_some_and(|c| !c.is_group() && c.parent == Some(id)),
                        "group member must be a piece owned by the group"
                    );
                    debug_assert!(!self.registry.contains(&child), "registered member");
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
