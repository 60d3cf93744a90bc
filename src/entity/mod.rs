pub mod group;
pub mod piece;

pub use group::GroupData;
pub use piece::{PieceData, RenderHandle};

use crate::error::{BoardError, Result};
use crate::math::{Bounds, NormalizedShape, Point2, Vector2};

slotmap::new_key_type! {
    /// Unique identifier for an entity on the board.
    pub struct EntityId;
}

/// Variant-specific part of an entity.
#[derive(Debug, Clone)]
pub enum EntityKind {
    Piece(PieceData),
    Group(GroupData),
}

/// A movable, rotatable unit: either a single piece or a group of pieces.
///
/// The boundary (`init_verts`) and its normalization are fixed at
/// construction. Only `position` and `rotation` change afterwards, and the
/// current vertices are always derived from them.
///
/// For a top-level entity, `position` is the translation away from the
/// solved placement, so the rotation pivot sits at `home + position`. For
/// a group member, `position` is the pivot offset inside the parent's
/// rotated frame and `rotation` is relative to the parent.
#[derive(Debug, Clone)]
pub struct Entity {
    init_verts: Vec<Point2>,
    shape: NormalizedShape,
    pub(crate) position: Vector2,
    pub(crate) rotation: f64,
    connection_distance: Vector2,
    pub(crate) parent: Option<EntityId>,
    pub(crate) kind: EntityKind,
}

impl Entity {
    /// Creates a piece from its boundary vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if `init_verts` is empty.
    pub fn piece(
        init_verts: Vec<Point2>,
        data: PieceData,
        connection_distance: Vector2,
        rotation: f64,
    ) -> Result<Self> {
        Self::with_kind(
            init_verts,
            EntityKind::Piece(data),
            connection_distance,
            rotation,
        )
    }

    /// Creates a group over already-merged boundary vertices.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::EmptyGroup` if `data` has no children, or an
    /// error if `init_verts` is empty.
    pub(crate) fn group(
        init_verts: Vec<Point2>,
        data: GroupData,
        connection_distance: Vector2,
        rotation: f64,
    ) -> Result<Self> {
        if data.children.is_empty() {
            return Err(BoardError::EmptyGroup.into());
        }
        Self::with_kind(
            init_verts,
            EntityKind::Group(data),
            connection_distance,
            rotation,
        )
    }

    fn with_kind(
        init_verts: Vec<Point2>,
        kind: EntityKind,
        connection_distance: Vector2,
        rotation: f64,
    ) -> Result<Self> {
        let shape = NormalizedShape::from_vertices(&init_verts)?;
        Ok(Self {
            init_verts,
            shape,
            position: Vector2::zeros(),
            rotation,
            connection_distance,
            parent: None,
            kind,
        })
    }

    /// Boundary vertices in the solved frame.
    #[must_use]
    pub fn init_verts(&self) -> &[Point2] {
        &self.init_verts
    }

    /// Boundary vertices normalized to `[-0.5, 0.5]`.
    #[must_use]
    pub fn normalized_init_verts(&self) -> &[Point2] {
        &self.shape.verts
    }

    #[must_use]
    pub fn x_bounds(&self) -> Bounds {
        self.shape.x_bounds
    }

    #[must_use]
    pub fn y_bounds(&self) -> Bounds {
        self.shape.y_bounds
    }

    #[must_use]
    pub fn shape(&self) -> &NormalizedShape {
        &self.shape
    }

    #[must_use]
    pub fn position(&self) -> Vector2 {
        self.position
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Per-axis distance within which a shared vertex snaps.
    #[must_use]
    pub fn connection_distance(&self) -> Vector2 {
        self.connection_distance
    }

    /// Centre of the normalization box in the solved frame.
    #[must_use]
    pub fn home(&self) -> Point2 {
        self.shape.home()
    }

    /// Point the entity rotates about: `home + position`.
    #[must_use]
    pub fn pivot(&self) -> Point2 {
        self.home() + self.position
    }

    /// The group this entity belongs to, if any.
    #[must_use]
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    #[must_use]
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self.kind, EntityKind::Group(_))
    }

    /// Member pieces, or `None` for a piece.
    #[must_use]
    pub fn children(&self) -> Option<&[EntityId]> {
        match &self.kind {
            EntityKind::Group(g) => Some(&g.children),
            EntityKind::Piece(_) => None,
        }
    }

    /// Current vertices from the normalized shape, position and rotation.
    ///
    /// Only meaningful for top-level entities; members go through
    /// [`CurrentVertices`](crate::operations::query::CurrentVertices).
    #[must_use]
    pub fn current_vertices(&self) -> Vec<Point2> {
        self.shape.place(self.pivot(), self.rotation)
    }
}
