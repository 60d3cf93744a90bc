use rand::Rng;
use tracing::debug;

use crate::board::Board;
use crate::entity::{Entity, EntityId, PieceData, RenderHandle};
use crate::error::{GeometryError, Result, RotationError};
use crate::math::vertex_2d::quantize;
use crate::math::{Point2, Vector2};

/// Creates a piece from its boundary vertices and registers it.
///
/// Vertices are rounded to four decimal places and exact repeats dropped
/// before normalization, so pieces cut from the same boundary share
/// bit-identical vertices.
pub struct MakePiece {
    verts: Vec<Point2>,
    label: u32,
    handle: Option<RenderHandle>,
    rotation: Option<f64>,
    position: Vector2,
}

impl MakePiece {
    /// Creates a new `MakePiece` operation.
    #[must_use]
    pub fn new(verts: Vec<Point2>) -> Self {
        Self {
            verts,
            label: 0,
            handle: None,
            rotation: None,
            position: Vector2::zeros(),
        }
    }

    /// Sets the debugging label.
    #[must_use]
    pub fn with_label(mut self, label: u32) -> Self {
        self.label = label;
        self
    }

    /// Attaches the renderer's handle for this piece.
    #[must_use]
    pub fn with_handle(mut self, handle: RenderHandle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Uses a fixed starting rotation instead of a random one.
    #[must_use]
    pub fn with_rotation(mut self, angle: f64) -> Self {
        self.rotation = Some(angle);
        self
    }

    /// Starts the piece displaced from its solved placement.
    #[must_use]
    pub fn with_position(mut self, position: Vector2) -> Self {
        self.position = position;
        self
    }

    /// Executes the operation, creating the piece on the board.
    ///
    /// Without an explicit rotation the piece gets a random member of the
    /// board's rotation set, or the set's first member when rotation is
    /// disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if no vertices were given, if any vertex is not
    /// finite, or if the requested rotation is not in the board's rotation set.
    pub fn execute(&self, board: &mut Board) -> Result<EntityId> {
        let verts = quantize(&self.verts);
        if verts.is_empty() {
            return Err(GeometryError::EmptyVertexSet.into());
        }
        if let Some(bad) = verts.iter().find(|v| !(v.x.is_finite() && v.y.is_finite())) {
            return Err(GeometryError::Degenerate(format!("non-finite vertex {bad}")).into());
        }

        let rotation = self.pick_rotation(board)?;
        let distance = board.config().piece_connection_distance;
        let mut entity = Entity::piece(
            verts,
            PieceData::new(self.label, self.handle),
            distance,
            rotation,
        )?;
        entity.position = self.position;

        let id = board.register_new(entity);
        debug!(?id, label = self.label, rotation, "piece created");
        Ok(id)
    }

    fn pick_rotation(&self, board: &mut Board) -> Result<f64> {
        let set = board.config().rotations.clone();
        match self.rotation {
            Some(angle) => set
                .index_of(angle)
                .map(|i| set.get(i))
                .ok_or_else(|| RotationError::NotInSet(angle).into()),
            None if board.config().allow_rotation => {
                let i = board.rng().random_range(0..set.len());
                Ok(set.get(i))
            }
            None => Ok(set.get(0)),
        }
    }
}
