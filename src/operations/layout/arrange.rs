use crate::board::Board;
use crate::entity::EntityId;
use crate::error::{OperationError, Result};
use crate::math::{Point2, Vector2};
use crate::operations::query::Extent;

/// Lays out every top-level entity in rows, groups first.
///
/// Entities are placed left to right with their bounding boxes' minimum
/// corners on the row cursor, wrapping when a row would exceed the
/// available width. Loose pieces start one spacing below the groups.
pub struct Arrange {
    available_width: f64,
    spacing: f64,
}

impl Arrange {
    /// Creates a new `Arrange` operation.
    #[must_use]
    pub fn new(available_width: f64, spacing: f64) -> Self {
        Self {
            available_width,
            spacing,
        }
    }

    /// Executes the layout, returning the y coordinate below the last row.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the width or spacing is
    /// negative or not finite.
    pub fn execute(&self, board: &mut Board) -> Result<f64> {
        for (name, v) in [("width", self.available_width), ("spacing", self.spacing)] {
            if !v.is_finite() || v < 0.0 {
                return Err(OperationError::InvalidInput(format!("{name} = {v}")).into());
            }
        }

        let (groups, pieces): (Vec<EntityId>, Vec<EntityId>) = board
            .registry()
            .iter()
            .copied()
            .partition(|&id| board.entity(id).is_ok_and(|e| e.is_group()));

        let below_groups = self.place_rows(board, &groups, 0.0)?;
        if pieces.is_empty() {
            return Ok(below_groups);
        }
        self.place_rows(board, &pieces, below_groups + self.spacing)
    }

    fn place_rows(&self, board: &mut Board, ids: &[EntityId], start_y: f64) -> Result<f64> {
        let mut cursor = Point2::new(0.0, start_y);
        let mut row_height: f64 = 0.0;
        for &id in ids {
            let bb = Extent::new(id).execute(board)?;
            let size = bb.size();
            if cursor.x > 0.0 && cursor.x + size.x > self.available_width {
                cursor = Point2::new(0.0, cursor.y + row_height + self.spacing);
                row_height = 0.0;
            }
            let shift: Vector2 = cursor - bb.min();
            board.top_level_mut(id)?.position += shift;
            cursor.x += size.x + self.spacing;
            row_height = row_height.max(size.y);
        }
        Ok(cursor.y + row_height)
    }
}
