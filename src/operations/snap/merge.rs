use tracing::debug;

use crate::board::{Board, BoardEvent};
use crate::entity::{Entity, EntityId, EntityKind, GroupData};
use crate::error::{OperationError, Result};
use crate::math::rotation::same_angle;
use crate::math::vertex_2d::extend_unique;
use crate::math::{rotate_vector, Aabb2, Point2};
use crate::operations::query::{Pose, WorldPose};

/// Joins two top-level entities into a new group.
///
/// Operand groups are dissolved: their member pieces are lifted out with
/// their world poses and re-owned by the new group, so groups never nest.
/// The old operand groups are discarded; operand pieces become members.
/// Render resources move with the pieces and nothing is released.
pub struct Merge {
    moved: EntityId,
    other: EntityId,
}

/// One operand's contribution, captured before the board is mutated.
struct Operand {
    id: EntityId,
    rotation: f64,
    init_verts: Vec<Point2>,
    cur_verts: Vec<Point2>,
    members: Vec<(EntityId, Pose)>,
}

impl Merge {
    /// Creates a new `Merge` operation.
    #[must_use]
    pub fn new(moved: EntityId, other: EntityId) -> Self {
        Self { moved, other }
    }

    /// Executes the merge, returning the new group's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the operands are the same entity, if either is
    /// missing or not top-level, if their rotations differ, or if the
    /// merged boundary is empty.
    pub fn execute(&self, board: &mut Board) -> Result<EntityId> {
        if self.moved == self.other {
            return Err(
                OperationError::InvalidInput("cannot merge an entity with itself".into()).into(),
            );
        }
        let operands = [
            collect_operand(board, self.moved)?,
            collect_operand(board, self.other)?,
        ];
        if !same_angle(operands[0].rotation, operands[1].rotation) {
            return Err(OperationError::InvalidInput(format!(
                "cannot merge entities at rotations {} and {}",
                operands[0].rotation, operands[1].rotation
            ))
            .into());
        }

        let tol = board.config().vertex_tolerance;
        let mut init_verts = Vec::new();
        let mut cur_verts = Vec::new();
        for op in &operands {
            extend_unique(&mut init_verts, &op.init_verts, tol);
            extend_unique(&mut cur_verts, &op.cur_verts, tol);
        }
        #[allow(clippy::cast_precision_loss)]
        let rotation = operands.iter().map(|op| op.rotation).sum::<f64>() / operands.len() as f64;
        let pivot = Aabb2::from_points(&cur_verts)?.center();

        let members: Vec<(EntityId, Pose)> = operands
            .iter()
            .flat_map(|op| op.members.iter().copied())
            .collect();
        let mut group = Entity::group(
            init_verts,
            GroupData::new(members.iter().map(|(id, _)| *id).collect()),
            board.config().group_connection_distance,
            rotation,
        )?;
        group.position = pivot - group.home();

        for op in &operands {
            board.unregister(op.id);
            if board.entity(op.id)?.is_group() {
                board.remove(op.id);
            }
        }
        let group_id = board.register_new(group);

        for (id, pose) in &members {
            let member = board.entity_mut(*id)?;
            member.position = rotate_vector(pose.pivot - pivot, -rotation);
            debug_assert!(
                same_angle(pose.rotation, rotation),
                "member rotation differs from group rotation"
            );
            member.rotation = 0.0;
            member.parent = Some(group_id);
        }

        board.emit(BoardEvent::Merged {
            group: group_id,
            operands: [self.moved, self.other],
        });
        board.debug_check();
        debug!(
            group = ?group_id,
            members = members.len(),
            verts = board.entity(group_id)?.init_verts().len(),
            "entities merged"
        );
        Ok(group_id)
    }
}

/// Flattens one operand into its member pieces with world poses.
fn collect_operand(board: &Board, id: EntityId) -> Result<Operand> {
    let entity = board.top_level(id)?;
    let members: Vec<(EntityId, Pose)> = match entity.kind() {
        EntityKind::Piece(_) => vec![(id, WorldPose::new(id).execute(board)?)],
        EntityKind::Group(g) => g
            .children
            .iter()
            .map(|&child| -> Result<(EntityId, Pose)> {
                Ok((child, WorldPose::new(child).execute(board)?))
            })
            .collect::<Result<_>>()?,
    };
    Ok(Operand {
        id,
        rotation: entity.rotation(),
        init_verts: entity.init_verts().to_vec(),
        cur_verts: entity.current_vertices(),
        members,
    })
}
