//! Geometry core for drag-and-snap jigsaw puzzles.
//!
//! Pieces and groups live on a [`Board`](board::Board). Operations in
//! [`operations`] create, move, rotate, snap, merge and dispose them; the
//! board queues [`BoardEvent`](board::BoardEvent)s for whatever renders it.

pub mod board;
pub mod entity;
pub mod error;
pub mod math;
pub mod operations;

pub use error::{Result, SnapfitError};
