/// Opaque token for render resources owned by the presentation layer.
///
/// The core never dereferences it; it only hands it back through
/// [`BoardEvent::Released`](crate::board::BoardEvent::Released) when the
/// owning piece is disposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderHandle(pub u64);

/// Data specific to a leaf piece.
#[derive(Debug, Clone)]
pub struct PieceData {
    /// Stable number used for debugging and labeling.
    pub label: u32,
    /// Geometry/material handle owned by the renderer, if any.
    pub handle: Option<RenderHandle>,
}

impl PieceData {
    #[must_use]
    pub fn new(label: u32, handle: Option<RenderHandle>) -> Self {
        Self { label, handle }
    }
}
