use crate::math::Point2;

use super::document::DocumentId;

slotmap::new_key_type! {
    /// Unique identifier for a node in the layout store.
    pub struct NodeId;
}

/// Data associated with a layout node: a 2D point on the board.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// The owning document.
    pub document: DocumentId,
    /// Position on the board, in centimeters.
    pub position: Point2,
}

impl NodeData {
    /// Creates a new node at the given position.
    #[must_use]
    pub fn new(document: DocumentId, position: Point2) -> Self {
        Self { document, position }
    }
}
