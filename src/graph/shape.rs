use crate::math::Point2;

use super::document::DocumentId;
use super::node::NodeId;

slotmap::new_key_type! {
    /// Unique identifier for a shape in the layout store.
    pub struct ShapeId;
}

slotmap::new_key_type! {
    /// Identifier for a material, owned by the estimation collaborator.
    pub struct MaterialId;
}

/// A panel extracted from the layout graph.
///
/// Shapes reference nodes by id only (weak references): node ids may
/// dangle after graph edits, in which case the missing points are simply
/// skipped on the next rebuild. `node_points` is the snapshot of resolved
/// node positions taken when the shape was (re)built.
#[derive(Debug, Clone)]
pub struct ShapeData {
    /// The owning document.
    pub document: DocumentId,
    /// Material assigned to the panel, if any.
    pub material: Option<MaterialId>,
    /// Number of identical panels to cut.
    pub quantity: u32,
    /// The boundary cycle's node-id sequence.
    pub nodes: Vec<NodeId>,
    /// Resolved node positions at build time, in centimeters.
    pub node_points: Vec<Point2>,
    /// Enclosed area in cm².
    pub area_cm2: f64,
    /// Boundary perimeter in cm.
    pub perimeter_cm: f64,
}

impl ShapeData {
    /// Creates a shape record with quantity 1 and no material.
    #[must_use]
    pub fn new(
        document: DocumentId,
        nodes: Vec<NodeId>,
        node_points: Vec<Point2>,
        area_cm2: f64,
        perimeter_cm: f64,
    ) -> Self {
        Self {
            document,
            material: None,
            quantity: 1,
            nodes,
            node_points,
            area_cm2,
            perimeter_cm,
        }
    }

    /// Assigns a material to the panel.
    #[must_use]
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    /// Sets the panel quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}
