use crate::graph::{LayoutStore, ShapeData};
use crate::math::polygon_2d::{polygon_area, polygon_perimeter};

use super::SampleCycle;

/// Refreshes a stored shape against the live graph.
///
/// Node positions are re-resolved and area/perimeter recomputed from a
/// fresh sampling; cached values in the input are never trusted, so node
/// moves and edge re-curving are always reflected. Material and quantity
/// carry over. Dangling node ids drop out of the snapshot, and a shape
/// reduced below 3 effective points reports zero area and perimeter.
pub struct RebuildShape<'a> {
    shape: &'a ShapeData,
}

impl<'a> RebuildShape<'a> {
    /// Creates a rebuild of one stored shape.
    #[must_use]
    pub fn new(shape: &'a ShapeData) -> Self {
        Self { shape }
    }

    /// Executes the rebuild, returning the refreshed record.
    #[must_use]
    pub fn execute(&self, store: &LayoutStore) -> ShapeData {
        let document = self.shape.document;
        let points = SampleCycle::new(&self.shape.nodes).execute(store, document);
        let node_points = self
            .shape
            .nodes
            .iter()
            .filter_map(|&id| store.get_node(id))
            .map(|node| node.position)
            .collect();

        let mut rebuilt = ShapeData::new(
            document,
            self.shape.nodes.clone(),
            node_points,
            polygon_area(&points),
            polygon_perimeter(&points),
        )
        .with_quantity(self.shape.quantity);
        rebuilt.material = self.shape.material;
        rebuilt
    }
}
