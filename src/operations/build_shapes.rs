use crate::graph::{DocumentId, LayoutStore, ShapeData};
use crate::math::polygon_2d::{polygon_area, polygon_perimeter};

use super::filter_contained::{filter_contained, ShapeCandidate};
use super::{EnumerateCycles, SampleCycle};

/// Rebuilds a document's panel set from its current graph.
///
/// Enumerates all elementary cycles, samples each boundary, computes
/// area and perimeter, drops spurious enclosing loops and returns the
/// surviving panels as fresh [`ShapeData`] records (quantity 1, no
/// material). The caller replaces the document's stored shapes with the
/// result wholesale — see [`LayoutStore::replace_shapes`].
///
/// Pure request/response: the operation keeps no state between calls.
pub struct BuildShapes {
    document: DocumentId,
    cycle_limit: Option<usize>,
}

impl BuildShapes {
    /// Creates a new shape rebuild for a document.
    #[must_use]
    pub fn new(document: DocumentId) -> Self {
        Self {
            document,
            cycle_limit: None,
        }
    }

    /// Caps cycle enumeration; see [`EnumerateCycles::with_cycle_limit`].
    #[must_use]
    pub fn with_cycle_limit(mut self, limit: usize) -> Self {
        self.cycle_limit = Some(limit);
        self
    }

    /// Executes the rebuild.
    #[must_use]
    pub fn execute(&self, store: &LayoutStore) -> Vec<ShapeData> {
        let mut enumerate = EnumerateCycles::new();
        if let Some(limit) = self.cycle_limit {
            enumerate = enumerate.with_cycle_limit(limit);
        }

        let candidates: Vec<ShapeCandidate> = enumerate
            .execute(store, self.document)
            .into_iter()
            .map(|cycle| {
                let points = SampleCycle::new(cycle.nodes()).execute(store, self.document);
                let area_cm2 = polygon_area(&points);
                let perimeter_cm = polygon_perimeter(&points);
                ShapeCandidate {
                    cycle,
                    points,
                    area_cm2,
                    perimeter_cm,
                }
            })
            .collect();

        filter_contained(candidates)
            .into_iter()
            .map(|candidate| {
                let nodes = candidate.cycle.into_nodes();
                let node_points = nodes
                    .iter()
                    .filter_map(|&id| store.get_node(id))
                    .map(|node| node.position)
                    .collect();
                ShapeData::new(
                    self.document,
                    nodes,
                    node_points,
                    candidate.area_cm2,
                    candidate.perimeter_cm,
                )
            })
            .collect()
    }
}
