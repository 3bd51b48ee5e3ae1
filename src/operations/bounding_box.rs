use crate::graph::{DocumentId, LayoutStore, NodeId};
use crate::math::Point2;

use super::SampleCycle;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    /// Width of the box in centimeters.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the box in centimeters.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Computes the axis-aligned bounding box of a cycle's sampled boundary.
///
/// Curved edges are sampled first, so a bulging Bézier widens the box
/// beyond the node hull. Export collaborators use this for page-fit
/// scaling.
pub struct BoundingBox<'a> {
    nodes: &'a [NodeId],
}

impl<'a> BoundingBox<'a> {
    /// Creates a new bounding-box query over a cycle's node sequence.
    #[must_use]
    pub fn new(nodes: &'a [NodeId]) -> Self {
        Self { nodes }
    }

    /// Executes the query. Returns `None` when no points resolve.
    #[must_use]
    pub fn execute(&self, store: &LayoutStore, document: DocumentId) -> Option<Aabb> {
        let points = SampleCycle::new(self.nodes).execute(store, document);
        let first = points.first()?;
        let mut aabb = Aabb {
            min: *first,
            max: *first,
        };
        for point in &points[1..] {
            aabb.min.x = aabb.min.x.min(point.x);
            aabb.min.y = aabb.min.y.min(point.y);
            aabb.max.x = aabb.max.x.max(point.x);
            aabb.max.y = aabb.max.y.max(point.y);
        }
        Some(aabb)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::graph::{CubicControls, DocumentData, EdgeData, NodeData};
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn square_bounds() {
        let mut store = LayoutStore::new();
        let document = store.add_document(DocumentData::new("board"));
        let corners = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        let nodes: Vec<NodeId> = corners
            .iter()
            .map(|&c| store.add_node(NodeData::new(document, c)))
            .collect();
        for i in 0..nodes.len() {
            let j = (i + 1) % nodes.len();
            store
                .add_edge(EdgeData::new(document, nodes[i], nodes[j]))
                .unwrap();
        }

        let aabb = BoundingBox::new(&nodes).execute(&store, document).unwrap();
        assert!((aabb.min - p(0.0, 0.0)).norm() < TOLERANCE);
        assert!((aabb.max - p(10.0, 10.0)).norm() < TOLERANCE);
        assert!((aabb.width() - 10.0).abs() < TOLERANCE);
        assert!((aabb.height() - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn curve_bulge_widens_the_box() {
        let mut store = LayoutStore::new();
        let document = store.add_document(DocumentData::new("board"));
        let a = store.add_node(NodeData::new(document, p(0.0, 0.0)));
        let b = store.add_node(NodeData::new(document, p(10.0, 0.0)));
        let c = store.add_node(NodeData::new(document, p(5.0, 8.0)));
        store
            .add_edge(
                EdgeData::new(document, a, b)
                    .with_controls(CubicControls::new(p(2.0, -8.0), p(8.0, -8.0))),
            )
            .unwrap();
        store.add_edge(EdgeData::new(document, b, c)).unwrap();
        store.add_edge(EdgeData::new(document, c, a)).unwrap();

        let aabb = BoundingBox::new(&[a, b, c]).execute(&store, document).unwrap();
        assert!(aabb.min.y < -1.0, "bulge not captured: min.y={}", aabb.min.y);
        assert!((aabb.max.y - 8.0).abs() < TOLERANCE);
    }

    #[test]
    fn unresolved_cycle_has_no_box() {
        let store = LayoutStore::new();
        assert!(BoundingBox::new(&[])
            .execute(&store, DocumentId::default())
            .is_none());
    }
}
