use crate::graph::{DocumentId, EdgeKey, LayoutStore, NodeId};
use crate::math::bezier_2d::{sample_cubic, CUBIC_SEGMENTS};
use crate::math::Point2;

/// Converts a cycle's node sequence into a closed polyline.
///
/// Straight edges contribute their endpoint; curved edges are sampled as
/// 20 cubic Bézier segments, with the control points swapped when the
/// traversal direction opposes the edge's stored orientation. The result
/// feeds area, perimeter and containment uniformly, whether or not any
/// edge was curved.
///
/// Node ids that no longer resolve are skipped, so a stale cycle degrades
/// to a shorter polyline instead of failing.
pub struct SampleCycle<'a> {
    nodes: &'a [NodeId],
}

impl<'a> SampleCycle<'a> {
    /// Creates a sampler over a cycle's node sequence.
    #[must_use]
    pub fn new(nodes: &'a [NodeId]) -> Self {
        Self { nodes }
    }

    /// Executes the sampling, returning the closed polyline.
    #[must_use]
    pub fn execute(&self, store: &LayoutStore, document: DocumentId) -> Vec<Point2> {
        let lookup = store.edge_lookup(document);
        let n = self.nodes.len();
        let mut points = Vec::new();

        for i in 0..n {
            let a = self.nodes[i];
            let b = self.nodes[(i + 1) % n];
            let (Some(start), Some(end)) = (store.get_node(a), store.get_node(b)) else {
                continue;
            };

            let controls = lookup
                .get(&EdgeKey::new(a, b))
                .and_then(|&id| store.get_edge(id))
                .and_then(|edge| edge.controls_from(a));

            if let Some((c1, c2)) = controls {
                sample_cubic(
                    &mut points,
                    &start.position,
                    &c1,
                    &c2,
                    &end.position,
                    CUBIC_SEGMENTS,
                );
            } else {
                if points.is_empty() {
                    points.push(start.position);
                }
                points.push(end.position);
            }
        }
        points
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

    fn square(
        store: &mut LayoutStore,
        document: DocumentId,
    ) -> Vec<NodeId> {
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
        nodes
    }

    #[test]
    fn straight_square_samples_four_points() {
        let mut store = LayoutStore::new();
        let document = store.add_document(DocumentData::new("board"));
        let nodes = square(&mut store, document);

        let points = SampleCycle::new(&nodes).execute(&store, document);
        // First segment emits both endpoints; the closing segment's
        // endpoint is the already-emitted first point.
        assert_eq!(points.len(), 5);
        assert!((points[0] - p(0.0, 0.0)).norm() < TOLERANCE);
        assert!((points[4] - p(0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn curved_edge_densifies_the_polyline() {
        let mut store = LayoutStore::new();
        let document = store.add_document(DocumentData::new("board"));
        let a = store.add_node(NodeData::new(document, p(0.0, 0.0)));
        let b = store.add_node(NodeData::new(document, p(10.0, 0.0)));
        let c = store.add_node(NodeData::new(document, p(5.0, 8.0)));
        store
            .add_edge(
                EdgeData::new(document, a, b)
                    .with_controls(CubicControls::new(p(3.0, 4.0), p(7.0, 4.0))),
            )
            .unwrap();
        store.add_edge(EdgeData::new(document, b, c)).unwrap();
        store.add_edge(EdgeData::new(document, c, a)).unwrap();

        let points = SampleCycle::new(&[a, b, c]).execute(&store, document);
        // 21 points for the curve, plus c and the closing a.
        assert_eq!(points.len(), 23);
    }

    #[test]
    fn reversed_traversal_swaps_controls() {
        // The same physical loop sampled in both directions must produce
        // mirror polylines: equal lengths, same point set reversed.
        let mut store = LayoutStore::new();
        let document = store.add_document(DocumentData::new("board"));
        let a = store.add_node(NodeData::new(document, p(0.0, 0.0)));
        let b = store.add_node(NodeData::new(document, p(10.0, 0.0)));
        let c = store.add_node(NodeData::new(document, p(5.0, 8.0)));
        store
            .add_edge(
                EdgeData::new(document, a, b)
                    .with_controls(CubicControls::new(p(1.0, 5.0), p(9.0, 5.0))),
            )
            .unwrap();
        store.add_edge(EdgeData::new(document, b, c)).unwrap();
        store.add_edge(EdgeData::new(document, c, a)).unwrap();

        let forward = SampleCycle::new(&[a, b, c]).execute(&store, document);
        let backward = SampleCycle::new(&[b, a, c]).execute(&store, document);

        let fwd_curve: Vec<Point2> = forward[0..=20].to_vec();
        let mut bwd_curve: Vec<Point2> = backward[0..=20].to_vec();
        bwd_curve.reverse();
        for (f, g) in fwd_curve.iter().zip(&bwd_curve) {
            assert!((f - g).norm() < 1e-9, "curve not mirrored: {f} vs {g}");
        }
    }

    #[test]
    fn chord_aligned_controls_match_straight_edge() {
        let mut store = LayoutStore::new();
        let document = store.add_document(DocumentData::new("board"));
        let a = store.add_node(NodeData::new(document, p(0.0, 0.0)));
        let b = store.add_node(NodeData::new(document, p(9.0, 0.0)));
        let c = store.add_node(NodeData::new(document, p(0.0, 9.0)));
        // Controls at thirds of the chord: the cubic is the chord itself.
        store
            .add_edge(
                EdgeData::new(document, a, b)
                    .with_controls(CubicControls::new(p(3.0, 0.0), p(6.0, 0.0))),
            )
            .unwrap();
        store.add_edge(EdgeData::new(document, b, c)).unwrap();
        store.add_edge(EdgeData::new(document, c, a)).unwrap();

        let points = SampleCycle::new(&[a, b, c]).execute(&store, document);
        for point in &points[0..=20] {
            assert!(point.y.abs() < 1e-9, "curve sample off the chord: {point}");
        }
        assert!((points[20] - p(9.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn metrics_invariant_under_rotation_and_reflection() {
        use crate::math::polygon_2d::{polygon_area, polygon_perimeter};

        let mut store = LayoutStore::new();
        let document = store.add_document(DocumentData::new("board"));
        let nodes = square(&mut store, document);

        let reference = SampleCycle::new(&nodes).execute(&store, document);
        let area = polygon_area(&reference);
        let perimeter = polygon_perimeter(&reference);

        let mut rotated = nodes.clone();
        rotated.rotate_left(2);
        let mut reflected = nodes.clone();
        reflected.reverse();

        for variant in [rotated, reflected] {
            let points = SampleCycle::new(&variant).execute(&store, document);
            assert!((polygon_area(&points) - area).abs() < TOLERANCE);
            assert!((polygon_perimeter(&points) - perimeter).abs() < TOLERANCE);
        }
    }

    #[test]
    fn missing_node_is_skipped() {
        let mut store = LayoutStore::new();
        let document = store.add_document(DocumentData::new("board"));
        let nodes = square(&mut store, document);
        store.remove_node(nodes[2]);

        let points = SampleCycle::new(&nodes).execute(&store, document);
        // Segments 1-2 and 2-3 drop out; 0-1 contributes both endpoints
        // and the closing 3-0 only its endpoint.
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn empty_cycle_samples_nothing() {
        let store = LayoutStore::new();
        let document = DocumentId::default();
        assert!(SampleCycle::new(&[]).execute(&store, document).is_empty());
    }
}
