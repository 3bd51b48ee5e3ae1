use crate::math::Point2;

use super::document::DocumentId;
use super::node::NodeId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the layout store.
    pub struct EdgeId;
}

/// The two control points of a cubic Bézier edge.
///
/// `start` is the control point adjacent to the edge's stored start node,
/// `end` the one adjacent to its stored end node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicControls {
    /// Control point adjacent to the start node, in centimeters.
    pub start: Point2,
    /// Control point adjacent to the end node, in centimeters.
    pub end: Point2,
}

impl CubicControls {
    /// Creates a new control-point pair.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
}

/// Data associated with a layout edge.
///
/// An edge connects two distinct nodes. It is undirected for connectivity
/// purposes; the stored start/end orientation only associates the optional
/// Bézier control points with the correct side.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// The owning document.
    pub document: DocumentId,
    /// Start node of the edge.
    pub start: NodeId,
    /// End node of the edge.
    pub end: NodeId,
    /// Cubic Bézier control points, if the edge is curved.
    pub controls: Option<CubicControls>,
}

impl EdgeData {
    /// Creates a straight edge between two nodes.
    #[must_use]
    pub fn new(document: DocumentId, start: NodeId, end: NodeId) -> Self {
        Self {
            document,
            start,
            end,
            controls: None,
        }
    }

    /// Attaches cubic Bézier control points to the edge.
    #[must_use]
    pub fn with_controls(mut self, controls: CubicControls) -> Self {
        self.controls = Some(controls);
        self
    }

    /// Returns the control points oriented for a traversal starting at
    /// `from`: swapped when the traversal opposes the stored direction.
    ///
    /// Returns `None` if the edge is straight.
    #[must_use]
    pub fn controls_from(&self, from: NodeId) -> Option<(Point2, Point2)> {
        let controls = self.controls?;
        if from == self.start {
            Some((controls.start, controls.end))
        } else {
            Some((controls.end, controls.start))
        }
    }

    /// Returns the node on the other side of the edge, or `None` if `node`
    /// is not an endpoint.
    #[must_use]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.start {
            Some(self.end)
        } else if node == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}

/// Symmetric lookup key for an edge: the unordered pair of its endpoints.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)`, so edge lookup is
/// independent of traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
    /// Creates a symmetric key from two node ids in either order.
    #[must_use]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn node_ids(n: usize) -> Vec<NodeId> {
        let mut map: SlotMap<NodeId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn edge_key_symmetric() {
        let ids = node_ids(2);
        assert_eq!(EdgeKey::new(ids[0], ids[1]), EdgeKey::new(ids[1], ids[0]));
    }

    #[test]
    fn controls_swap_on_reverse_traversal() {
        let ids = node_ids(2);
        let c1 = Point2::new(1.0, 2.0);
        let c2 = Point2::new(3.0, 4.0);
        let edge = EdgeData::new(DocumentId::default(), ids[0], ids[1])
            .with_controls(CubicControls::new(c1, c2));

        assert_eq!(edge.controls_from(ids[0]), Some((c1, c2)));
        assert_eq!(edge.controls_from(ids[1]), Some((c2, c1)));
    }

    #[test]
    fn straight_edge_has_no_controls() {
        let ids = node_ids(2);
        let edge = EdgeData::new(DocumentId::default(), ids[0], ids[1]);
        assert_eq!(edge.controls_from(ids[0]), None);
    }

    #[test]
    fn other_endpoint() {
        let ids = node_ids(3);
        let edge = EdgeData::new(DocumentId::default(), ids[0], ids[1]);
        assert_eq!(edge.other(ids[0]), Some(ids[1]));
        assert_eq!(edge.other(ids[1]), Some(ids[0]));
        assert_eq!(edge.other(ids[2]), None);
    }
}
