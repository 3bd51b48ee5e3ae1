use super::node::NodeId;

/// An elementary cycle in the layout graph: an ordered sequence of at
/// least 3 distinct nodes, implicitly closed (the last node connects back
/// to the first).
///
/// Two cycles describe the same physical loop when one is a rotation or a
/// reversal of the other; [`Cycle::canonical_key`] normalizes both away.
#[derive(Debug, Clone)]
pub struct Cycle {
    nodes: Vec<NodeId>,
}

impl Cycle {
    /// Creates a cycle from an ordered node sequence.
    #[must_use]
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// The node sequence, in traversal order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes in the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the cycle has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consumes the cycle, returning its node sequence.
    #[must_use]
    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// Returns the rotation- and reflection-invariant normal form of the
    /// cycle.
    ///
    /// Both the forward sequence and its reversal are rotated so the
    /// smallest node id leads (ids are unique, so no tie is possible);
    /// the lexicographically smaller of the two rotations is the key.
    /// Two cycles are the same loop iff their keys are equal.
    #[must_use]
    pub fn canonical_key(&self) -> Vec<NodeId> {
        if self.nodes.len() < 2 {
            return self.nodes.clone();
        }
        let forward = rotate_to_min(&self.nodes);
        let mut reversed = self.nodes.clone();
        reversed.reverse();
        let backward = rotate_to_min(&reversed);
        if forward <= backward {
            forward
        } else {
            backward
        }
    }
}

/// Rotates a cycle so its smallest node id comes first.
fn rotate_to_min(nodes: &[NodeId]) -> Vec<NodeId> {
    let n = nodes.len();
    let mut min_index = 0;
    for i in 1..n {
        if nodes[i] < nodes[min_index] {
            min_index = i;
        }
    }
    let mut rotated = Vec::with_capacity(n);
    rotated.extend_from_slice(&nodes[min_index..]);
    rotated.extend_from_slice(&nodes[..min_index]);
    rotated
}
