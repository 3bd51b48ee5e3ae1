use std::collections::{HashMap, VecDeque};

use crate::graph::{DocumentId, EdgeId, LayoutStore, NodeId};

use super::adjacency::build_adjacency;

/// Breadth-first shortest-path search over a document's undirected graph.
///
/// The editor uses this to test whether a proposed edge would close a
/// loop: search between the edge's endpoints with the edge itself
/// excluded via [`FindPath::without_edge`].
pub struct FindPath {
    start: NodeId,
    end: NodeId,
    excluded: Option<EdgeId>,
}

impl FindPath {
    /// Creates a new path search between two nodes.
    #[must_use]
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self {
            start,
            end,
            excluded: None,
        }
    }

    /// Excludes one edge from the search.
    #[must_use]
    pub fn without_edge(mut self, edge: EdgeId) -> Self {
        self.excluded = Some(edge);
        self
    }

    /// Executes the search, returning the first-discovered shortest path
    /// from start to end (ties broken by edge store order), or an empty
    /// sequence if the target is unreachable.
    ///
    /// A search from a node to itself returns the single-element path.
    #[must_use]
    pub fn execute(&self, store: &LayoutStore, document: DocumentId) -> Vec<NodeId> {
        if self.start == self.end {
            return vec![self.start];
        }

        let adjacency = build_adjacency(store, document, self.excluded);
        let mut queue = VecDeque::new();
        let mut prev: HashMap<NodeId, Option<NodeId>> = HashMap::new();
        queue.push_back(self.start);
        prev.insert(self.start, None);

        while let Some(current) = queue.pop_front() {
            let Some(neighbors) = adjacency.get(&current) else {
                continue;
            };
            for &neighbor in neighbors {
                if prev.contains_key(&neighbor) {
                    continue;
                }
                prev.insert(neighbor, Some(current));
                if neighbor == self.end {
                    return trace_back(&prev, self.end);
                }
                queue.push_back(neighbor);
            }
        }
        Vec::new()
    }
}

/// Walks the predecessor map from the end node back to the start and
/// returns the path in forward order.
fn trace_back(prev: &HashMap<NodeId, Option<NodeId>>, end: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(end);
    while let Some(node) = current {
        path.push(node);
        current = prev.get(&node).copied().flatten();
    }
    path.reverse();
    path
}
