use std::collections::HashSet;

use crate::graph::{Cycle, DocumentId, LayoutStore, NodeId};

use super::adjacency::build_adjacency;

/// Exhaustive enumeration of a document's elementary cycles.
///
/// From every node, walks the graph depth-first with an explicit frame
/// stack, recording the current path as a cycle whenever a neighbor
/// equals the path's start and the path already holds at least 3 nodes.
/// Discovered cycles are deduplicated by their canonical key, so each
/// physical loop appears once regardless of traversal direction or start
/// node.
///
/// Worst case is exponential in the node count on dense graphs. That is a
/// deliberate scope limit — inputs are small, sparse, user-drawn polygons
/// — not something the engine mitigates internally. Callers that want a
/// hard cap opt in via [`EnumerateCycles::with_cycle_limit`].
pub struct EnumerateCycles {
    limit: Option<usize>,
}

impl Default for EnumerateCycles {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumerateCycles {
    /// Creates a new enumeration with no cycle-count limit.
    #[must_use]
    pub fn new() -> Self {
        Self { limit: None }
    }

    /// Caps the number of distinct cycles collected. Enumeration order is
    /// deterministic for a given store history, so the truncation is too.
    /// This is an explicit caller policy; the default is unlimited.
    #[must_use]
    pub fn with_cycle_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Executes the enumeration, returning each distinct cycle once.
    #[must_use]
    pub fn execute(&self, store: &LayoutStore, document: DocumentId) -> Vec<Cycle> {
        let adjacency = build_adjacency(store, document, None);
        let mut seen: HashSet<Vec<NodeId>> = HashSet::new();
        let mut cycles = Vec::new();

        for (start, _) in store.document_nodes(document) {
            // One DFS per start node. `path` mirrors the frame stack;
            // each frame remembers how many neighbors it has consumed.
            let mut path = vec![start];
            let mut frames = vec![Frame { node: start, next: 0 }];

            while let Some(frame) = frames.last_mut() {
                let neighbors = adjacency.get(&frame.node).map_or(&[] as &[NodeId], Vec::as_slice);
                let Some(&neighbor) = neighbors.get(frame.next) else {
                    frames.pop();
                    path.pop();
                    continue;
                };
                frame.next += 1;

                if neighbor == start && path.len() >= 3 {
                    let cycle = Cycle::new(path.clone());
                    if seen.insert(cycle.canonical_key()) {
                        cycles.push(cycle);
                        if self.limit == Some(cycles.len()) {
                            return cycles;
                        }
                    }
                } else if !path.contains(&neighbor) {
                    path.push(neighbor);
                    frames.push(Frame {
                        node: neighbor,
                        next: 0,
                    });
                }
            }
        }
        cycles
    }
}

struct Frame {
    node: NodeId,
    next: usize,
}
