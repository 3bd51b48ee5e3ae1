use crate::graph::{DocumentId, EdgeId, LayoutStore, NodeId};

use super::FindPath;

enum Target {
    /// An edge already in the store; it is excluded from the search.
    Edge(EdgeId),
    /// Endpoints of a proposed edge not yet committed to the store.
    Endpoints(NodeId, NodeId),
}

/// Tests whether a single edge closes a loop.
///
/// The edge belongs to a cycle iff its endpoints stay connected with the
/// edge removed; the remaining path plus the edge is the loop. This is a
/// single-answer diagnostic — exhaustive enumeration is
/// [`EnumerateCycles`](super::EnumerateCycles).
pub struct DetectCycle {
    target: Target,
}

impl DetectCycle {
    /// Probes an existing edge.
    #[must_use]
    pub fn for_edge(edge: EdgeId) -> Self {
        Self {
            target: Target::Edge(edge),
        }
    }

    /// Probes a proposed edge by its endpoints, before it is committed.
    #[must_use]
    pub fn for_endpoints(start: NodeId, end: NodeId) -> Self {
        Self {
            target: Target::Endpoints(start, end),
        }
    }

    /// Executes the probe. Returns the node sequence of the closing path
    /// (start to end, the probed edge completing the loop), or `None` if
    /// the edge closes nothing. A dangling edge id also yields `None`.
    #[must_use]
    pub fn execute(&self, store: &LayoutStore, document: DocumentId) -> Option<Vec<NodeId>> {
        let path = match self.target {
            Target::Edge(id) => {
                let edge = store.get_edge(id)?;
                FindPath::new(edge.start, edge.end)
                    .without_edge(id)
                    .execute(store, document)
            }
            Target::Endpoints(start, end) => FindPath::new(start, end).execute(store, document),
        };
        if path.is_empty() {
            None
        } else {
            Some(path)
        }
    }
}
