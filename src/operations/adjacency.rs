use std::collections::HashMap;

use crate::graph::{DocumentId, EdgeId, LayoutStore, NodeId};

/// Builds the undirected adjacency lists of a document's graph.
///
/// Neighbor lists follow edge store order, which keeps path search and
/// cycle enumeration deterministic for a given store history. At most one
/// edge may be excluded (the editor's proposed-edge probe).
pub(crate) fn build_adjacency(
    store: &LayoutStore,
    document: DocumentId,
    excluded: Option<EdgeId>,
) -> HashMap<NodeId, Vec<NodeId>> {
    let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
    for (id, edge) in store.document_edges(document) {
        if Some(id) == excluded {
            continue;
        }
        adjacency.entry(edge.start).or_default().push(edge.end);
        adjacency.entry(edge.end).or_default().push(edge.start);
    }
    adjacency
}
