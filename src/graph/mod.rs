pub mod cycle;
pub mod document;
pub mod edge;
pub mod node;
pub mod shape;

pub use cycle::Cycle;
pub use document::{DocumentData, DocumentId};
pub use edge::{CubicControls, EdgeData, EdgeId, EdgeKey};
pub use node::{NodeData, NodeId};
pub use shape::{MaterialId, ShapeData, ShapeId};

use std::collections::HashMap;

use crate::error::GraphError;
use slotmap::SlotMap;

/// Central arena that owns all layout entities.
///
/// Entities reference each other via typed IDs (generational indices), so
/// a shape holding ids of since-deleted nodes simply resolves them to
/// `None` instead of observing stale data. The engine operates on a store
/// snapshot per call and keeps no state of its own between calls.
#[derive(Debug, Default)]
pub struct LayoutStore {
    documents: SlotMap<DocumentId, DocumentData>,
    nodes: SlotMap<NodeId, NodeData>,
    edges: SlotMap<EdgeId, EdgeData>,
    shapes: SlotMap<ShapeId, ShapeData>,
}

impl LayoutStore {
    /// Creates a new, empty layout store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Document operations ---

    /// Inserts a document and returns its ID.
    pub fn add_document(&mut self, data: DocumentData) -> DocumentId {
        self.documents.insert(data)
    }

    /// Returns a reference to the document data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn document(&self, id: DocumentId) -> Result<&DocumentData, GraphError> {
        self.documents
            .get(id)
            .ok_or_else(|| GraphError::EntityNotFound("document".into()))
    }

    /// Returns a mutable reference to the document data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn document_mut(&mut self, id: DocumentId) -> Result<&mut DocumentData, GraphError> {
        self.documents
            .get_mut(id)
            .ok_or_else(|| GraphError::EntityNotFound("document".into()))
    }

    // --- Node operations ---

    /// Inserts a node and returns its ID.
    pub fn add_node(&mut self, data: NodeData) -> NodeId {
        self.nodes.insert(data)
    }

    /// Returns a reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn node(&self, id: NodeId) -> Result<&NodeData, GraphError> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::EntityNotFound("node".into()))
    }

    /// Returns a mutable reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, GraphError> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::EntityNotFound("node".into()))
    }

    /// Returns the node data if present. Dangling ids resolve to `None`.
    #[must_use]
    pub fn get_node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id)
    }

    /// Removes a node. Edges touching it are the caller's responsibility
    /// (cascade lives with the persistence collaborator).
    pub fn remove_node(&mut self, id: NodeId) -> Option<NodeData> {
        self.nodes.remove(id)
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DegenerateEdge`] if the edge's endpoints are
    /// the same node. This is the one caller contract the store enforces;
    /// everything downstream assumes `start != end`.
    pub fn add_edge(&mut self, data: EdgeData) -> Result<EdgeId, GraphError> {
        if data.start == data.end {
            return Err(GraphError::DegenerateEdge);
        }
        Ok(self.edges.insert(data))
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, GraphError> {
        self.edges
            .get(id)
            .ok_or_else(|| GraphError::EntityNotFound("edge".into()))
    }

    /// Returns the edge data if present. Dangling ids resolve to `None`.
    #[must_use]
    pub fn get_edge(&self, id: EdgeId) -> Option<&EdgeData> {
        self.edges.get(id)
    }

    /// Removes an edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> Option<EdgeData> {
        self.edges.remove(id)
    }

    // --- Shape operations ---

    /// Inserts a shape and returns its ID.
    pub fn add_shape(&mut self, data: ShapeData) -> ShapeId {
        self.shapes.insert(data)
    }

    /// Returns a reference to the shape data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn shape(&self, id: ShapeId) -> Result<&ShapeData, GraphError> {
        self.shapes
            .get(id)
            .ok_or_else(|| GraphError::EntityNotFound("shape".into()))
    }

    /// Replaces a document's shapes wholesale, returning the new IDs.
    ///
    /// Shapes are never patched incrementally: every rebuild discards the
    /// document's previous shape set and stores the fresh one.
    pub fn replace_shapes(&mut self, document: DocumentId, shapes: Vec<ShapeData>) -> Vec<ShapeId> {
        let stale: Vec<ShapeId> = self
            .shapes
            .iter()
            .filter(|(_, shape)| shape.document == document)
            .map(|(id, _)| id)
            .collect();
        for id in stale {
            self.shapes.remove(id);
        }
        shapes.into_iter().map(|s| self.shapes.insert(s)).collect()
    }

    // --- Document-scoped views ---

    /// Iterates the nodes belonging to a document, in store order.
    pub fn document_nodes(
        &self,
        document: DocumentId,
    ) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.nodes
            .iter()
            .filter(move |(_, node)| node.document == document)
    }

    /// Iterates the edges belonging to a document, in store order.
    pub fn document_edges(
        &self,
        document: DocumentId,
    ) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges
            .iter()
            .filter(move |(_, edge)| edge.document == document)
    }

    /// Iterates the shapes belonging to a document, in store order.
    pub fn document_shapes(
        &self,
        document: DocumentId,
    ) -> impl Iterator<Item = (ShapeId, &ShapeData)> {
        self.shapes
            .iter()
            .filter(move |(_, shape)| shape.document == document)
    }

    /// Builds an orientation-independent edge lookup for a document,
    /// keyed by the unordered endpoint pair.
    #[must_use]
    pub fn edge_lookup(&self, document: DocumentId) -> HashMap<EdgeKey, EdgeId> {
        self.document_edges(document)
            .map(|(id, edge)| (EdgeKey::new(edge.start, edge.end), id))
            .collect()
    }
}
