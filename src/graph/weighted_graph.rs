use custom_debug_derive::Debug;
use std::collections::BTreeMap;
use tracing::debug;

use super::{EdgeKey, GraphError, GraphKind, VertexId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub label: String,
    /// Opaque payload, kept exactly as read.
    pub attribute: String,
}

/// Weighted graph as described by a graph file.
/// Vertices and edges live in ordered maps so every
/// iteration (and thus every analysis) is deterministic.
#[derive(Debug, Clone)]
pub struct Graph {
    kind: GraphKind,
    vertices: BTreeMap<VertexId, Vertex>,
    edges: BTreeMap<EdgeKey, String>,
    /// Highest id this graph has ever held.
    #[debug(skip)]
    high_water: VertexId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeInsertion {
    Inserted,
    Updated { previous: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedVertex {
    pub vertex: Vertex,
    pub removed_edges: usize,
}

fn check_text(field: &'static str, value: &str) -> Result<(), GraphError> {
    if value.contains(|c: char| c == '"' || c == '\n' || c == '\r') {
        return Err(GraphError::Unencodable {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_weight(weight: &str) -> Result<(), GraphError> {
    if weight.is_empty() || weight.contains(char::is_whitespace) {
        return Err(GraphError::Unencodable {
            field: "weight",
            value: weight.to_string(),
        });
    }
    Ok(())
}

impl Graph {
    pub fn new(kind: GraphKind) -> Self {
        Graph {
            kind,
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            high_water: 0,
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices.iter().map(|(id, vertex)| (*id, vertex))
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Stored edges in ascending key order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &str)> + '_ {
        self.edges.iter().map(|(key, weight)| (*key, weight.as_str()))
    }

    pub fn edge_weight(&self, start: VertexId, end: VertexId) -> Option<&str> {
        self.edges
            .get(&self.kind.edge_key(start, end))
            .map(String::as_str)
    }

    /// Place a vertex under a fixed id, returning the record it replaced.
    pub(crate) fn set_vertex(&mut self, id: VertexId, vertex: Vertex) -> Option<Vertex> {
        self.high_water = self.high_water.max(id);
        self.vertices.insert(id, vertex)
    }

    /// Store the edge weight under the key convention of this graph's kind,
    /// returning the weight it replaced. Endpoints are not checked.
    pub(crate) fn set_edge(
        &mut self,
        start: VertexId,
        end: VertexId,
        weight: String,
    ) -> Option<String> {
        self.edges.insert(self.kind.edge_key(start, end), weight)
    }

    /// Add a vertex under the next free id. Ids of removed vertices are never handed out again.
    pub fn insert_vertex(
        &mut self,
        label: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Result<VertexId, GraphError> {
        let label = label.into();
        let attribute = attribute.into();
        check_text("label", &label)?;
        check_text("attribute", &attribute)?;

        let id = self
            .high_water
            .checked_add(1)
            .ok_or(GraphError::IdsExhausted(self.high_water))?;
        debug!(id, %label, %attribute, "inserting vertex");
        self.set_vertex(id, Vertex { label, attribute });
        Ok(id)
    }

    /// Insert or overwrite the edge between two existing vertices.
    pub fn insert_edge(
        &mut self,
        start: VertexId,
        end: VertexId,
        weight: impl Into<String>,
    ) -> Result<EdgeInsertion, GraphError> {
        let weight = weight.into();
        for endpoint in [start, end] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::MissingEndpoint(endpoint));
            }
        }
        check_weight(&weight)?;

        debug!(start, end, %weight, "inserting edge");
        Ok(match self.set_edge(start, end, weight) {
            Some(previous) => EdgeInsertion::Updated { previous },
            None => EdgeInsertion::Inserted,
        })
    }

    /// Remove a vertex together with every edge touching it.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<RemovedVertex, GraphError> {
        let vertex = self
            .vertices
            .remove(&id)
            .ok_or(GraphError::VertexNotFound(id))?;

        let edges_before = self.edges.len();
        self.edges.retain(|key, _| !key.touches(id));
        let removed_edges = edges_before - self.edges.len();

        debug!(id, removed_edges, "removed vertex");
        Ok(RemovedVertex {
            vertex,
            removed_edges,
        })
    }

    /// Remove a single edge, returning its weight.
    pub fn remove_edge(&mut self, start: VertexId, end: VertexId) -> Result<String, GraphError> {
        let key = self.kind.edge_key(start, end);
        let weight = self
            .edges
            .remove(&key)
            .ok_or(GraphError::EdgeNotFound(key))?;

        debug!(%key, %weight, "removed edge");
        Ok(weight)
    }
}

/// Graphs are equal when kind, vertices and edges are,
/// regardless of which ids were handed out in the past.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.vertices == other.vertices && self.edges == other.edges
    }
}

impl Eq for Graph {}
