//! Representation of weighted graphs as they are
//! stored in graph files as well as the derived
//! neighbour view the analyses run on.

mod weighted_graph;
pub use weighted_graph::{EdgeInsertion, Graph, RemovedVertex, Vertex};

mod adjacency;
pub use adjacency::Adjacency;

use std::fmt;

pub type VertexId = u64;

/// Classifier from the first line of a graph file.
/// Kinds 0 to 3 have undirected edges, every other kind directed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GraphKind(pub i64);

impl GraphKind {
    pub const UNDIRECTED: GraphKind = GraphKind(0);
    pub const DIRECTED: GraphKind = GraphKind(4);

    pub fn is_symmetric(&self) -> bool {
        (0..=3).contains(&self.0)
    }

    pub fn is_directed(&self) -> bool {
        !self.is_symmetric()
    }

    /// Key under which the edge between `start` and `end` is stored.
    /// Undirected edges are stored once per unordered pair.
    pub fn edge_key(&self, start: VertexId, end: VertexId) -> EdgeKey {
        if self.is_symmetric() {
            EdgeKey(start.min(end), start.max(end))
        } else {
            EdgeKey(start, end)
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let semantics = if self.is_symmetric() {
            "undirected"
        } else {
            "directed"
        };
        write!(f, "{} ({})", self.0, semantics)
    }
}

/// Canonical (undirected) or ordered (directed) endpoint pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(pub VertexId, pub VertexId);

impl EdgeKey {
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.0 == vertex || self.1 == vertex
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} does not exist, edge rejected")]
    MissingEndpoint(VertexId),
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),
    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeKey),
    #[error("The graph file format can't represent {field} {value:?}")]
    Unencodable { field: &'static str, value: String },
    #[error("No vertex id left after {0}")]
    IdsExhausted(VertexId),
}
