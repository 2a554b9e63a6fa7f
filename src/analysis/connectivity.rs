use std::collections::BTreeSet;

use super::AnalysisError;
use crate::graph::{Adjacency, Graph, VertexId};

/// Connected components of an undirected graph, ordered by their smallest vertex.
///
/// The empty graph has exactly one (empty) component and therefore counts as
/// connected, so `is_connected` always means "exactly one component".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    components: Vec<BTreeSet<VertexId>>,
}

impl Components {
    pub fn is_connected(&self) -> bool {
        self.components.len() == 1
    }

    pub fn components(&self) -> &[BTreeSet<VertexId>] {
        &self.components
    }

    pub fn count(&self) -> usize {
        self.components.len()
    }
}

/// Split an undirected graph into its connected components.
/// Directed graphs are rejected, their strong components are not computed.
pub fn connected_components(graph: &Graph) -> Result<Components, AnalysisError> {
    if graph.kind().is_directed() {
        return Err(AnalysisError::UnsupportedKind {
            analysis: "Connectivity analysis",
            kind: graph.kind(),
        });
    }

    if graph.is_empty() {
        return Ok(Components {
            components: vec![BTreeSet::new()],
        });
    }

    let adjacency = Adjacency::build(graph);
    let mut visited = BTreeSet::new();
    let mut components = Vec::new();

    for root in graph.vertex_ids() {
        if visited.contains(&root) {
            continue;
        }

        let mut component = BTreeSet::new();
        let mut stack = vec![root];
        visited.insert(root);

        while let Some(vertex) = stack.pop() {
            component.insert(vertex);
            for &next in adjacency.neighbours(vertex) {
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        components.push(component);
    }

    Ok(Components { components })
}
