use std::collections::BTreeMap;

use super::{Graph, VertexId};

/// Neighbour lists derived from the edge set of a [`Graph`].
/// Never cached: build a fresh one whenever the graph may have changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    neighbours: BTreeMap<VertexId, Vec<VertexId>>,
}

impl Adjacency {
    /// Neighbours as the graph's kind defines them: undirected edges
    /// show up at both endpoints, directed ones only at their start.
    pub fn build(graph: &Graph) -> Self {
        Self::with_symmetry(graph, graph.kind().is_symmetric())
    }

    /// Neighbours of the underlying undirected graph, whatever the kind.
    /// Self-loops are left out.
    pub fn undirected(graph: &Graph) -> Self {
        let mut adjacency = Self::with_symmetry(graph, true);
        for (vertex, ends) in adjacency.neighbours.iter_mut() {
            ends.retain(|end| end != vertex);
            ends.sort_unstable();
            ends.dedup();
        }
        adjacency
    }

    fn with_symmetry(graph: &Graph, symmetric: bool) -> Self {
        let mut neighbours: BTreeMap<VertexId, Vec<VertexId>> =
            graph.vertex_ids().map(|id| (id, Vec::new())).collect();

        for (key, _) in graph.edges() {
            if let Some(ends) = neighbours.get_mut(&key.0) {
                ends.push(key.1);
            }
            if symmetric {
                if let Some(ends) = neighbours.get_mut(&key.1) {
                    ends.push(key.0);
                }
            }
        }

        Adjacency { neighbours }
    }

    /// Neighbours of `vertex`, empty for unknown ids.
    pub fn neighbours(&self, vertex: VertexId) -> &[VertexId] {
        self.neighbours
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    pub fn max_degree(&self) -> usize {
        self.neighbours.values().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::{GraphError, GraphKind};

    fn build_graph(kind: GraphKind) -> Result<Graph, GraphError> {
        let mut graph = Graph::new(kind);
        for label in ["a", "b", "c", "d"] {
            graph.insert_vertex(label, "")?;
        }
        graph.insert_edge(1, 2, "1")?;
        graph.insert_edge(3, 1, "1")?;
        graph.insert_edge(2, 3, "1")?;
        Ok(graph)
    }

    #[test]
    fn test_symmetric_adjacency() -> Result<(), GraphError> {
        let adjacency = Adjacency::build(&build_graph(GraphKind::UNDIRECTED)?);

        assert_eq!(4, adjacency.len());
        assert_eq!(&[2, 3], adjacency.neighbours(1));
        assert_eq!(&[1, 3], adjacency.neighbours(2));
        assert_eq!(&[1, 2], adjacency.neighbours(3));
        assert!(adjacency.neighbours(4).is_empty());
        assert!(adjacency.neighbours(99).is_empty());
        assert_eq!(2, adjacency.max_degree());

        Ok(())
    }

    #[test]
    fn test_directed_adjacency() -> Result<(), GraphError> {
        let adjacency = Adjacency::build(&build_graph(GraphKind::DIRECTED)?);

        assert_eq!(&[2], adjacency.neighbours(1));
        assert_eq!(&[3], adjacency.neighbours(2));
        assert_eq!(&[1], adjacency.neighbours(3));
        assert_eq!(1, adjacency.max_degree());

        Ok(())
    }

    #[test]
    fn test_undirected_view_of_directed_graph() -> Result<(), GraphError> {
        let mut graph = build_graph(GraphKind::DIRECTED)?;
        graph.insert_edge(2, 1, "5")?;
        graph.insert_edge(4, 4, "5")?;
        let adjacency = Adjacency::undirected(&graph);

        assert_eq!(&[2, 3], adjacency.neighbours(1));
        assert_eq!(&[1, 3], adjacency.neighbours(2));
        assert!(adjacency.neighbours(4).is_empty());

        Ok(())
    }

    #[test]
    fn test_rebuilt_after_mutation() -> Result<(), GraphError> {
        let mut graph = build_graph(GraphKind::UNDIRECTED)?;
        graph.remove_vertex(3)?;
        let adjacency = Adjacency::build(&graph);

        assert_eq!(3, adjacency.len());
        assert_eq!(&[2], adjacency.neighbours(1));
        assert_eq!(&[1], adjacency.neighbours(2));
        assert!(!adjacency.is_empty());
        assert!(Adjacency::build(&Graph::new(GraphKind::UNDIRECTED)).is_empty());

        Ok(())
    }
}
