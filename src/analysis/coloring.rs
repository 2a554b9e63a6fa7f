use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};

use crate::graph::{Adjacency, Graph, VertexId};

pub type Color = usize;

/// Result of the greedy first-fit heuristic.
///
/// The coloring is proper, but it is not guaranteed to use the fewest
/// colors possible; only the `max degree + 1` bound holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: BTreeMap<VertexId, Color>,
    max_degree: usize,
}

impl Coloring {
    pub fn color(&self, vertex: VertexId) -> Option<Color> {
        self.colors.get(&vertex).copied()
    }

    pub fn colors(&self) -> impl Iterator<Item = (VertexId, Color)> + '_ {
        self.colors.iter().map(|(vertex, color)| (*vertex, *color))
    }

    /// Number of distinct colors in use.
    pub fn color_count(&self) -> usize {
        self.colors.values().unique().count()
    }

    /// Upper bound on the number of colors first-fit may use on this graph.
    pub fn color_bound(&self) -> usize {
        self.max_degree + 1
    }
}

/// Color vertices by ascending id, each with the smallest color (starting at 1)
/// none of its already colored neighbours has.
///
/// Directed graphs are colored by their underlying undirected graph, so no
/// edge in either direction joins two vertices of the same color.
/// Self-loops are ignored.
pub fn greedy_coloring(graph: &Graph) -> Coloring {
    let adjacency = Adjacency::undirected(graph);
    let mut colors: BTreeMap<VertexId, Color> = BTreeMap::new();

    for vertex in graph.vertex_ids() {
        let used = adjacency
            .neighbours(vertex)
            .iter()
            .filter_map(|neighbour| colors.get(neighbour).copied())
            .collect::<BTreeSet<Color>>();
        let color = (1..).find(|color| !used.contains(color)).unwrap_or(1);
        colors.insert(vertex, color);
    }

    Coloring {
        colors,
        max_degree: adjacency.max_degree(),
    }
}
