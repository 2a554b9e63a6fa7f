use std::{
    cmp::Ordering,
    collections::{BTreeMap, BinaryHeap},
};
use tracing::trace;

use super::{parse_non_negative_weight, AnalysisError};
use crate::graph::{Adjacency, Graph, VertexId};

/// Distances from a single source. Unreachable vertices have an infinite distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: VertexId,
    distances: BTreeMap<VertexId, f64>,
    predecessors: BTreeMap<VertexId, VertexId>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// `None` for vertices that are not part of the graph.
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(&vertex).copied()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).map_or(false, f64::is_finite)
    }

    /// All distances by ascending vertex id.
    pub fn distances(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.distances
            .iter()
            .map(|(vertex, distance)| (*vertex, *distance))
    }

    /// Reachable vertices other than the source, closest first.
    pub fn nearest(&self) -> Vec<(VertexId, f64)> {
        let mut reachable = self
            .distances()
            .filter(|(vertex, distance)| *vertex != self.source && distance.is_finite())
            .collect::<Vec<_>>();
        reachable.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        reachable
    }

    /// Vertices on a shortest path from the source to `target`, both included.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.predecessors.get(&current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Entry of the frontier. Ordered reversed so that
/// the max-heap pops the smallest distance first.
#[derive(Debug, PartialEq)]
struct FrontierEntry {
    distance: f64,
    vertex: VertexId,
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm from `source` along the neighbour view of the graph.
///
/// Fails on the first traversed edge whose weight is not a
/// non-negative real number, or whose distance sum leaves the `f64` range.
pub fn shortest_paths(graph: &Graph, source: VertexId) -> Result<ShortestPaths, AnalysisError> {
    if !graph.contains_vertex(source) {
        return Err(AnalysisError::SourceNotFound(source));
    }

    let kind = graph.kind();
    let adjacency = Adjacency::build(graph);
    let mut distances: BTreeMap<VertexId, f64> = graph
        .vertex_ids()
        .map(|vertex| (vertex, f64::INFINITY))
        .collect();
    let mut predecessors = BTreeMap::new();
    let mut overflowed = BTreeMap::new();
    let mut frontier = BinaryHeap::new();

    distances.insert(source, 0.0);
    frontier.push(FrontierEntry {
        distance: 0.0,
        vertex: source,
    });

    while let Some(FrontierEntry { distance, vertex }) = frontier.pop() {
        // Stale entry, a shorter path was settled already.
        if distance > distances.get(&vertex).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        for &next in adjacency.neighbours(vertex) {
            let edge = kind.edge_key(vertex, next);
            let weight = match graph.edge_weight(vertex, next) {
                Some(weight) => parse_non_negative_weight(edge, weight)?,
                None => continue,
            };

            let candidate = distance + weight;
            if candidate < distances.get(&next).copied().unwrap_or(f64::INFINITY) {
                trace!(vertex, next, candidate, "relaxed edge");
                distances.insert(next, candidate);
                predecessors.insert(next, vertex);
                frontier.push(FrontierEntry {
                    distance: candidate,
                    vertex: next,
                });
            } else if candidate.is_infinite() {
                overflowed.entry(next).or_insert(edge);
            }
        }
    }

    // Reached only over a sum too large for f64.
    if let Some((&vertex, &edge)) = overflowed
        .iter()
        .find(|&(&vertex, _)| distances.get(&vertex).map_or(true, |d| d.is_infinite()))
    {
        return Err(AnalysisError::DistanceOverflow { edge, vertex });
    }

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}
