use std::{
    cmp::Ordering,
    collections::{BTreeSet, BinaryHeap},
};

use super::{parse_weight, AnalysisError};
use crate::graph::{Adjacency, Graph, VertexId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanningEdge {
    /// Endpoint that was already part of the tree.
    pub from: VertexId,
    pub to: VertexId,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    /// Edges in the order they joined the tree.
    pub edges: Vec<SpanningEdge>,
    pub total_cost: f64,
}

/// Frontier edges, popped cheapest first. Equal costs
/// are decided by the smaller tree endpoint, then the smaller new endpoint.
#[derive(Debug, PartialEq)]
struct Candidate(SpanningEdge);

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .cost
            .total_cmp(&self.0.cost)
            .then_with(|| other.0.from.cmp(&self.0.from))
            .then_with(|| other.0.to.cmp(&self.0.to))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn push_frontier(
    graph: &Graph,
    adjacency: &Adjacency,
    in_tree: &BTreeSet<VertexId>,
    from: VertexId,
    frontier: &mut BinaryHeap<Candidate>,
) -> Result<(), AnalysisError> {
    for &to in adjacency.neighbours(from) {
        if in_tree.contains(&to) {
            continue;
        }
        if let Some(weight) = graph.edge_weight(from, to) {
            let cost = parse_weight(graph.kind().edge_key(from, to), weight)?;
            frontier.push(Candidate(SpanningEdge { from, to, cost }));
        }
    }
    Ok(())
}

/// Prim's algorithm, growing the tree from the smallest vertex id.
///
/// Only defined for undirected graphs. A graph that falls apart into
/// several components has no spanning tree and is rejected as a whole.
/// The empty graph yields an empty tree.
///
/// Every edge is queued, and its weight parsed, when its first endpoint
/// joins the tree, so a bad weight fails the call even on an edge the
/// tree never uses. Self-loops are the exception, they are never candidates.
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree, AnalysisError> {
    if graph.kind().is_directed() {
        return Err(AnalysisError::UnsupportedKind {
            analysis: "Minimum spanning tree",
            kind: graph.kind(),
        });
    }

    let mut tree = SpanningTree {
        edges: Vec::with_capacity(graph.vertex_count().saturating_sub(1)),
        total_cost: 0.0,
    };
    let start = match graph.vertex_ids().next() {
        Some(start) => start,
        None => return Ok(tree),
    };

    let adjacency = Adjacency::build(graph);
    let mut in_tree = BTreeSet::new();
    let mut frontier = BinaryHeap::new();

    in_tree.insert(start);
    push_frontier(graph, &adjacency, &in_tree, start, &mut frontier)?;

    while in_tree.len() < graph.vertex_count() {
        let Candidate(edge) = frontier.pop().ok_or(AnalysisError::NotConnected {
            start,
            unreached: graph.vertex_count() - in_tree.len(),
        })?;

        // Both endpoints joined the tree since this edge was queued.
        if !in_tree.insert(edge.to) {
            continue;
        }

        tree.edges.push(edge);
        tree.total_cost += edge.cost;
        push_frontier(graph, &adjacency, &in_tree, edge.to, &mut frontier)?;
    }

    Ok(tree)
}
