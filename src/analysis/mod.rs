//! Analyses running on the neighbour view of a graph.
//! All of them work with an explicit work list or heap,
//! so deep or long graphs can't exhaust the stack.

mod coloring;
mod connectivity;
mod shortest_path;
mod spanning_tree;

pub use coloring::{greedy_coloring, Color, Coloring};
pub use connectivity::{connected_components, Components};
pub use shortest_path::{shortest_paths, ShortestPaths};
pub use spanning_tree::{minimum_spanning_tree, SpanningEdge, SpanningTree};

use crate::graph::{EdgeKey, GraphKind, VertexId};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("{analysis} is not supported for graphs of kind {kind}")]
    UnsupportedKind {
        analysis: &'static str,
        kind: GraphKind,
    },
    #[error("Weight {weight:?} of edge {edge} is not a real number")]
    InvalidWeight { edge: EdgeKey, weight: String },
    #[error("Weight {weight} of edge {edge} is negative")]
    NegativeWeight { edge: EdgeKey, weight: String },
    #[error("Distance to vertex {vertex} over edge {edge} exceeds the range of real numbers")]
    DistanceOverflow { edge: EdgeKey, vertex: VertexId },
    #[error("Source vertex {0} not found")]
    SourceNotFound(VertexId),
    #[error("Graph is not connected, {unreached} vertices can't be reached from vertex {start}")]
    NotConnected { start: VertexId, unreached: usize },
}

/// Weights are stored as text and only become numbers here.
fn parse_weight(edge: EdgeKey, weight: &str) -> Result<f64, AnalysisError> {
    match weight.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AnalysisError::InvalidWeight {
            edge,
            weight: weight.to_string(),
        }),
    }
}

fn parse_non_negative_weight(edge: EdgeKey, weight: &str) -> Result<f64, AnalysisError> {
    let value = parse_weight(edge, weight)?;
    if value < 0.0 {
        return Err(AnalysisError::NegativeWeight {
            edge,
            weight: weight.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_weight() {
        let edge = EdgeKey(1, 2);
        assert_eq!(Ok(2.5), parse_weight(edge, "2.5"));
        assert_eq!(Ok(-3.0), parse_weight(edge, "-3"));
        assert_eq!(Ok(1000.0), parse_weight(edge, "1e3"));

        for bad in ["", "abc", "1,5", "inf", "NaN"] {
            assert_eq!(
                Err(AnalysisError::InvalidWeight {
                    edge,
                    weight: bad.to_string()
                }),
                parse_weight(edge, bad)
            );
        }
    }

    #[test]
    fn test_parse_non_negative_weight() {
        let edge = EdgeKey(3, 4);
        assert_eq!(Ok(0.0), parse_non_negative_weight(edge, "0"));
        assert_eq!(
            Err(AnalysisError::NegativeWeight {
                edge,
                weight: "-0.5".to_string()
            }),
            parse_non_negative_weight(edge, "-0.5")
        );
    }
}
