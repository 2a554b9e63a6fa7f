//! Reading and writing the line based graph file format:
//!
//! ```text
//! <kind>
//! <n>
//! <id> "<label>" "<attribute>"      (n lines)
//! <m>
//! <start> <end> <weight>            (m lines)
//! ```
//!
//! Blank lines are ignored everywhere.

mod parser;
mod writer;

pub use parser::decode;
pub use writer::encode;

use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::graph::{Graph, VertexId};

pub type Input<'a> = &'a str;
pub type ParseError<'a> = nom::error::VerboseError<Input<'a>>;
pub type ParseResult<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;

#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("Could not read graph file {path:?}: {source}")]
    Unreadable { path: PathBuf, source: io::Error },
    #[error("Graph file ended early, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("Line {line_number}: expected {expected}, found {content:?}")]
    MalformedLine {
        line_number: usize,
        expected: &'static str,
        content: String,
    },
    #[error("Line {line_number}: vertex {id} is defined twice")]
    DuplicateVertex { line_number: usize, id: VertexId },
    #[error("Line {line_number}: edge {content:?} references unknown vertex {vertex}")]
    DanglingEdge {
        line_number: usize,
        vertex: VertexId,
        content: String,
    },
}

/// Read and decode a graph file. Nothing is returned unless the whole file is valid.
pub fn load_graph(path: &Path) -> Result<Graph, FormatError> {
    let text = fs::read_to_string(path).map_err(|source| FormatError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = decode(&text)?;

    info!(
        ?path,
        kind = graph.kind().0,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}

pub fn save_graph(path: &Path, graph: &Graph) -> Result<(), io::Error> {
    fs::write(path, encode(graph))?;

    info!(
        ?path,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "saved graph"
    );
    Ok(())
}
