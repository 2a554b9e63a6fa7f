//! Debug facilities: the crate wide error type,
//! report printing and some helper macros.
use itertools::Itertools;
use std::io::{self, Write};

use crate::{
    analysis::{AnalysisError, Coloring, Components, ShortestPaths, SpanningTree},
    codec::FormatError,
    graph::{Graph, GraphError, VertexId},
};

// Error types and From<...> implementations

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Graph operation rejected: {0}")]
    GraphError(GraphError),
    #[error("Error while reading graph file: {0}")]
    FormatError(FormatError),
    #[error("Analysis failed: {0}")]
    AnalysisError(AnalysisError),
    #[error("I/O error: {0}")]
    IOError(io::Error),
}

impl From<GraphError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ge: GraphError) -> Self {
        Self::GraphError(ge)
    }
}

impl From<FormatError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(fe: FormatError) -> Self {
        Self::FormatError(fe)
    }
}

impl From<AnalysisError> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ae: AnalysisError) -> Self {
        Self::AnalysisError(ae)
    }
}

impl From<io::Error> for Error {
    #[cfg(not(tarpaulin_include))]
    fn from(ie: io::Error) -> Self {
        Self::IOError(ie)
    }
}

impl Error {
    /// The input ran dry while a value was asked for.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::IOError(ie) if ie.kind() == io::ErrorKind::UnexpectedEof)
    }
}

// Report printing

fn label(graph: &Graph, vertex: VertexId) -> &str {
    graph
        .vertex(vertex)
        .map(|vertex| vertex.label.as_str())
        .unwrap_or("?")
}

pub fn print_graph(out: &mut impl Write, graph: &Graph) -> io::Result<()> {
    writeln!(out, "Kind: {}", graph.kind())?;
    writeln!(out, "Vertices:")?;
    for (id, vertex) in graph.vertices() {
        writeln!(
            out,
            "  {}: label='{}', attribute='{}'",
            id, vertex.label, vertex.attribute
        )?;
    }

    let arrow = if graph.kind().is_symmetric() {
        "<-->"
    } else {
        "-->"
    };
    writeln!(out, "Edges:")?;
    for (key, weight) in graph.edges() {
        writeln!(out, "  {} {} {} with weight {}", key.0, arrow, key.1, weight)?;
    }

    Ok(())
}

pub fn print_components(out: &mut impl Write, components: &Components) -> io::Result<()> {
    if components.is_connected() {
        return writeln!(out, "The graph is connected.");
    }

    writeln!(
        out,
        "The graph is not connected, it has {} components:",
        components.count()
    )?;
    for (index, component) in components.components().iter().enumerate() {
        writeln!(out, "  Component {}: [{}]", index + 1, component.iter().join(", "))?;
    }

    Ok(())
}

pub fn print_shortest_paths(
    out: &mut impl Write,
    graph: &Graph,
    paths: &ShortestPaths,
) -> io::Result<()> {
    let nearest = paths.nearest();
    if nearest.is_empty() {
        return writeln!(out, "No other vertex is reachable from {}.", paths.source());
    }

    writeln!(
        out,
        "Reachable from {} ({}), closest first:",
        paths.source(),
        label(graph, paths.source())
    )?;
    for (vertex, distance) in nearest {
        let path = paths
            .path_to(vertex)
            .map(|path| path.iter().join(" -> "))
            .unwrap_or_default();
        writeln!(
            out,
            "  {} - {} at distance {} via {}",
            vertex,
            label(graph, vertex),
            distance,
            path
        )?;
    }

    Ok(())
}

pub fn print_spanning_tree(out: &mut impl Write, tree: &SpanningTree) -> io::Result<()> {
    writeln!(out, "Minimum spanning tree:")?;
    for edge in tree.edges.iter() {
        writeln!(out, "  {} <--> {} with cost {}", edge.from, edge.to, edge.cost)?;
    }
    writeln!(out, "Total cost: {}", tree.total_cost)
}

pub fn print_coloring(out: &mut impl Write, graph: &Graph, coloring: &Coloring) -> io::Result<()> {
    writeln!(out, "Greedy vertex coloring (heuristic, not necessarily minimal):")?;
    for (vertex, color) in coloring.colors() {
        writeln!(
            out,
            "  Vertex {} ({}) -> color {}",
            vertex,
            label(graph, vertex),
            color
        )?;
    }
    writeln!(
        out,
        "Colors used: {} (first-fit bound: {})",
        coloring.color_count(),
        coloring.color_bound()
    )
}

// Debug macros that allow to time single expressions

#[macro_export]
macro_rules! time {
    ($i:ident, $ret:ident, $exp:expr) => {
        let before = std::time::Instant::now();
        let $ret = $exp;
        let $i = before.elapsed();
    };
}

// Line handling macros for the graph file decoder

#[macro_export]
macro_rules! get_line {
    ($ret:ident, $lines:ident, $expected:expr) => {
        let $ret = $lines
            .next()
            .ok_or($crate::codec::FormatError::UnexpectedEnd {
                expected: $expected,
            })?;
    };
}

#[macro_export]
macro_rules! parse_single_line {
    ($ret:ident, $line:expr, $expected:expr, $exp:expr) => {
        let $ret = {
            let (line_number, content) = $line;
            nom::combinator::all_consuming($exp)(content)
                .map(|(_, parsed)| parsed)
                .map_err(|_| $crate::codec::FormatError::MalformedLine {
                    line_number,
                    expected: $expected,
                    content: content.to_string(),
                })?
        };
    };
}

#[macro_export]
macro_rules! get_line_parse {
    ($lines:ident, $ret:ident, $expected:expr, $exp:expr) => {
        $crate::get_line!(line, $lines, $expected);
        $crate::parse_single_line!($ret, line, $expected, $exp);
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        analysis::{connected_components, greedy_coloring, minimum_spanning_tree, shortest_paths},
        graph::GraphKind,
    };

    fn sample() -> Result<Graph, Error> {
        let mut graph = Graph::new(GraphKind::UNDIRECTED);
        graph.insert_vertex("Centro", "12")?;
        graph.insert_vertex("Porto", "")?;
        graph.insert_vertex("Ilha", "1")?;
        graph.insert_edge(2, 1, "3")?;
        Ok(graph)
    }

    fn render<F>(f: F) -> Result<String, Error>
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_print_graph() -> Result<(), Error> {
        let graph = sample()?;
        let text = render(|out| print_graph(out, &graph))?;
        assert_eq!(
            "Kind: 0 (undirected)
Vertices:
  1: label='Centro', attribute='12'
  2: label='Porto', attribute=''
  3: label='Ilha', attribute='1'
Edges:
  1 <--> 2 with weight 3
",
            text
        );

        Ok(())
    }

    #[test]
    fn test_print_reports() -> Result<(), Error> {
        let graph = sample()?;

        let components = connected_components(&graph)?;
        let text = render(|out| print_components(out, &components))?;
        assert!(text.contains("2 components"));
        assert!(text.contains("Component 1: [1, 2]"));
        assert!(text.contains("Component 2: [3]"));

        let paths = shortest_paths(&graph, 1)?;
        let text = render(|out| print_shortest_paths(out, &graph, &paths))?;
        assert!(text.contains("2 - Porto at distance 3 via 1 -> 2"));
        assert!(!text.contains("Ilha"));

        let coloring = greedy_coloring(&graph);
        let text = render(|out| print_coloring(out, &graph, &coloring))?;
        assert!(text.contains("not necessarily minimal"));
        assert!(text.contains("Vertex 2 (Porto) -> color 2"));
        assert!(text.contains("Colors used: 2 (first-fit bound: 2)"));

        let mut connected = graph.clone();
        connected.insert_edge(3, 2, "1.5")?;
        let tree = minimum_spanning_tree(&connected)?;
        let text = render(|out| print_spanning_tree(out, &tree))?;
        assert!(text.contains("2 <--> 3 with cost 1.5"));
        assert!(text.contains("Total cost: 4.5"));

        Ok(())
    }

    #[test]
    fn test_end_of_input() {
        let eof = Error::from(io::Error::new(io::ErrorKind::UnexpectedEof, "done"));
        assert!(eof.is_end_of_input());
        assert!(!Error::from(GraphError::VertexNotFound(1)).is_end_of_input());
    }
}
