//! Decoder for graph files. Works line by line, each
//! line has to be matched completely by its nom parser.

use tracing::warn;

use crate::{
    get_line, get_line_parse,
    graph::{Graph, GraphKind, Vertex, VertexId},
    parse_single_line,
};

use super::{FormatError, Input, ParseResult};

fn parse_kind(input: Input<'_>) -> ParseResult<'_, GraphKind> {
    use nom::{character::complete::i64, combinator::map};

    map(i64, GraphKind)(input)
}

fn parse_count(input: Input<'_>) -> ParseResult<'_, usize> {
    use nom::{character::complete::digit1, combinator::map_res};

    map_res(digit1, str::parse::<usize>)(input)
}

fn parse_vertex_id(input: Input<'_>) -> ParseResult<'_, VertexId> {
    use nom::{character::complete::digit1, combinator::map_res};

    map_res(digit1, str::parse::<VertexId>)(input)
}

/// Quotes only delimit, there is no escaping inside.
fn parse_quoted(input: Input<'_>) -> ParseResult<'_, &str> {
    use nom::{bytes::complete::take_till, character::complete::char, sequence::delimited};

    delimited(char('"'), take_till(|c: char| c == '"'), char('"'))(input)
}

/// Parse `<id> "<label>" "<attribute>"`.
fn parse_vertex(input: Input<'_>) -> ParseResult<'_, (VertexId, Vertex)> {
    use nom::{character::complete::space1, sequence::tuple};

    let (rest, (id, _, label, _, attribute)) =
        tuple((parse_vertex_id, space1, parse_quoted, space1, parse_quoted))(input)?;

    let vertex = Vertex {
        label: label.to_string(),
        attribute: attribute.to_string(),
    };
    Ok((rest, (id, vertex)))
}

/// Parse `<start> <end> <weight>`. Tokens after the weight are ignored.
fn parse_edge(input: Input<'_>) -> ParseResult<'_, (VertexId, VertexId, &str)> {
    use nom::{
        bytes::complete::is_not,
        character::complete::space1,
        combinator::{opt, rest},
        sequence::{preceded, terminated, tuple},
    };

    let edge = tuple((parse_vertex_id, space1, parse_vertex_id, space1, is_not(" \t")));
    let (remaining, (start, _, end, _, weight)) =
        terminated(edge, opt(preceded(space1, rest)))(input)?;

    Ok((remaining, (start, end, weight)))
}

/// Decode a whole graph file.
///
/// An undirected edge may be listed several times, in either orientation.
/// Every line is stored under the canonical key, so the last line for a pair
/// determines its weight. Files written by [`super::encode`] list every
/// undirected edge twice with the same weight.
pub fn decode(text: &str) -> Result<Graph, FormatError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    get_line_parse!(lines, kind, "graph kind", parse_kind);
    get_line_parse!(lines, vertex_count, "vertex count", parse_count);

    let mut graph = Graph::new(kind);

    for _ in 0..vertex_count {
        get_line!(line, lines, "vertex line");
        parse_single_line!(parsed, line, "vertex line", parse_vertex);
        let (id, vertex) = parsed;

        if graph.set_vertex(id, vertex).is_some() {
            return Err(FormatError::DuplicateVertex {
                line_number: line.0,
                id,
            });
        }
    }

    get_line_parse!(lines, edge_line_count, "edge count", parse_count);

    for _ in 0..edge_line_count {
        get_line!(line, lines, "edge line");
        parse_single_line!(parsed, line, "edge line", parse_edge);
        let (start, end, weight) = parsed;

        for vertex in [start, end] {
            if !graph.contains_vertex(vertex) {
                return Err(FormatError::DanglingEdge {
                    line_number: line.0,
                    vertex,
                    content: line.1.to_string(),
                });
            }
        }

        if let Some(previous) = graph.set_edge(start, end, weight.to_string()) {
            if previous != weight {
                warn!(
                    line_number = line.0,
                    %previous,
                    %weight,
                    "edge listed again with another weight, later line wins"
                );
            }
        }
    }

    let trailing = lines.count();
    if trailing > 0 {
        warn!(trailing, "ignoring lines after the edge section");
    }

    Ok(graph)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::EdgeKey;

    const SAMPLE: &str = "1
4
1 \"Centro\" \"12\"
2 \"Vila Nova\" \"3\"

3 \"Porto\" \"\"
5 \"Aeroporto\" \"7.5\"
6
1 2 4
2 1 4
2 3 2.5
3 2 2.5
1 5 10
5 1 10
";

    #[test]
    fn test_parse_vertex() {
        let (rest, (id, vertex)) = parse_vertex("17   \"Zona Sul\"\t\"4.2\"").unwrap();
        assert!(rest.is_empty());
        assert_eq!(17, id);
        assert_eq!("Zona Sul", vertex.label);
        assert_eq!("4.2", vertex.attribute);

        assert!(parse_vertex("17 Zona \"4.2\"").is_err());
        assert!(parse_vertex("-1 \"a\" \"b\"").is_err());
        assert!(parse_vertex("x \"a\" \"b\"").is_err());
    }

    #[test]
    fn test_parse_edge() {
        assert_eq!(Ok(("", (1, 2, "3.5"))), parse_edge("1 2 3.5"));
        assert_eq!(Ok(("", (1, 2, "abc"))), parse_edge("1\t2  abc extra tokens"));
        assert!(parse_edge("1 2").is_err());
        assert!(parse_edge("1 b 2").is_err());
    }

    #[test]
    fn test_decode() -> Result<(), FormatError> {
        let graph = decode(SAMPLE)?;

        assert_eq!(GraphKind(1), graph.kind());
        assert_eq!(4, graph.vertex_count());
        assert_eq!(3, graph.edge_count());
        assert_eq!("", graph.vertex(3).map(|v| v.attribute.as_str()).unwrap_or("?"));
        assert_eq!(
            vec![
                (EdgeKey(1, 2), "4"),
                (EdgeKey(1, 5), "10"),
                (EdgeKey(2, 3), "2.5")
            ],
            graph.edges().collect::<Vec<_>>()
        );

        Ok(())
    }

    #[test]
    fn test_decode_directed() -> Result<(), FormatError> {
        let text = "4\n2\n1 \"a\" \"\"\n2 \"b\" \"\"\n2\n1 2 3\n2 1 5\n";
        let graph = decode(text)?;

        assert!(graph.kind().is_directed());
        assert_eq!(2, graph.edge_count());
        assert_eq!(Some("3"), graph.edge_weight(1, 2));
        assert_eq!(Some("5"), graph.edge_weight(2, 1));

        Ok(())
    }

    #[test]
    fn test_decode_last_line_wins() -> Result<(), FormatError> {
        let text = "0\n2\n1 \"a\" \"\"\n2 \"b\" \"\"\n2\n1 2 3\n2 1 5\n";
        let graph = decode(text)?;

        assert_eq!(1, graph.edge_count());
        assert_eq!(Some("5"), graph.edge_weight(1, 2));

        Ok(())
    }

    #[test]
    fn test_decode_malformed_vertex_line() {
        let text = "0\n2\n1 \"a\" \"\"\n2 b \"\"\n0\n";
        match decode(text) {
            Err(FormatError::MalformedLine {
                line_number,
                content,
                ..
            }) => {
                assert_eq!(4, line_number);
                assert_eq!("2 b \"\"", content);
            }
            other => panic!("expected malformed line, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_bad_counts() {
        assert!(matches!(
            decode("zero\n0\n0\n"),
            Err(FormatError::MalformedLine {
                line_number: 1,
                ..
            })
        ));
        assert!(matches!(
            decode("0\n-2\n0\n"),
            Err(FormatError::MalformedLine {
                line_number: 2,
                ..
            })
        ));
        assert!(matches!(
            decode("0\n1\n1 \"a\" \"\"\n"),
            Err(FormatError::UnexpectedEnd {
                expected: "edge count"
            })
        ));
        assert!(matches!(
            decode("0\n1\n1 \"a\" \"\"\n2\n1 1 3\n"),
            Err(FormatError::UnexpectedEnd {
                expected: "edge line"
            })
        ));
        assert!(matches!(
            decode(""),
            Err(FormatError::UnexpectedEnd {
                expected: "graph kind"
            })
        ));
    }

    #[test]
    fn test_decode_bad_edge_lines() {
        let short = "0\n2\n1 \"a\" \"\"\n2 \"b\" \"\"\n1\n1 2\n";
        assert!(matches!(
            decode(short),
            Err(FormatError::MalformedLine { line_number: 6, .. })
        ));

        let dangling = "0\n2\n1 \"a\" \"\"\n2 \"b\" \"\"\n1\n1 3 4\n";
        assert!(matches!(
            decode(dangling),
            Err(FormatError::DanglingEdge {
                line_number: 6,
                vertex: 3,
                ..
            })
        ));

        let duplicate = "0\n2\n1 \"a\" \"\"\n1 \"b\" \"\"\n0\n";
        assert!(matches!(
            decode(duplicate),
            Err(FormatError::DuplicateVertex {
                line_number: 4,
                id: 1
            })
        ));
    }

    #[test]
    fn test_decode_ignores_trailing_lines() -> Result<(), FormatError> {
        let text = "0\n1\n1 \"a\" \"\"\n0\nwhatever comes here\n";
        let graph = decode(text)?;
        assert_eq!(1, graph.vertex_count());
        assert_eq!(0, graph.edge_count());

        Ok(())
    }
}
