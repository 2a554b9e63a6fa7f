use crate::graph::Graph;

/// Encode a graph into the file format.
///
/// Vertices are written by ascending id. Undirected edges are written in
/// both orientations, so the edge count in the file is twice the number of
/// stored undirected edges.
pub fn encode(graph: &Graph) -> String {
    let symmetric = graph.kind().is_symmetric();
    let mut out = format!("{}\n{}\n", graph.kind().0, graph.vertex_count());

    for (id, vertex) in graph.vertices() {
        out.push_str(&format!(
            "{} \"{}\" \"{}\"\n",
            id, vertex.label, vertex.attribute
        ));
    }

    let mut edge_lines = Vec::with_capacity(graph.edge_count() * 2);
    for (key, weight) in graph.edges() {
        edge_lines.push(format!("{} {} {}", key.0, key.1, weight));
        if symmetric {
            edge_lines.push(format!("{} {} {}", key.1, key.0, weight));
        }
    }

    out.push_str(&format!("{}\n", edge_lines.len()));
    for line in edge_lines {
        out.push_str(&line);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{codec::decode, graph::GraphKind, Error};

    fn sample(kind: GraphKind) -> Result<Graph, Error> {
        let mut graph = Graph::new(kind);
        let a = graph.insert_vertex("Centro", "12")?;
        let b = graph.insert_vertex("Vila Nova", "")?;
        let c = graph.insert_vertex("Porto", "x")?;
        graph.insert_edge(b, a, "4")?;
        graph.insert_edge(b, c, "2.5")?;
        Ok(graph)
    }

    #[test]
    fn test_encode_symmetric() -> Result<(), Error> {
        let expected = "0
3
1 \"Centro\" \"12\"
2 \"Vila Nova\" \"\"
3 \"Porto\" \"x\"
4
1 2 4
2 1 4
2 3 2.5
3 2 2.5
";
        assert_eq!(expected, encode(&sample(GraphKind(0))?));

        Ok(())
    }

    #[test]
    fn test_encode_directed() -> Result<(), Error> {
        let expected = "5
3
1 \"Centro\" \"12\"
2 \"Vila Nova\" \"\"
3 \"Porto\" \"x\"
2
2 1 4
2 3 2.5
";
        assert_eq!(expected, encode(&sample(GraphKind(5))?));

        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), Error> {
        for kind in [GraphKind(0), GraphKind(3), GraphKind(4), GraphKind(9)] {
            let mut graph = sample(kind)?;
            graph.insert_edge(1, 1, "0")?;
            graph.insert_edge(3, 1, "7")?;
            graph.remove_vertex(2)?;
            graph.insert_vertex("Novo", "1e3")?;

            let decoded = decode(&encode(&graph))?;
            assert_eq!(graph, decoded);
            assert_eq!(graph.edge_count(), decoded.edge_count());
        }

        Ok(())
    }

    #[test]
    fn test_round_trip_empty() -> Result<(), Error> {
        let graph = Graph::new(GraphKind(2));
        assert_eq!("2\n0\n0\n", encode(&graph));
        assert_eq!(graph, decode(&encode(&graph))?);

        Ok(())
    }
}
