//! Interactive menu around one owned graph.

use std::{
    fs,
    io::{self, BufRead, Write},
    str::FromStr,
};
use tracing::{debug, info, warn};

use crate::{
    analysis::{connected_components, greedy_coloring, minimum_spanning_tree, shortest_paths},
    codec::{load_graph, save_graph, FormatError},
    debug::{print_coloring, print_components, print_graph, print_shortest_paths, print_spanning_tree},
    graph::{EdgeInsertion, Graph, VertexId},
    input::{read_line, read_text, read_value},
    misc::Settings,
    time, Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Load,
    Save,
    InsertVertex,
    InsertEdge,
    RemoveVertex,
    RemoveEdge,
    ShowFile,
    ShowGraph,
    Connectivity,
    Quit,
    ShortestPath,
    SpanningTree,
    Coloring,
}

const MENU: &str = "
Menu:
a) Load graph from file
b) Save graph to file
c) Insert vertex
d) Insert edge
e) Remove vertex
f) Remove edge
g) Show file content
h) Show graph
i) Connectivity
j) Quit
k) Shortest paths (Dijkstra)
l) Minimum spanning tree (Prim)
m) Greedy vertex coloring
";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Invalid option {0:?}")]
pub struct MenuOptionError(pub String);

impl FromStr for MenuOption {
    type Err = MenuOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use MenuOption::*;
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Load),
            "b" => Ok(Save),
            "c" => Ok(InsertVertex),
            "d" => Ok(InsertEdge),
            "e" => Ok(RemoveVertex),
            "f" => Ok(RemoveEdge),
            "g" => Ok(ShowFile),
            "h" => Ok(ShowGraph),
            "i" => Ok(Connectivity),
            "j" => Ok(Quit),
            "k" => Ok(ShortestPath),
            "l" => Ok(SpanningTree),
            "m" => Ok(Coloring),
            _ => Err(MenuOptionError(s.to_string())),
        }
    }
}

/// The graph the shell starts with: the graph file or, if it doesn't exist
/// and a kind was configured, an empty graph of that kind.
pub fn initial_graph(settings: &Settings) -> Result<Graph, Error> {
    match (load_graph(&settings.graph_file), settings.new_kind) {
        (Err(FormatError::Unreadable { ref source, .. }), Some(kind))
            if source.kind() == io::ErrorKind::NotFound =>
        {
            info!(path = ?settings.graph_file, %kind, "graph file missing, starting empty");
            Ok(Graph::new(kind))
        }
        (result, _) => result.map_err(Error::from),
    }
}

pub struct Shell<R, W> {
    graph: Graph,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(graph: Graph, settings: Settings, input: R, output: W) -> Self {
        Shell {
            graph,
            settings,
            input,
            output,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Serve menu options until `Quit` or the end of the input.
    /// Failures of single operations are reported and the loop goes on.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            write!(self.output, "{}", MENU)?;
            let line = match read_line(&mut self.input, &mut self.output, "Option: ")? {
                Some(line) => line,
                None => break,
            };

            let option = match line.parse::<MenuOption>() {
                Ok(option) => option,
                Err(error) => {
                    writeln!(self.output, "{}", error)?;
                    continue;
                }
            };

            if option == MenuOption::Quit {
                break;
            }

            if let Err(error) = self.execute(option) {
                if error.is_end_of_input() {
                    break;
                }
                warn!(?option, %error, "operation failed");
                writeln!(self.output, "Error: {}", error)?;
            }
        }

        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    pub fn execute(&mut self, option: MenuOption) -> Result<(), Error> {
        use MenuOption::*;
        debug!(?option, "executing");

        match option {
            Load => self.load(),
            Save => self.save(),
            InsertVertex => self.insert_vertex(),
            InsertEdge => self.insert_edge(),
            RemoveVertex => self.remove_vertex(),
            RemoveEdge => self.remove_edge(),
            ShowFile => self.show_file(),
            ShowGraph => print_graph(&mut self.output, &self.graph).map_err(Error::from),
            Connectivity => self.connectivity(),
            Quit => Ok(()),
            ShortestPath => self.shortest_path(),
            SpanningTree => self.spanning_tree(),
            Coloring => self.coloring(),
        }
    }

    fn read_id(&mut self, prompt: &str) -> Result<VertexId, Error> {
        read_value(&mut self.input, &mut self.output, prompt).map_err(Error::from)
    }

    fn changed(&mut self) -> Result<(), Error> {
        if self.settings.autosave {
            self.save()?;
        }
        Ok(())
    }

    /// A failed load leaves the current graph untouched.
    fn load(&mut self) -> Result<(), Error> {
        self.graph = load_graph(&self.settings.graph_file)?;
        writeln!(
            self.output,
            "Graph loaded: {} vertices, {} edges.",
            self.graph.vertex_count(),
            self.graph.edge_count()
        )?;
        Ok(())
    }

    fn save(&mut self) -> Result<(), Error> {
        save_graph(&self.settings.graph_file, &self.graph)?;
        writeln!(
            self.output,
            "Graph saved to {}.",
            self.settings.graph_file.display()
        )?;
        Ok(())
    }

    fn insert_vertex(&mut self) -> Result<(), Error> {
        let label = read_text(&mut self.input, &mut self.output, "Label: ")?;
        let attribute = read_text(&mut self.input, &mut self.output, "Attribute: ")?;

        let id = self.graph.insert_vertex(label.as_str(), attribute.as_str())?;
        writeln!(
            self.output,
            "Vertex inserted: id={}, label='{}', attribute='{}'",
            id, label, attribute
        )?;
        self.changed()
    }

    fn insert_edge(&mut self) -> Result<(), Error> {
        let start = self.read_id("Start vertex: ")?;
        let end = self.read_id("End vertex: ")?;
        let weight = read_text(&mut self.input, &mut self.output, "Weight: ")?;

        match self.graph.insert_edge(start, end, weight.trim())? {
            EdgeInsertion::Inserted => writeln!(
                self.output,
                "Edge {} - {} inserted with weight {}.",
                start,
                end,
                weight.trim()
            )?,
            EdgeInsertion::Updated { previous } => writeln!(
                self.output,
                "Edge {} - {} already existed, weight updated from {} to {}.",
                start,
                end,
                previous,
                weight.trim()
            )?,
        }
        self.changed()
    }

    fn remove_vertex(&mut self) -> Result<(), Error> {
        let id = self.read_id("Vertex to remove: ")?;

        let removed = self.graph.remove_vertex(id)?;
        writeln!(
            self.output,
            "Vertex {} ('{}') and its {} edges removed.",
            id, removed.vertex.label, removed.removed_edges
        )?;
        self.changed()
    }

    fn remove_edge(&mut self) -> Result<(), Error> {
        let start = self.read_id("Start vertex: ")?;
        let end = self.read_id("End vertex: ")?;

        let weight = self.graph.remove_edge(start, end)?;
        writeln!(
            self.output,
            "Edge {} - {} (weight {}) removed.",
            start, end, weight
        )?;
        self.changed()
    }

    #[cfg(not(tarpaulin_include))]
    fn show_file(&mut self) -> Result<(), Error> {
        let content = fs::read_to_string(&self.settings.graph_file)?;
        writeln!(self.output, "--- {} ---", self.settings.graph_file.display())?;
        write!(self.output, "{}", content)?;
        if !content.ends_with('\n') {
            writeln!(self.output)?;
        }
        writeln!(self.output, "---")?;
        Ok(())
    }

    fn connectivity(&mut self) -> Result<(), Error> {
        time!(elapsed, components, connected_components(&self.graph));
        debug!(?elapsed, "connectivity analysis");
        print_components(&mut self.output, &components?)?;
        Ok(())
    }

    fn shortest_path(&mut self) -> Result<(), Error> {
        let source = self.read_id("Source vertex: ")?;

        time!(elapsed, paths, shortest_paths(&self.graph, source));
        debug!(?elapsed, source, "shortest paths");
        print_shortest_paths(&mut self.output, &self.graph, &paths?)?;
        Ok(())
    }

    fn spanning_tree(&mut self) -> Result<(), Error> {
        time!(elapsed, tree, minimum_spanning_tree(&self.graph));
        debug!(?elapsed, "minimum spanning tree");
        print_spanning_tree(&mut self.output, &tree?)?;
        Ok(())
    }

    fn coloring(&mut self) -> Result<(), Error> {
        time!(elapsed, coloring, greedy_coloring(&self.graph));
        debug!(?elapsed, "greedy coloring");
        print_coloring(&mut self.output, &self.graph, &coloring)?;
        Ok(())
    }
}
