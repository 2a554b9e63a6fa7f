use clap::Parser;
use std::{io, path::PathBuf};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use wgraph::{
    graph::{Graph, GraphKind},
    misc::{LogLevel, Settings, DEFAULT_GRAPH_FILE},
    shell::{initial_graph, Shell},
    Error,
};

/// Interactive editor and analyser for weighted graphs
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(about = "Edit and analyse weighted graphs stored in a text file", long_about = None)]
struct Args {
    /// Graph file to load, save and show
    #[arg(short, long, default_value = DEFAULT_GRAPH_FILE)]
    graph_file: PathBuf,

    /// Save the graph after every successful change
    #[arg(long)]
    autosave: bool,

    /// Start with an empty graph of this kind if the graph file doesn't exist
    #[arg(long, value_name = "KIND")]
    new_kind: Option<i64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: LogLevel,
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Settings {
            graph_file: args.graph_file,
            autosave: args.autosave,
            new_kind: args.new_kind.map(GraphKind),
            log_level: args.log_level,
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<(), Error> {
    let settings = Settings::from(Args::parse());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::from(settings.log_level))
        .with_writer(io::stderr)
        .finish();
    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging disabled: {}", error);
    }

    info!(?settings, "starting wgraph v{}", env!("CARGO_PKG_VERSION"));

    let graph = match initial_graph(&settings) {
        Ok(graph) => graph,
        Err(error) => {
            warn!(%error, "starting with an empty undirected graph");
            eprintln!("{}", error);
            Graph::new(GraphKind::UNDIRECTED)
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(graph, settings, stdin.lock(), stdout.lock());
    shell.run()
}
