#![warn(rust_2018_idioms)]
//#![deny(warnings, missing_docs)]

//! Weighted graph engine: a line based graph file format,
//! an in-memory graph store and a few classic analyses
//! (connectivity, Dijkstra, Prim and greedy coloring)
//! behind an interactive menu.

mod debug;
pub use debug::{
    print_coloring, print_components, print_graph, print_shortest_paths, print_spanning_tree,
    Error,
};

pub mod analysis;
pub mod codec;
pub mod graph;
pub mod input;
pub mod misc;
pub mod shell;
