//! Graph algorithms over dense weighted adjacency matrices.
//!
//! Vertices are numbered from 1 at every public entry point.

use thiserror::Error;

pub mod graph;
pub mod grid;

pub use graph::{
    mst::least_spanning_tree,
    shortest_path::{shortest_path_between_vertices, shortest_paths_between_all_vertices},
    traversal::{breadth_first_search, depth_first_search},
    tsp::{
        solve_traveling_salesman_problem, solve_traveling_salesman_problem_with, AntColonyParams,
        TsmResult,
    },
    Graph, Weight,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("graph header does not contain a matrix dimension")]
    MissingDimension,

    #[error("graph header asks for {header} vertices, at most {limit} are supported")]
    TooManyVertices { header: String, limit: usize },

    #[error("line {line}: `{token}` is not an integer edge weight")]
    Parse { line: usize, token: String },

    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),

    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("cannot multiply a {left:?} matrix by a {right:?} matrix")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// The spanning tree ran out of frontier edges.
    #[error("graph is disconnected: only {reached} of {total} vertices are reachable from vertex 1")]
    Disconnected { reached: usize, total: usize },

    #[error(
        "it is impossible to solve the traveling salesman problem for this graph \
         (best tour covers {visited} of {total} vertices)"
    )]
    NoHamiltonianTour { visited: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
