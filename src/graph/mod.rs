use ndarray::prelude::*;
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    ops::Index,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Depth and breadth first traversal
pub mod traversal;
/// Point-to-point and [all pairs](https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm) shortest paths
pub mod shortest_path;
/// Find the [Minimum Spanning Tree (MST)](https://en.wikipedia.org/wiki/Minimum_spanning_tree)
pub mod mst;
/// Solve the [Traveling Salesman Problem (TSP)](https://en.wikipedia.org/wiki/Travelling_salesman_problem)
pub mod tsp;

#[cfg(test)]
pub(crate) mod fixtures;

/// Edge weight. Zero means there is no edge.
pub type Weight = i64;

/// Largest dimension accepted from a graph header
pub const MAX_VERTICES: usize = 1 << 12;

/// Undirected weighted graph stored as a square adjacency matrix.
///
/// Indexing is 0-based like the underlying matrix, the algorithm entry points
/// take 1-based vertex numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Array2<Weight>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            adjacency: Array2::zeros((0, 0)),
        }
    }
}

impl Graph {
    pub fn from_matrix(adjacency: Array2<Weight>) -> Result<Self> {
        let (rows, cols) = adjacency.dim();
        if rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }
        Ok(Self { adjacency })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading graph from {}", path.display());
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Parse the text format: a header line whose digits give the dimension,
    /// followed by whitespace separated weights in row-major order.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut size: Option<usize> = None;
        let mut weights = vec![];
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            match size {
                None if line.trim().is_empty() => continue,
                None => {
                    let digits = line
                        .chars()
                        .filter(|c| c.is_ascii_digit())
                        .collect::<String>();
                    if digits.is_empty() {
                        return Err(Error::MissingDimension);
                    }
                    match digits.parse::<usize>() {
                        Ok(dimension) if dimension <= MAX_VERTICES => size = Some(dimension),
                        _ => {
                            return Err(Error::TooManyVertices {
                                header: digits,
                                limit: MAX_VERTICES,
                            })
                        }
                    }
                }
                Some(_) => {
                    for token in line.split_whitespace() {
                        weights.push(token.parse::<Weight>().map_err(|_| Error::Parse {
                            line: idx + 1,
                            token: token.to_owned(),
                        })?);
                    }
                }
            }
        }

        let Some(size) = size else {
            return Ok(Self::default());
        };
        let expected = size * size;
        if weights.len() != expected {
            warn!(
                "Expected {} weights for a {}x{} matrix but found {}",
                expected,
                size,
                size,
                weights.len()
            );
            weights.resize(expected, 0);
        }

        let graph = Self::from_matrix(Array2::from_shape_vec((size, size), weights)?)?;
        if !graph.is_symmetric() {
            warn!("Adjacency matrix is not symmetric, edges will be read row by row");
        }
        if graph.adjacency.iter().any(|weight| *weight < 0) {
            warn!("Negative weights are treated as missing edges");
        }
        Ok(graph)
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.adjacency.nrows()
    }

    /// Number of matrix cells
    pub fn total_elements(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn matrix(&self) -> ArrayView2<Weight> {
        self.adjacency.view()
    }

    pub fn is_symmetric(&self) -> bool {
        self.adjacency == self.adjacency.t()
    }

    /// 1-based vertex number check used by the entry points.
    pub(crate) fn contains_vertex(&self, vertex: usize) -> bool {
        (1..=self.size()).contains(&vertex)
    }

    /// Write the graph in [DOT](https://graphviz.org/doc/info/lang.html) format, one line per non-zero cell.
    pub fn write_dot<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "graph dotfile {{")?;
        for ((i, z), weight) in self.adjacency.indexed_iter() {
            if *weight != 0 {
                writeln!(out, "\t{} -- {} [label={}];", i + 1, z + 1, weight)?;
            }
        }
        writeln!(out, "}}")
    }

    /// Export to a Graphviz file, appending a `.dot` extension if it's missing.
    pub fn export_to_dot(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let mut path = path.as_ref().to_path_buf();
        if !path.to_string_lossy().ends_with(".dot") {
            let mut name = path.into_os_string();
            name.push(".dot");
            path = PathBuf::from(name);
        }
        let mut out = BufWriter::new(File::create(&path)?);
        self.write_dot(&mut out)?;
        out.flush()?;
        Ok(path)
    }

    /// Write the graph back out in the format read by [Graph::from_reader].
    pub fn write_matrix<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.size())?;
        write!(out, "{self}")
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_matrix(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

impl Index<[usize; 2]> for Graph {
    type Output = Weight;

    fn index(&self, index: [usize; 2]) -> &Self::Output {
        &self.adjacency[index]
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.adjacency.rows() {
            let row = row
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
