//! Adjacency matrices shared by the unit tests.

use super::Graph;

/// Complete graph: every traversal from vertex 1 is `1..=11` and any tour is shorter than 300.
pub const ELEVEN_VERTICES: &str = "11
0 22 16 10 16 17 11 24 18 12 25
22 0 25 20 15 10 24 19 14 9 23
16 25 0 11 26 22 18 14 10 25 21
10 20 11 0 18 15 12 9 25 22 19
16 15 26 18 0 27 25 23 21 19 17
17 10 22 15 27 0 19 18 17 16 15
11 24 18 12 25 19 0 13 13 13 13
24 19 14 9 23 18 13 0 9 10 11
18 14 10 25 21 17 13 9 0 26 9
12 9 25 22 19 16 13 10 26 0 26
25 23 21 19 17 15 13 11 9 26 0
";

/// Sparse connected graph without a Hamiltonian cycle: 1, 3 and 7 form a dead-end triangle.
pub const SEVEN_VERTICES: &str = "7
0 0 2 0 0 12 8
0 0 0 30 0 29 0
2 0 0 0 0 0 10
0 30 0 0 3 5 0
0 0 0 3 0 4 0
12 29 0 5 4 0 0
8 0 10 0 0 0 0
";

/// Two components: {1, 2, 3} and {4, 5}.
pub const DISCONNECTED: &str = "5
0 4 1 0 0
4 0 2 0 0
1 2 0 0 0
0 0 0 0 7
0 0 0 7 0
";

pub fn graph(matrix: &str) -> Graph {
    Graph::from_reader(matrix.as_bytes()).unwrap()
}
