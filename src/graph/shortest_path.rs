use ndarray::prelude::*;

use super::{Graph, Weight};

/// Distance between the 1-based vertices `from` and `to`.
///
/// Runs one relaxation sweep per vertex, always continuing from the closest
/// unvisited vertex. When only unreached vertices remain, the sweep restarts
/// from one of them at distance 0 so that it always finishes after exactly
/// `graph.size()` rounds.
///
/// Returns 0 when either vertex is out of range or `to` is unreachable from `from`.
pub fn shortest_path_between_vertices(graph: &Graph, from: usize, to: usize) -> Weight {
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return 0;
    }
    let (from, to) = (from - 1, to - 1);
    let size = graph.size();
    let mut visited = vec![false; size];
    let mut reached = vec![false; size];
    let mut distance: Vec<Option<Weight>> = vec![None; size];
    distance[from] = Some(0);
    reached[from] = true;
    let mut current = from;

    for _ in 0..size {
        let current_distance = distance[current].unwrap_or_default();
        for neighbor in 0..size {
            let weight = graph[[current, neighbor]];
            if visited[neighbor] || weight <= 0 {
                continue;
            }
            let candidate = current_distance.saturating_add(weight);
            if distance[neighbor].map_or(true, |known| known > candidate) {
                distance[neighbor] = Some(candidate);
                reached[neighbor] = reached[current];
            }
        }
        visited[current] = true;

        let Some(first_unvisited) = visited.iter().position(|v| !v) else {
            break;
        };
        current = first_unvisited;
        for candidate in first_unvisited..size {
            if visited[candidate] {
                continue;
            }
            let closer = match (distance[candidate], distance[current]) {
                (_, None) => true,
                (Some(candidate), Some(current)) => candidate < current,
                (None, Some(_)) => false,
            };
            if closer {
                current = candidate;
            }
        }
        distance[current].get_or_insert(0);
    }

    if reached[to] {
        distance[to].unwrap_or_default()
    } else {
        0
    }
}

/// Distances between every pair of vertices, `None` where there is no path.
///
/// <https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm>
pub fn shortest_paths_between_all_vertices(graph: &Graph) -> Array2<Option<Weight>> {
    let mut distance = Array2::from_shape_fn(graph.matrix().dim(), |(i, z)| {
        let weight = graph[[i, z]];
        if i == z {
            Some(0)
        } else if weight > 0 {
            Some(weight)
        } else {
            None
        }
    });

    let size = graph.size();
    for k in 0..size {
        for i in 0..size {
            let Some(to_k) = distance[[i, k]] else {
                continue;
            };
            for j in 0..size {
                let Some(from_k) = distance[[k, j]] else {
                    continue;
                };
                let through_k = to_k.saturating_add(from_k);
                let cell = &mut distance[[i, j]];
                *cell = Some(cell.map_or(through_k, |known| known.min(through_k)));
            }
        }
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::{graph, DISCONNECTED, ELEVEN_VERTICES, SEVEN_VERTICES};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fixture_distances() {
        assert_eq!(
            shortest_path_between_vertices(&graph(ELEVEN_VERTICES), 1, 5),
            16
        );
        assert_eq!(
            shortest_path_between_vertices(&graph(SEVEN_VERTICES), 1, 4),
            17
        );
        assert_eq!(
            shortest_path_between_vertices(&graph(SEVEN_VERTICES), 2, 7),
            49
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        for fixture in [ELEVEN_VERTICES, SEVEN_VERTICES, DISCONNECTED] {
            let graph = graph(fixture);
            for a in 1..=graph.size() {
                for b in 1..=graph.size() {
                    assert_eq!(
                        shortest_path_between_vertices(&graph, a, b),
                        shortest_path_between_vertices(&graph, b, a),
                        "{a} -> {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_same_vertex() {
        assert_eq!(
            shortest_path_between_vertices(&graph(SEVEN_VERTICES), 3, 3),
            0
        );
    }

    #[test]
    fn test_unreachable_is_zero() {
        let graph = graph(DISCONNECTED);
        assert_eq!(shortest_path_between_vertices(&graph, 1, 2), 3);
        assert_eq!(shortest_path_between_vertices(&graph, 4, 5), 7);
        assert_eq!(shortest_path_between_vertices(&graph, 1, 4), 0);
        assert_eq!(shortest_path_between_vertices(&graph, 1, 5), 0);
        assert_eq!(shortest_path_between_vertices(&graph, 4, 1), 0);
    }

    #[test]
    fn test_out_of_range_is_zero() {
        let graph = graph(SEVEN_VERTICES);
        assert_eq!(shortest_path_between_vertices(&graph, 0, 4), 0);
        assert_eq!(shortest_path_between_vertices(&graph, 1, 8), 0);
    }

    #[test]
    fn test_all_pairs_fixture_row() {
        let distance = shortest_paths_between_all_vertices(&graph(SEVEN_VERTICES));
        assert_eq!(
            distance.row(0).to_vec(),
            [0, 41, 2, 17, 16, 12, 8].map(Some)
        );
        assert_eq!(
            distance.row(1).to_vec(),
            [41, 0, 43, 30, 33, 29, 49].map(Some)
        );
    }

    #[test]
    fn test_all_pairs_agrees_with_point_to_point() {
        for fixture in [ELEVEN_VERTICES, SEVEN_VERTICES] {
            let graph = graph(fixture);
            let distance = shortest_paths_between_all_vertices(&graph);
            for ((i, z), cell) in distance.indexed_iter() {
                assert_eq!(
                    *cell,
                    Some(shortest_path_between_vertices(&graph, i + 1, z + 1))
                );
            }
        }
    }

    #[test]
    fn test_all_pairs_unreachable_is_none() {
        let distance = shortest_paths_between_all_vertices(&graph(DISCONNECTED));
        assert_eq!(distance.diag().to_vec(), [Some(0); 5]);
        assert_eq!(distance[[0, 1]], Some(3));
        assert_eq!(distance[[0, 3]], None);
        assert_eq!(distance[[4, 2]], None);
        assert_eq!(distance[[4, 3]], Some(7));
    }

    #[test]
    fn test_huge_weights_saturate() {
        let huge = Weight::MAX / 2 + 10;
        let graph = Graph::from_matrix(array![[0, huge, 0], [huge, 0, huge], [0, huge, 0]]).unwrap();
        assert_eq!(shortest_path_between_vertices(&graph, 1, 2), huge);
        assert_eq!(shortest_path_between_vertices(&graph, 1, 3), Weight::MAX);
        let distance = shortest_paths_between_all_vertices(&graph);
        assert_eq!(distance[[0, 2]], Some(Weight::MAX));
        assert_eq!(distance[[2, 0]], Some(Weight::MAX));
    }

    #[test]
    fn test_all_pairs_of_empty_graph() {
        assert!(shortest_paths_between_all_vertices(&Graph::default()).is_empty());
    }
}
