use std::collections::VecDeque;

use super::Graph;

/// Depth first traversal from the 1-based `start` vertex.
///
/// Neighbors are pushed from the highest index to the lowest so that they are
/// popped, and therefore visited, in ascending order. An out of range `start`
/// yields an empty traversal.
pub fn depth_first_search(graph: &Graph, start: usize) -> Vec<usize> {
    if !graph.contains_vertex(start) {
        return vec![];
    }
    let mut order = Vec::with_capacity(graph.size());
    let mut visited = vec![false; graph.size()];
    let mut stack = vec![start - 1];
    visited[start - 1] = true;

    while let Some(current) = stack.pop() {
        order.push(current + 1);
        for neighbor in (0..graph.size()).rev() {
            if graph[[current, neighbor]] > 0 && !visited[neighbor] {
                visited[neighbor] = true;
                stack.push(neighbor);
            }
        }
    }
    order
}

/// Breadth first traversal from the 1-based `start` vertex, neighbors in ascending order.
pub fn breadth_first_search(graph: &Graph, start: usize) -> Vec<usize> {
    if !graph.contains_vertex(start) {
        return vec![];
    }
    let mut order = Vec::with_capacity(graph.size());
    let mut visited = vec![false; graph.size()];
    let mut queue = VecDeque::from([start - 1]);
    visited[start - 1] = true;

    while let Some(current) = queue.pop_front() {
        order.push(current + 1);
        for neighbor in 0..graph.size() {
            if graph[[current, neighbor]] > 0 && !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::{graph, DISCONNECTED, ELEVEN_VERTICES, SEVEN_VERTICES};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complete_graph_is_visited_in_order() {
        let graph = graph(ELEVEN_VERTICES);
        let expected = (1..=11).collect::<Vec<_>>();
        assert_eq!(breadth_first_search(&graph, 1), expected);
        assert_eq!(depth_first_search(&graph, 1), expected);
    }

    #[test]
    fn test_sparse_graph_order() {
        let graph = graph(SEVEN_VERTICES);
        assert_eq!(breadth_first_search(&graph, 1), [1, 3, 6, 7, 2, 4, 5]);
        assert_eq!(depth_first_search(&graph, 1), [1, 3, 6, 2, 4, 5, 7]);
    }

    #[test]
    fn test_other_start_vertex() {
        let graph = graph(SEVEN_VERTICES);
        assert_eq!(breadth_first_search(&graph, 4), [4, 2, 5, 6, 1, 3, 7]);
        assert_eq!(depth_first_search(&graph, 4), [4, 2, 5, 6, 1, 3, 7]);
    }

    #[test]
    fn test_unreachable_vertices_are_skipped() {
        let graph = graph(DISCONNECTED);
        assert_eq!(breadth_first_search(&graph, 2), [2, 1, 3]);
        assert_eq!(depth_first_search(&graph, 5), [5, 4]);
    }

    #[test]
    fn test_out_of_range_start() {
        let graph = graph(SEVEN_VERTICES);
        assert!(breadth_first_search(&graph, 0).is_empty());
        assert!(depth_first_search(&graph, 8).is_empty());
        assert!(depth_first_search(&Graph::default(), 1).is_empty());
    }
}
