use ndarray::prelude::*;
use std::{cmp::Reverse, collections::BinaryHeap};
use tracing::debug;

use super::{Graph, Weight};
use crate::{Error, Result};

/// Edge leaving the tree built so far.
///
/// Ordered by weight, then by the indices of its endpoints, which makes the
/// first edge found by a row-by-row scan win ties.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
struct FrontierEdge {
    weight: Weight,
    from: usize,
    to: usize,
}

/// Compute the MST with Prim's algorithm in O(E log(V)) time, growing the tree from the first vertex.
///
/// The tree is returned as an adjacency matrix of the same shape as the graph.
pub fn least_spanning_tree(graph: &Graph) -> Result<Array2<Weight>> {
    let size = graph.size();
    let mut tree = Array2::zeros((size, size));
    if size == 0 {
        return Ok(tree);
    }

    let mut in_tree = vec![false; size];
    let mut edge_priority_queue = BinaryHeap::new();

    // Kickstart MST with 1 vertex
    in_tree[0] = true;
    let mut tree_size = 1;
    push_frontier(graph, 0, &in_tree, &mut edge_priority_queue);

    while tree_size < size {
        let Some(Reverse(shortest_edge)) = edge_priority_queue.pop() else {
            return Err(Error::Disconnected {
                reached: tree_size,
                total: size,
            });
        };
        // Both ends were pulled into the tree after this edge was queued
        if in_tree[shortest_edge.to] {
            continue;
        }
        let FrontierEdge { weight, from, to } = shortest_edge;
        tree[[from, to]] = weight;
        tree[[to, from]] = weight;
        in_tree[to] = true;
        tree_size += 1;
        push_frontier(graph, to, &in_tree, &mut edge_priority_queue);
    }

    debug!("Spanning tree weight {}", tree.sum() / 2);
    Ok(tree)
}

fn push_frontier(
    graph: &Graph,
    from: usize,
    in_tree: &[bool],
    edge_priority_queue: &mut BinaryHeap<Reverse<FrontierEdge>>,
) {
    for to in 0..graph.size() {
        let weight = graph[[from, to]];
        if to != from && !in_tree[to] && weight > 0 {
            edge_priority_queue.push(Reverse(FrontierEdge { weight, from, to }));
        }
    }
}
