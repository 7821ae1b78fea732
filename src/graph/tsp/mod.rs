use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{graph::Graph, Error, Result};

/// Pheromone trail laid over the distance matrix
mod path;
/// A single tour builder
mod ant;
/// Generations of ants sharing one trail
mod colony;

use colony::AntColony;

/// Closed tour found by the ant colony.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TsmResult {
    /// Visited vertices, the start vertex repeated at the end
    pub vertices: Vec<usize>,
    pub distance: f64,
}

/// Tuning knobs of the ant colony. Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntColonyParams {
    /// Weight of edge shortness in the attractiveness of a way
    pub alpha: f64,
    /// Weight of the pheromone trail in the attractiveness of a way
    pub beta: f64,
    pub initial_pheromone: f64,
    /// Fraction of the trail kept after each ant
    pub evaporation: f64,
    /// Generations without a new best distance before giving up
    pub patience: usize,
    /// Ants per generation, N² when unset
    pub ants: Option<usize>,
}

impl Default for AntColonyParams {
    fn default() -> Self {
        Self {
            alpha: 2.,
            beta: 1.,
            initial_pheromone: 0.2,
            evaporation: 0.75,
            patience: 30,
            ants: None,
        }
    }
}

/// Approximate the shortest closed tour with an ant colony using default parameters.
///
/// <https://en.wikipedia.org/wiki/Ant_colony_optimization_algorithms>
pub fn solve_traveling_salesman_problem(graph: &Graph) -> Result<TsmResult> {
    solve_traveling_salesman_problem_with(graph, &AntColonyParams::default(), &mut thread_rng())
}

/// Ant colony with explicit parameters and source of randomness.
///
/// Generations keep running until `params.patience` of them in a row end on the
/// distance already held as best. A generation that ends on any other distance
/// replaces the best outright.
pub fn solve_traveling_salesman_problem_with<R: Rng + ?Sized>(
    graph: &Graph,
    params: &AntColonyParams,
    rng: &mut R,
) -> Result<TsmResult> {
    let size = graph.size();
    let ants = params.ants.unwrap_or(size * size);
    let mut colony = AntColony::new(graph, *params);
    let mut best = TsmResult {
        vertices: vec![],
        distance: f64::INFINITY,
    };
    let mut steps_without_improvement = params.patience;
    let mut generation = 0;

    while steps_without_improvement > 0 {
        colony.create_ants(ants, rng);
        colony.release_ants(rng);
        let candidate = colony.best_path();
        generation += 1;
        debug!(generation, distance = candidate.distance, "Generation finished");

        if candidate.distance == best.distance {
            steps_without_improvement -= 1;
        } else {
            best = candidate;
        }
    }

    let closed = best.vertices.len() > 1 && best.vertices.first() == best.vertices.last();
    let visited = best.vertices.len() - usize::from(closed);
    if size == 0 || !closed || visited < size {
        return Err(Error::NoHamiltonianTour {
            visited,
            total: size,
        });
    }
    info!(generation, distance = best.distance, "Found tour");

    best.vertices.iter_mut().for_each(|vertex| *vertex += 1);
    Ok(best)
}
