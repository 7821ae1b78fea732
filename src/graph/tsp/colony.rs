use rand::Rng;

use super::{ant::Ant, path::Path, AntColonyParams, TsmResult};
use crate::graph::Graph;

/// Ants sharing one pheromone trail across iterations.
#[derive(Debug, Clone)]
pub struct AntColony {
    path: Path,
    ants: Vec<Ant>,
    params: AntColonyParams,
}

impl AntColony {
    pub fn new(graph: &Graph, params: AntColonyParams) -> Self {
        Self {
            path: Path::new(graph, params.initial_pheromone, params.evaporation),
            ants: vec![],
            params,
        }
    }

    /// Replace the previous generation with `total` ants placed on random vertices.
    pub fn create_ants<R: Rng + ?Sized>(&mut self, total: usize, rng: &mut R) {
        let size = self.path.size();
        self.ants.clear();
        if size == 0 {
            return;
        }
        self.ants
            .extend((0..total).map(|_| Ant::new(rng.gen_range(0..size), size)));
    }

    /// Every ant walks on the current trail, then each road is laid down in turn.
    pub fn release_ants<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for ant in &mut self.ants {
            ant.run(&self.path, &self.params, rng);
        }
        for ant in &self.ants {
            self.path.update_pheromones(ant.road());
        }
    }

    /// Shortest road of this generation with 0-based vertices, the first one wins ties.
    pub fn best_path(&self) -> TsmResult {
        let mut best = TsmResult {
            vertices: vec![],
            distance: f64::INFINITY,
        };
        for ant in &self.ants {
            let distance = self.path.length(ant.road());
            if distance < best.distance {
                best.distance = distance;
                best.vertices = ant.road().to_vec();
            }
        }
        best
    }
}
