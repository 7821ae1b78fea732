use ndarray::prelude::*;

use crate::graph::{Graph, Weight};

/// Distances between vertices plus the pheromone trail the ants leave on them.
#[derive(Debug, Clone)]
pub struct Path {
    distances: Array2<Weight>,
    pheromones: Array2<f64>,
    evaporation: f64,
}

impl Path {
    pub fn new(graph: &Graph, initial_pheromone: f64, evaporation: f64) -> Self {
        Self {
            distances: graph.matrix().to_owned(),
            pheromones: Array2::from_shape_fn(graph.matrix().dim(), |(i, z)| {
                if i == z {
                    0.
                } else {
                    initial_pheromone
                }
            }),
            evaporation,
        }
    }

    pub fn size(&self) -> usize {
        self.distances.nrows()
    }

    pub fn distance(&self, from: usize, to: usize) -> Weight {
        self.distances[[from, to]]
    }

    pub fn pheromone(&self, from: usize, to: usize) -> f64 {
        self.pheromones[[from, to]]
    }

    /// Sum of the edge weights along `road`
    pub fn length(&self, road: &[usize]) -> f64 {
        road.windows(2)
            .map(|step| self.distance(step[0], step[1]) as f64)
            .sum()
    }

    /// Reinforce the edges of `road`, then let the whole trail evaporate.
    pub fn update_pheromones(&mut self, road: &[usize]) {
        self.spread_pheromones(road);
        self.evaporate();
    }

    /// Shorter roads leave more pheromone on each of their steps.
    fn spread_pheromones(&mut self, road: &[usize]) {
        let length = self.length(road);
        if road.len() < 2 || length <= 0. {
            return;
        }
        let deposit = self.size() as f64 / length;
        for step in road.windows(2) {
            self.pheromones[[step[0], step[1]]] += deposit;
        }
    }

    fn evaporate(&mut self) {
        let evaporation = self.evaporation;
        self.pheromones.mapv_inplace(|pheromone| pheromone * evaporation);
    }
}
