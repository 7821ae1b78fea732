use rand::Rng;

use super::{path::Path, AntColonyParams};

/// A single tour under construction.
#[derive(Debug, Clone)]
pub struct Ant {
    road: Vec<usize>,
    visited: Vec<bool>,
    possible_ways: Vec<usize>,
}

impl Ant {
    pub fn new(start: usize, size: usize) -> Self {
        let mut visited = vec![false; size];
        visited[start] = true;
        Self {
            road: vec![start],
            visited,
            possible_ways: Vec::with_capacity(size),
        }
    }

    pub fn road(&self) -> &[usize] {
        &self.road
    }

    /// Walk until every reachable vertex is visited, then return to the start if there is an edge back.
    pub fn run<R: Rng + ?Sized>(&mut self, path: &Path, params: &AntColonyParams, rng: &mut R) {
        while self.can_move(path) {
            let current = self.current();
            let mut chances = self
                .possible_ways
                .iter()
                .map(|&next| {
                    let path_factor = (path.distance(current, next) as f64)
                        .powf(params.alpha)
                        .recip();
                    let pheromone_factor = path.pheromone(current, next).powf(params.beta);
                    (next, path_factor * pheromone_factor)
                })
                .collect::<Vec<_>>();

            let wish_sum = chances.iter().map(|(_, wish)| wish).sum::<f64>();
            if wish_sum > 0. && wish_sum.is_finite() {
                chances.iter_mut().for_each(|(_, wish)| *wish /= wish_sum);
            } else {
                // The trail evaporated to nothing, every way is as good as another
                let uniform = (chances.len() as f64).recip();
                chances.iter_mut().for_each(|(_, wish)| *wish = uniform);
            }

            let Some(next) = choose_direction(&mut chances, rng.gen_range(0.0..=1.0)) else {
                break;
            };
            self.visited[next] = true;
            self.road.push(next);
        }

        let (start, last) = (self.road[0], self.current());
        if path.distance(last, start) > 0 {
            self.road.push(start);
        }
    }

    fn current(&self) -> usize {
        self.road[self.road.len() - 1]
    }

    fn can_move(&mut self, path: &Path) -> bool {
        let current = self.current();
        self.possible_ways.clear();
        self.possible_ways.extend(
            (0..path.size())
                .filter(|&next| next != current && !self.visited[next])
                .filter(|&next| path.distance(current, next) > 0),
        );
        !self.possible_ways.is_empty()
    }
}

/// Sort ways by ascending probability and take the first one more likely than `draw`,
/// falling back to the most likely way.
fn choose_direction(chances: &mut [(usize, f64)], draw: f64) -> Option<usize> {
    chances.sort_by(|a, b| a.1.total_cmp(&b.1));
    chances
        .iter()
        .find(|(_, probability)| draw < *probability)
        .or_else(|| chances.last())
        .map(|(next, _)| *next)
}
