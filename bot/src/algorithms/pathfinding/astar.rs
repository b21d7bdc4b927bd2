use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::grid::{Grid, Position};

use super::traits::{PathfindingAlgorithm, Search, reconstruct_path};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    f_score: usize,
    g_score: usize,
    position: Position,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct AStar;

impl PathfindingAlgorithm for AStar {
    fn find_path(&self, grid: &Grid, start: Position, target: Position) -> Search {
        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut g_scores: HashMap<Position, usize> = HashMap::new();
        let mut closed_set: HashSet<Position> = HashSet::new();
        let mut expanded = Vec::new();

        g_scores.insert(start, 0);
        open_set.push(State {
            f_score: start.manhattan_distance(target),
            g_score: 0,
            position: start,
        });

        while let Some(State {
            position, g_score, ..
        }) = open_set.pop()
        {
            if position == target {
                return Search {
                    expanded,
                    path: Some(reconstruct_path(&came_from, start, target)),
                };
            }

            if !closed_set.insert(position) {
                continue;
            }

            if g_score > *g_scores.get(&position).unwrap_or(&usize::MAX) {
                continue;
            }
            expanded.push(position);

            for (neighbor, _) in grid.neighbors(position) {
                if closed_set.contains(&neighbor) {
                    continue;
                }

                let tentative_g = g_score + 1;
                let current_g = g_scores.get(&neighbor).copied().unwrap_or(usize::MAX);

                if tentative_g < current_g {
                    g_scores.insert(neighbor, tentative_g);
                    came_from.insert(neighbor, position);

                    open_set.push(State {
                        f_score: tentative_g + neighbor.manhattan_distance(target),
                        g_score: tentative_g,
                        position: neighbor,
                    });
                }
            }
        }

        Search {
            expanded,
            path: None,
        }
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}
