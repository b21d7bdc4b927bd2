use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::grid::{Grid, Position};

use super::traits::{PathfindingAlgorithm, Search, reconstruct_path};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: usize,
    position: Position,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct Dijkstra;

impl PathfindingAlgorithm for Dijkstra {
    fn find_path(&self, grid: &Grid, start: Position, target: Position) -> Search {
        let mut heap = BinaryHeap::new();
        let mut distances: HashMap<Position, usize> = HashMap::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut expanded = Vec::new();

        heap.push(State {
            cost: 0,
            position: start,
        });
        distances.insert(start, 0);

        while let Some(State { cost, position }) = heap.pop() {
            if position == target {
                return Search {
                    expanded,
                    path: Some(reconstruct_path(&came_from, start, target)),
                };
            }

            if cost > *distances.get(&position).unwrap_or(&usize::MAX) {
                continue;
            }
            expanded.push(position);

            for (neighbor, _) in grid.neighbors(position) {
                let new_cost = cost + 1;
                let current_dist = distances.get(&neighbor).copied().unwrap_or(usize::MAX);

                if new_cost < current_dist {
                    distances.insert(neighbor, new_cost);
                    came_from.insert(neighbor, position);
                    heap.push(State {
                        cost: new_cost,
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
        "Dijkstra"
    }
}
