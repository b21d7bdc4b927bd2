use std::collections::{HashMap, HashSet};

use crate::grid::{Grid, Position};

use super::traits::{PathfindingAlgorithm, Search, reconstruct_path};

#[allow(clippy::upper_case_acronyms)]
pub struct DFS;

impl PathfindingAlgorithm for DFS {
    fn find_path(&self, grid: &Grid, start: Position, target: Position) -> Search {
        let mut visited = HashSet::new();
        let mut came_from = HashMap::new();
        let mut expanded = Vec::new();
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(current) = stack.pop() {
            if current == target {
                return Search {
                    expanded,
                    path: Some(reconstruct_path(&came_from, start, target)),
                };
            }
            expanded.push(current);

            for (neighbor, _) in grid.neighbors(current) {
                if visited.insert(neighbor) {
                    came_from.insert(neighbor, current);
                    stack.push(neighbor);
                }
            }
        }

        Search {
            expanded,
            path: None,
        }
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}
