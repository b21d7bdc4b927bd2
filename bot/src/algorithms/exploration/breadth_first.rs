use std::collections::{HashSet, VecDeque};

use crate::grid::{Grid, Position};

use super::traits::ExplorationAlgorithm;

/// sweeps outward ring by ring from the start
pub struct BreadthFirst;

impl ExplorationAlgorithm for BreadthFirst {
    fn explore(&self, grid: &Grid, start: Position) -> Vec<Position> {
        let mut order = Vec::new();
        if !grid.is_valid(start) {
            return order;
        }

        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);

            for (neighbor, _) in grid.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        order
    }

    fn name(&self) -> &'static str {
        "Breadth-First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::exploration::DepthFirst;

    #[test]
    fn covers_same_cells_as_depth_first() {
        let grid = Grid::builtin();
        let mut bfs = BreadthFirst.explore(&grid, grid.start());
        let mut dfs = DepthFirst.explore(&grid, grid.start());
        assert_eq!(bfs.len(), 18);
        bfs.sort();
        dfs.sort();
        assert_eq!(bfs, dfs);
    }

    #[test]
    fn visits_closer_cells_first() {
        let grid = Grid::builtin();
        let order = BreadthFirst.explore(&grid, grid.start());
        assert_eq!(
            &order[..3],
            &[Position::new(0, 0), Position::new(1, 0), Position::new(0, 1)]
        );
    }
}
