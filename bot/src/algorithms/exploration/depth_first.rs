use std::collections::HashSet;

use crate::grid::{Grid, MoveDirection, Position};

use super::traits::ExplorationAlgorithm;

/// depth-first patrol; visits in preorder, trying up, down, left, right
pub struct DepthFirst;

impl ExplorationAlgorithm for DepthFirst {
    fn explore(&self, grid: &Grid, start: Position) -> Vec<Position> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start];

        // candidates are checked on pop so the order matches a recursive walk
        while let Some(pos) = stack.pop() {
            if !grid.is_valid(pos) || !visited.insert(pos) {
                continue;
            }
            order.push(pos);

            stack.extend(
                MoveDirection::ALL
                    .into_iter()
                    .rev()
                    .filter_map(|direction| pos.move_in_direction(direction, grid.bounds())),
            );
        }

        order
    }

    fn name(&self) -> &'static str {
        "Depth-First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patrols_builtin_grid_in_preorder() {
        let grid = Grid::builtin();
        let order = DepthFirst.explore(&grid, grid.start());
        let expected: Vec<_> = [
            (0, 0),
            (1, 0),
            (2, 0),
            (3, 0),
            (3, 1),
            (3, 2),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 1),
            (1, 3),
            (1, 4),
            (0, 4),
            (2, 4),
            (3, 4),
            (4, 4),
            (4, 3),
            (4, 2),
        ]
        .into_iter()
        .map(|(r, c)| Position::new(r, c))
        .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn starting_on_a_wall_visits_nothing() {
        let grid = Grid::builtin();
        assert!(DepthFirst.explore(&grid, Position::new(0, 3)).is_empty());
    }

    #[test]
    fn large_open_map_does_not_exhaust_the_stack() {
        let side = 600;
        let mut map = String::with_capacity(side * (side + 1));
        for row in 0..side {
            for col in 0..side {
                map.push(match (row, col) {
                    (0, 0) => 'S',
                    (r, c) if r == side - 1 && c == side - 1 => 'I',
                    _ => '.',
                });
            }
            map.push('\n');
        }
        let grid: Grid = map.parse().unwrap();

        let order = DepthFirst.explore(&grid, grid.start());
        assert_eq!(order.len(), side * side);
        assert_eq!(order[..3], [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]);
    }

    #[test]
    fn stays_inside_its_region() {
        let grid: Grid = "S.#..\n..#.I".parse().unwrap();
        let order = DepthFirst.explore(&grid, grid.start());
        assert_eq!(order.len(), 4);
        assert!(order.iter().all(|pos| pos.col < 2));
    }
}
