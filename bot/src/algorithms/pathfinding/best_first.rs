use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::grid::{Grid, Position};

use super::traits::{PathfindingAlgorithm, Search, reconstruct_path};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    heuristic: usize,
    position: Position,
}

// min-heap on (heuristic, row, col)
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .heuristic
            .cmp(&self.heuristic)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// greedy best-first search, ordered purely by manhattan distance to the target
pub struct BestFirst;

impl PathfindingAlgorithm for BestFirst {
    fn find_path(&self, grid: &Grid, start: Position, target: Position) -> Search {
        let mut heap = BinaryHeap::new();
        let mut visited: HashSet<Position> = HashSet::new();
        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut expanded = Vec::new();

        heap.push(State {
            heuristic: start.manhattan_distance(target),
            position: start,
        });

        while let Some(State { position, .. }) = heap.pop() {
            if position == target {
                return Search {
                    expanded,
                    path: Some(reconstruct_path(&came_from, start, target)),
                };
            }

            if !visited.insert(position) {
                continue;
            }
            expanded.push(position);

            for (neighbor, _) in grid.neighbors(position) {
                if visited.contains(&neighbor) {
                    continue;
                }

                // last push wins, matching the order cells get discovered
                came_from.insert(neighbor, position);
                heap.push(State {
                    heuristic: neighbor.manhattan_distance(target),
                    position: neighbor,
                });
            }
        }

        Search {
            expanded,
            path: None,
        }
    }

    fn name(&self) -> &'static str {
        "Best-First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::pathfinding::traits::checks;

    fn cells(coords: &[(usize, usize)]) -> Vec<Position> {
        coords.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    #[test]
    fn chases_intruder_on_builtin_grid() {
        let grid = Grid::builtin();
        let search = BestFirst.find_path(&grid, grid.start(), grid.intruder());

        assert_eq!(
            search.expanded,
            cells(&[(0, 0), (0, 1), (0, 2), (1, 2), (1, 3), (1, 4), (2, 4)])
        );
        assert_eq!(
            search.path,
            Some(cells(&[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 2),
                (1, 3),
                (1, 4),
                (2, 4),
                (3, 4)
            ]))
        );
        checks::assert_walkable_path(&grid, &search, grid.start(), grid.intruder());
    }

    #[test]
    fn ties_prefer_lower_row() {
        // (1,0) and (0,1) are both one step from (1,1)
        let grid: Grid = "S.\n.I".parse().unwrap();
        let search = BestFirst.find_path(&grid, grid.start(), grid.intruder());
        assert_eq!(search.expanded, cells(&[(0, 0), (0, 1)]));
        assert_eq!(search.path, Some(cells(&[(0, 0), (0, 1), (1, 1)])));
    }

    #[test]
    fn start_on_target_is_a_single_cell_path() {
        let grid = Grid::builtin();
        let search = BestFirst.find_path(&grid, grid.start(), grid.start());
        assert!(search.expanded.is_empty());
        assert_eq!(search.path, Some(vec![grid.start()]));
        assert!(search.moves().is_empty());
    }

    #[test]
    fn unreachable_target_yields_no_path() {
        let grid = checks::walled_off();
        let search = BestFirst.find_path(&grid, grid.start(), grid.intruder());
        assert_eq!(search.path, None);
        assert_eq!(search.expanded.len(), 6);
    }
}
