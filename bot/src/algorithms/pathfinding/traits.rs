use std::collections::HashMap;
use std::time::Duration;

use crate::grid::{Grid, MoveDirection, Position};

pub trait PathfindingAlgorithm {
    fn find_path(&self, grid: &Grid, start: Position, target: Position) -> Search;

    fn name(&self) -> &'static str;
}

/// what a pursuit touched, in order, and the route it settled on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub expanded: Vec<Position>,
    /// start and target inclusive; None when the target is unreachable
    pub path: Option<Vec<Position>>,
}

impl Search {
    pub fn moves(&self) -> Vec<MoveDirection> {
        self.path
            .as_deref()
            .unwrap_or_default()
            .windows(2)
            .filter_map(|pair| pair[0].direction_to(pair[1]))
            .collect()
    }
}

pub struct PathResult {
    pub expansions: usize,
    pub steps: Option<usize>,
    pub planning_time: Duration,
    pub execution_time: Duration,
    pub total_time: Duration,
}

impl PathResult {
    pub fn new(search: &Search, planning_time: Duration, execution_time: Duration) -> Self {
        let total_time = planning_time + execution_time;
        Self {
            expansions: search.expanded.len(),
            steps: search.path.as_ref().map(|path| path.len().saturating_sub(1)),
            planning_time,
            execution_time,
            total_time,
        }
    }
}

pub(super) fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    target: Position,
) -> Vec<Position> {
    let mut path = vec![target];
    let mut current = target;

    while current != start {
        match came_from.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
