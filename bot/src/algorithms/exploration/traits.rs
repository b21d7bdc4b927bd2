use crate::grid::{Grid, Position};

pub trait ExplorationAlgorithm {
    /// every cell reachable from `start`, in the order it was first visited
    fn explore(&self, grid: &Grid, start: Position) -> Vec<Position>;

    fn name(&self) -> &'static str;
}
