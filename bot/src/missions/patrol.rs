use std::io::Write;
use std::time::Duration;

use crate::{
    algorithms::exploration::ExplorationAlgorithm,
    grid::{Grid, Position},
    render::{Canvas, Paint},
};

use super::pause;

pub struct PatrolMission<E: ExplorationAlgorithm> {
    algorithm: E,
    delay: Duration,
}

impl<E: ExplorationAlgorithm> PatrolMission<E> {
    pub fn new(algorithm: E, delay: Duration) -> Self {
        Self { algorithm, delay }
    }

    pub async fn run<W: Write>(
        &self,
        grid: &Grid,
        canvas: &mut Canvas<W>,
    ) -> eyre::Result<Vec<Position>> {
        log::info!("patrolling with {}", self.algorithm.name());

        let order = self.algorithm.explore(grid, grid.start());

        for (step, &pos) in order.iter().enumerate() {
            log::debug!("patrol {}/{}: {}", step + 1, order.len(), pos);
            canvas.paint(pos, Paint::Patrolled)?;
            pause(self.delay).await;
        }
        canvas.commit()?;

        log::info!("patrol covered {} cells", order.len());
        Ok(order)
    }
}
