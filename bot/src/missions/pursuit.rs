use std::io::Write;
use std::time::{Duration, Instant};

use crate::{
    algorithms::pathfinding::{PathResult, PathfindingAlgorithm, Search},
    grid::Grid,
    render::{Canvas, Paint},
};

use super::pause;

pub struct PursuitMission<P: PathfindingAlgorithm> {
    algorithm: P,
    search_delay: Duration,
    path_delay: Duration,
}

impl<P: PathfindingAlgorithm> PursuitMission<P> {
    pub fn new(algorithm: P, search_delay: Duration, path_delay: Duration) -> Self {
        Self {
            algorithm,
            search_delay,
            path_delay,
        }
    }

    pub fn plan(&self, grid: &Grid) -> (Search, Duration) {
        let planning_start = Instant::now();
        let search = self
            .algorithm
            .find_path(grid, grid.start(), grid.intruder());
        (search, planning_start.elapsed())
    }

    pub async fn run<W: Write>(
        &self,
        grid: &Grid,
        canvas: &mut Canvas<W>,
    ) -> eyre::Result<(Search, PathResult)> {
        log::info!(
            "pursuing intruder at {} with {}",
            grid.intruder(),
            self.algorithm.name()
        );

        let (search, planning_time) = self.plan(grid);
        log::debug!(
            "expanded {} cells in {:?}",
            search.expanded.len(),
            planning_time
        );

        let execution_start = Instant::now();

        for &pos in &search.expanded {
            log::debug!("expanding {}", pos);
            canvas.paint(pos, Paint::Expanded)?;
            pause(self.search_delay).await;
        }

        match &search.path {
            Some(path) => {
                let moves: Vec<_> = search.moves().iter().map(|m| m.as_str()).collect();
                log::debug!("route: {}", moves.join(", "));

                for &pos in path {
                    canvas.paint(pos, Paint::Path)?;
                    pause(self.path_delay).await;
                }
                log::info!("intruder reached in {} moves", moves.len());
            }
            None => {
                log::warn!("intruder at {} is unreachable", grid.intruder());
            }
        }
        canvas.commit()?;

        let result = PathResult::new(&search, planning_time, execution_start.elapsed());
        Ok((search, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::pathfinding::BestFirst;
    use crate::grid::Position;
    use crate::render::CanvasOptions;

    fn mission() -> PursuitMission<BestFirst> {
        PursuitMission::new(BestFirst, Duration::ZERO, Duration::ZERO)
    }

    #[tokio::test]
    async fn path_is_painted_over_expansions() {
        let grid = Grid::builtin();
        let mut canvas = Canvas::new(Vec::new(), &grid, CanvasOptions::default());

        let (search, result) = mission().run(&grid, &mut canvas).await.unwrap();

        assert_eq!(result.expansions, 7);
        assert_eq!(result.steps, Some(7));
        for pos in search.path.unwrap() {
            assert_eq!(canvas.paint_at(pos), Some(Paint::Path), "{pos}");
        }
        // never reached by the greedy search
        assert_eq!(canvas.paint_at(Position::new(1, 0)), Some(Paint::Free));
    }

    #[tokio::test]
    async fn unreachable_intruder_is_not_an_error() {
        let grid: Grid = "S.#..\n..#.I".parse().unwrap();
        let mut canvas = Canvas::new(Vec::new(), &grid, CanvasOptions::default());

        let (search, result) = mission().run(&grid, &mut canvas).await.unwrap();

        assert!(search.path.is_none());
        assert_eq!(result.steps, None);
        assert_eq!(canvas.paint_at(grid.intruder()), Some(Paint::Intruder));
        assert_eq!(canvas.paint_at(grid.start()), Some(Paint::Expanded));
    }
}
