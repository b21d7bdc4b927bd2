mod algorithms;
mod cli;
mod grid;
mod logging;
mod missions;
mod render;

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use clap::Parser;
use eyre::Result;
use log::{debug, info};

use algorithms::{
    decision::{Minimax, Risks},
    exploration, pathfinding,
};
use cli::{Args, Command, DecisionArgs, ExplorationAlgorithm, PathfindingAlgorithm};
use grid::{Grid, Position};
use logging::Logger;
use missions::{DecisionMission, PatrolMission, PursuitMission, Timings};
use render::{Canvas, CanvasOptions};

#[macros::restores_cursor]
#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    info!("security bot online");

    let grid = load_grid(args.map.as_deref())?;
    debug!(
        "{}x{} grid: start {}, intruder {}, command center {}",
        grid.height(),
        grid.width(),
        grid.start(),
        grid.intruder(),
        grid.command_center()
            .map_or_else(|| "none".to_string(), |pos| pos.to_string())
    );
    let timings = args.delay.map(Timings::uniform).unwrap_or_default();
    debug!("timings: {:?}", timings);

    let stdout = io::stdout();
    let options = CanvasOptions {
        cell_width: args.cell_width,
        animate: !args.headless && stdout.is_terminal(),
    };
    let mut canvas = Canvas::new(stdout, &grid, options);

    match args.command {
        Command::Run {
            patrol: patrol_algorithm,
            pursuit,
            decision,
        } => {
            canvas.present()?;
            patrol(patrol_algorithm, &grid, &mut canvas, timings).await?;
            pursue(pursuit, &grid, &mut canvas, timings).await?;
            decide(decision, &mut canvas)?;
        }
        Command::Patrol { algorithm } => {
            canvas.present()?;
            patrol(algorithm, &grid, &mut canvas, timings).await?;
        }
        Command::Pursue { algorithm } => {
            canvas.present()?;
            let result = pursue(algorithm, &grid, &mut canvas, timings).await?;
            print_result(&result);
        }
        Command::Decide { decision } => {
            decide(decision, &mut canvas)?;
        }
        Command::Benchmark => {
            run_benchmark(&grid, &mut canvas, timings).await?;
        }
    }

    Ok(())
}

fn load_grid(map: Option<&Path>) -> Result<Grid> {
    match map {
        Some(path) => {
            info!("loading map: {}", path.display());
            Grid::load(path)
        }
        None => {
            debug!("using builtin grid");
            Ok(Grid::builtin())
        }
    }
}

// ========== Phases ==========

async fn patrol<W: Write>(
    algorithm: ExplorationAlgorithm,
    grid: &Grid,
    canvas: &mut Canvas<W>,
    timings: Timings,
) -> Result<Vec<Position>> {
    match algorithm {
        ExplorationAlgorithm::DepthFirst => {
            PatrolMission::new(exploration::DepthFirst, timings.patrol)
                .run(grid, canvas)
                .await
        }
        ExplorationAlgorithm::BreadthFirst => {
            PatrolMission::new(exploration::BreadthFirst, timings.patrol)
                .run(grid, canvas)
                .await
        }
    }
}

async fn pursue<W: Write>(
    algorithm: PathfindingAlgorithm,
    grid: &Grid,
    canvas: &mut Canvas<W>,
    timings: Timings,
) -> Result<pathfinding::PathResult> {
    let (_, result) = match algorithm {
        PathfindingAlgorithm::BestFirst => {
            PursuitMission::new(pathfinding::BestFirst, timings.search, timings.path)
                .run(grid, canvas)
                .await?
        }
        PathfindingAlgorithm::AStar => {
            PursuitMission::new(pathfinding::AStar, timings.search, timings.path)
                .run(grid, canvas)
                .await?
        }
        PathfindingAlgorithm::Dijkstra => {
            PursuitMission::new(pathfinding::Dijkstra, timings.search, timings.path)
                .run(grid, canvas)
                .await?
        }
        PathfindingAlgorithm::DFS => {
            PursuitMission::new(pathfinding::DFS, timings.search, timings.path)
                .run(grid, canvas)
                .await?
        }
    };
    Ok(result)
}

fn decide<W: Write>(args: DecisionArgs, canvas: &mut Canvas<W>) -> Result<()> {
    let risks = Risks {
        attack: args.risk_attack,
        report: args.risk_report,
    };
    DecisionMission::new(Minimax::new(args.depth, risks)).run(canvas)?;
    Ok(())
}

async fn run_benchmark<W: Write>(
    grid: &Grid,
    canvas: &mut Canvas<W>,
    timings: Timings,
) -> Result<()> {
    info!("benchmarking pursuit algorithms");

    let mut completed_results = Vec::new();

    for algorithm in PathfindingAlgorithm::all() {
        info!("testing {}", algorithm.name());

        canvas.reset(grid);
        canvas.present()?;
        let result = pursue(algorithm, grid, canvas, timings).await?;
        print_result(&result);
        completed_results.push((algorithm.name(), result));
    }

    print_benchmark_summary(&completed_results);
    Ok(())
}

// ========== Utilities ==========

fn format_steps(steps: Option<usize>) -> String {
    steps.map_or_else(|| "-".to_string(), |s| s.to_string())
}

fn print_result(result: &pathfinding::PathResult) {
    info!(
        "expanded {} cells, route of {} moves ({:?})",
        result.expansions,
        format_steps(result.steps),
        result.total_time
    );
    debug!("planning: {:?}", result.planning_time);
    debug!("animation: {:?}", result.execution_time);
}

fn print_benchmark_summary(results: &[(&str, pathfinding::PathResult)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<12} {:>9}  {:>6}  {:>12}",
        "algorithm", "expanded", "steps", "plan"
    );
    info!("{:-<45}", "");

    for (name, result) in results {
        info!(
            "{:<12} {:>9}  {:>6}  {:>12?}",
            name,
            result.expansions,
            format_steps(result.steps),
            result.planning_time,
        );
    }

    if let Some((name, result)) = results
        .iter()
        .filter(|(_, r)| r.steps.is_some())
        .min_by_key(|(_, r)| (r.steps, r.expansions))
    {
        info!(
            "\nshortest: {} ({} moves, {} expanded)",
            name,
            format_steps(result.steps),
            result.expansions
        );
    }

    if let Some((name, result)) = results.iter().min_by_key(|(_, r)| r.planning_time) {
        info!("fastest: {} ({:?})", name, result.planning_time);
    }
}

#[cfg(test)]
mod tests {
    use colored::Colorize;

    use super::*;
    use render::Paint;

    fn headless(grid: &Grid) -> Canvas<Vec<u8>> {
        Canvas::new(Vec::new(), grid, CanvasOptions::default())
    }

    fn default_decision() -> DecisionArgs {
        DecisionArgs {
            depth: 2,
            risk_attack: 30,
            risk_report: 10,
        }
    }

    #[tokio::test]
    async fn full_mission_layers_its_phases() {
        let grid = Grid::builtin();
        let mut canvas = headless(&grid);
        let timings = Timings::uniform(0);

        canvas.present().unwrap();
        let order = patrol(ExplorationAlgorithm::DepthFirst, &grid, &mut canvas, timings)
            .await
            .unwrap();
        let result = pursue(PathfindingAlgorithm::BestFirst, &grid, &mut canvas, timings)
            .await
            .unwrap();
        decide(default_decision(), &mut canvas).unwrap();

        assert_eq!(order.len(), 18);
        assert_eq!(result.steps, Some(7));

        // route cells end light blue, the rest of the patrol stays yellow
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 2), (1, 3), (1, 4), (2, 4), (3, 4)] {
            assert_eq!(canvas.paint_at(Position::new(row, col)), Some(Paint::Path));
        }
        for (row, col) in [(1, 0), (3, 2), (0, 4), (4, 2)] {
            assert_eq!(canvas.paint_at(Position::new(row, col)), Some(Paint::Patrolled));
        }
        assert_eq!(canvas.paint_at(Position::new(3, 3)), Some(Paint::Wall));

        let out = String::from_utf8(canvas.into_inner()).unwrap();
        // initial frame plus one per phase
        assert_eq!(out.matches("AI Security Bot Simulation").count(), 4);
        assert_eq!(out.matches("Decision: Bot chooses to ATTACK!").count(), 1);
        assert!(out.trim_end().ends_with(
            &"Decision: Bot chooses to ATTACK!"
                .green()
                .bold()
                .to_string()
        ));
    }

    #[tokio::test]
    async fn benchmark_runs_every_pursuit_from_a_clean_grid() {
        let grid = Grid::builtin();
        let mut canvas = headless(&grid);

        run_benchmark(&grid, &mut canvas, Timings::uniform(0))
            .await
            .unwrap();

        // the last run (DFS) starts from reset paints, so nothing it skipped is orange
        assert_eq!(canvas.paint_at(Position::new(0, 4)), Some(Paint::CommandCenter));
        let out = String::from_utf8(canvas.into_inner()).unwrap();
        let runs = PathfindingAlgorithm::all().count();
        assert_eq!(out.matches("AI Security Bot Simulation").count(), runs * 2);
        assert!(!out.contains("Decision: Bot"));
    }
}
