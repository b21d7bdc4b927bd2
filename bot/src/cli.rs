use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::algorithms::decision::MAX_DEPTH;

#[derive(Parser, Debug)]
#[command(name = "security-bot")]
#[command(about = "Security bot that patrols a grid, chases an intruder and decides how to respond")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Grid file to load (S start, C command center, I intruder, # wall, . free)
    #[arg(long, value_name = "FILE")]
    pub map: Option<PathBuf>,

    /// Delay after each painted cell in milliseconds, for every phase (0 = no delay)
    #[arg(short, long)]
    pub delay: Option<u64>,

    /// Width of a grid cell in terminal columns
    #[arg(long, default_value_t = 6)]
    pub cell_width: usize,

    /// Print one frame per phase instead of animating
    #[arg(long)]
    pub headless: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Full mission: patrol, pursue the intruder, then decide
    Run {
        /// Patrol algorithm
        #[arg(long, value_enum, default_value_t = ExplorationAlgorithm::DepthFirst)]
        patrol: ExplorationAlgorithm,

        /// Pursuit algorithm
        #[arg(long, value_enum, default_value_t = PathfindingAlgorithm::BestFirst)]
        pursuit: PathfindingAlgorithm,

        #[command(flatten)]
        decision: DecisionArgs,
    },

    /// Patrol every reachable cell
    Patrol {
        #[arg(value_enum, default_value_t = ExplorationAlgorithm::DepthFirst)]
        algorithm: ExplorationAlgorithm,
    },

    /// Search a route from the start to the intruder
    Pursue {
        #[arg(value_enum, default_value_t = PathfindingAlgorithm::BestFirst)]
        algorithm: PathfindingAlgorithm,
    },

    /// Decide between attacking and reporting
    Decide {
        #[command(flatten)]
        decision: DecisionArgs,
    },

    /// Run every pursuit algorithm and compare them
    Benchmark,
}

#[derive(ClapArgs, Debug, Clone, Copy)]
pub struct DecisionArgs {
    /// Minimax search depth
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=MAX_DEPTH as i64))]
    pub depth: u32,

    /// Risk of attacking the intruder
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(i32).range(0..))]
    pub risk_attack: i32,

    /// Risk of reporting to the command center
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(i32).range(0..))]
    pub risk_report: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathfindingAlgorithm {
    /// Greedy best-first search on Manhattan distance
    #[value(name = "best-first", alias = "greedy")]
    BestFirst,

    /// A* algorithm with Manhattan distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,

    /// Dijkstra's shortest path algorithm
    Dijkstra,

    /// Depth-First Search
    #[value(name = "dfs")]
    #[allow(clippy::upper_case_acronyms)]
    DFS,
}

impl PathfindingAlgorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::BestFirst, Self::AStar, Self::Dijkstra, Self::DFS].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BestFirst => "Best-First",
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra",
            Self::DFS => "DFS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExplorationAlgorithm {
    /// Recursive depth-first patrol
    #[value(name = "depth-first", alias = "dfs")]
    DepthFirst,

    /// Breadth-first sweep outward from the start
    #[value(name = "breadth-first", alias = "bfs")]
    BreadthFirst,
}
