mod astar;
mod best_first;
mod dfs;
mod dijkstra;
pub mod traits;

pub use astar::AStar;
pub use best_first::BestFirst;
pub use dfs::DFS;
pub use dijkstra::Dijkstra;
pub use traits::{PathResult, PathfindingAlgorithm, Search};
