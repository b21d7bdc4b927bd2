mod breadth_first;
mod depth_first;
pub mod traits;

pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;
pub use traits::ExplorationAlgorithm;
