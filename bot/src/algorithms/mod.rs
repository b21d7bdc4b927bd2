pub mod decision;
pub mod exploration;
pub mod pathfinding;
