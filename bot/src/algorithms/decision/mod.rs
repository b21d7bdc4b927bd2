mod minimax;

pub use minimax::{Decision, MAX_DEPTH, Minimax, Risks};
