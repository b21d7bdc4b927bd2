mod cell;
mod direction;
mod layout;
mod position;

pub use cell::Cell;
pub use direction::MoveDirection;
pub use layout::Grid;
pub use position::Position;
