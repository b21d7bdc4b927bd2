use colored::{ColoredString, Colorize};

use crate::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Free,
    Wall,
    Start,
    CommandCenter,
    Intruder,
    Patrolled,
    Expanded,
    Path,
}

impl Paint {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Free => (255, 255, 255),
            Self::Wall => (0, 0, 0),
            Self::Start => (0, 0, 255),
            Self::CommandCenter => (0, 128, 0),
            Self::Intruder => (255, 0, 0),
            Self::Patrolled => (255, 255, 0),
            Self::Expanded => (255, 165, 0),
            Self::Path => (173, 216, 230),
        }
    }

    /// a solid block `width` columns wide
    pub fn block(self, width: usize) -> ColoredString {
        let (r, g, b) = self.rgb();
        " ".repeat(width).on_truecolor(r, g, b)
    }
}

impl From<Cell> for Paint {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Free => Self::Free,
            Cell::Wall => Self::Wall,
            Cell::Start => Self::Start,
            Cell::CommandCenter => Self::CommandCenter,
            Cell::Intruder => Self::Intruder,
        }
    }
}
