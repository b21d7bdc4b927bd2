use std::fmt;

use super::direction::MoveDirection;

/// ordered by row, then column; searches rely on this for tie-breaking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn move_in_direction(
        self,
        direction: MoveDirection,
        bounds: (usize, usize),
    ) -> Option<Self> {
        let (height, width) = bounds;
        match direction {
            MoveDirection::Up if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            MoveDirection::Down if self.row + 1 < height => Some(Self::new(self.row + 1, self.col)),
            MoveDirection::Left if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            MoveDirection::Right if self.col + 1 < width => Some(Self::new(self.row, self.col + 1)),
            _ => None,
        }
    }

    pub fn neighbors(self, bounds: (usize, usize)) -> Vec<(Self, MoveDirection)> {
        MoveDirection::ALL
            .into_iter()
            .filter_map(|dir| self.move_in_direction(dir, bounds).map(|pos| (pos, dir)))
            .collect()
    }

    /// direction that takes `self` one step to `other`, if they are adjacent
    pub fn direction_to(self, other: Self) -> Option<MoveDirection> {
        match (
            other.row as isize - self.row as isize,
            other.col as isize - self.col as isize,
        ) {
            (-1, 0) => Some(MoveDirection::Up),
            (1, 0) => Some(MoveDirection::Down),
            (0, -1) => Some(MoveDirection::Left),
            (0, 1) => Some(MoveDirection::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_up_down_left_right() {
        let dirs: Vec<_> = Position::new(1, 1)
            .neighbors((3, 3))
            .into_iter()
            .map(|(_, dir)| dir)
            .collect();
        assert_eq!(dirs, MoveDirection::ALL);
    }

    #[test]
    fn neighbors_clip_at_edges() {
        let corner: Vec<_> = Position::new(0, 0)
            .neighbors((5, 5))
            .into_iter()
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(corner, vec![Position::new(1, 0), Position::new(0, 1)]);

        let far: Vec<_> = Position::new(4, 4)
            .neighbors((5, 5))
            .into_iter()
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(far, vec![Position::new(3, 4), Position::new(4, 3)]);
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Position::new(0, 4) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn direction_between_adjacent_cells() {
        let origin = Position::new(2, 2);
        assert_eq!(origin.direction_to(Position::new(1, 2)), Some(MoveDirection::Up));
        assert_eq!(origin.direction_to(Position::new(2, 3)), Some(MoveDirection::Right));
        assert_eq!(origin.direction_to(Position::new(3, 3)), None);
        assert_eq!(origin.manhattan_distance(Position::new(0, 4)), 4);
    }
}
