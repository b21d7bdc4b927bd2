#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Wall,
    Start,
    CommandCenter,
    Intruder,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Free),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'C' => Some(Self::CommandCenter),
            'I' => Some(Self::Intruder),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::CommandCenter => 'C',
            Self::Intruder => 'I',
        }
    }

    pub fn is_walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}
