use std::{fmt, fs, path::Path, str::FromStr};

use super::{cell::Cell, direction::MoveDirection, position::Position};

const BUILTIN: &str = "\
S . . # C
. # . . .
. # . # .
. . . # I
# # . . .
";

#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    start: Position,
    intruder: Position,
    command_center: Option<Position>,
}

impl Grid {
    /// the 5x5 patrol area the bot ships with
    pub fn builtin() -> Self {
        match BUILTIN.parse() {
            Ok(grid) => grid,
            Err(e) => unreachable!("builtin grid is malformed: {e}"),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read map {}: {}", path.display(), e))?;
        contents.parse()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn intruder(&self) -> Position {
        self.intruder
    }

    pub fn command_center(&self) -> Option<Position> {
        self.command_center
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.height && pos.col < self.width {
            Some(self.cells[pos.to_index(self.width)])
        } else {
            None
        }
    }

    /// in bounds and not a wall
    pub fn is_valid(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_walkable)
    }

    pub fn neighbors(&self, pos: Position) -> Vec<(Position, MoveDirection)> {
        pos.neighbors(self.bounds())
            .into_iter()
            .filter(|(p, _)| self.is_valid(*p))
            .collect()
    }

    pub fn positions(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Position::from_index(idx, self.width), cell))
    }

    fn find_unique(cells: &[Cell], width: usize, wanted: Cell) -> eyre::Result<Option<Position>> {
        let mut found = cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == wanted)
            .map(|(idx, _)| Position::from_index(idx, width));

        let first = found.next();
        if let Some(second) = found.next() {
            eyre::bail!(
                "map has more than one '{}' (at {} and {})",
                wanted.as_char(),
                first.unwrap_or(second),
                second
            );
        }
        Ok(first)
    }
}

impl FromStr for Grid {
    type Err = eyre::Report;

    fn from_str(s: &str) -> eyre::Result<Self> {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (line_no, line) in s.lines().enumerate() {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| {
                    Cell::from_char(c).ok_or_else(|| {
                        eyre::eyre!("unknown glyph '{}' on line {}", c, line_no + 1)
                    })
                })
                .collect::<eyre::Result<Vec<_>>>()?;

            if row.is_empty() {
                continue;
            }

            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => eyre::bail!(
                    "row on line {} has {} cells, expected {}",
                    line_no + 1,
                    row.len(),
                    w
                ),
                Some(_) => {}
            }

            cells.extend(row);
            height += 1;
        }

        let Some(width) = width else {
            eyre::bail!("map is empty");
        };

        let start = Self::find_unique(&cells, width, Cell::Start)?
            .ok_or_else(|| eyre::eyre!("map has no start 'S'"))?;
        let intruder = Self::find_unique(&cells, width, Cell::Intruder)?
            .ok_or_else(|| eyre::eyre!("map has no intruder 'I'"))?;
        let command_center = Self::find_unique(&cells, width, Cell::CommandCenter)?;

        Ok(Self {
            cells,
            width,
            height,
            start,
            intruder,
            command_center,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: Vec<String> = row.iter().map(|c| c.as_char().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
