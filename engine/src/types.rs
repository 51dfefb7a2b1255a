#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn translate(&self, direction: Direction) -> Self {
        let (row_delta, column_delta) = direction.offset();
        Self::new(self.row + row_delta, self.column + column_delta)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        *other == self.opposite()
    }

    /// (row, column) delta applied per tick. Row 0 is the top of the grid.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// `Outside` is virtual: it is only ever returned for positions beyond the
/// grid bounds and is never stored in a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridValue {
    Empty,
    Snake,
    Food,
    Outside,
}
