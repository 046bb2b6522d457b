//! Cell occupancy states for the maze grid.

/// What occupies a single grid cell.
///
/// `Wall` and `InvisibleWall` are both impassable; the latter renders as
/// open floor. The dead-snake variants are written only for the loss frame
/// and never participate in blocking decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    InvisibleWall,
    Free,
    Food,
    Spawn,
    SnakeHead,
    SnakeBody,
    DeadSnakeHead,
    DeadSnakeBody,
}

impl Cell {
    /// Map a maze-file character to a cell, or `None` for anything the
    /// format does not define.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::InvisibleWall),
            ' ' => Some(Cell::Free),
            '&' => Some(Cell::Spawn),
            _ => None,
        }
    }
}
