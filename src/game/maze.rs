//! The maze board: cell occupancy, blocking queries, and snake movement.

use super::cell::Cell;
use super::snake::{Direction, Position, Snake};
use rand::Rng;
use std::io;

/// The full board plus everything that lives on it.
///
/// The grid's cell marks are the source of truth for rendering; the snake
/// deque is the source of truth for movement. `update` keeps them in step.
#[derive(Debug, Clone)]
pub struct Maze {
    pub rows: usize,
    pub cols: usize,
    /// Cell occupancy, indexed `[row][col]`.
    pub grid: Vec<Vec<Cell>>,
    /// Respawn position; follows the snake's head as rounds progress.
    pub spawn: Position,
    /// Current food pellet (meaningful while a `Food` cell is on the board).
    pub food: Position,
    pub snake: Snake,
}

impl Default for Maze {
    /// An empty placeholder board, replaced by `from_chars`.
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            spawn: Position::new(0, 0),
            food: Position::new(0, 0),
            snake: Snake::new(Position::new(0, 0)),
        }
    }
}

impl Maze {
    /// Build a board from a rectangular character grid.
    ///
    /// Exactly one spawn cell (`&`) must be designated; if the grid marks
    /// several, the last one wins. Unknown characters are rejected.
    pub fn from_chars(cells: &[Vec<char>]) -> io::Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, |line| line.len());
        if rows == 0 || cols == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "maze has no cells",
            ));
        }

        let mut grid = vec![vec![Cell::Free; cols]; rows];
        let mut spawn: Option<Position> = None;

        for (row, line) in cells.iter().enumerate() {
            if line.len() != cols {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("maze row {} has {} columns, expected {}", row, line.len(), cols),
                ));
            }
            for (col, &c) in line.iter().enumerate() {
                let cell = Cell::from_char(c).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("unknown maze character '{}' at row {}, column {}", c, row, col),
                    )
                })?;
                if cell == Cell::Spawn {
                    spawn = Some(Position::new(row, col));
                }
                grid[row][col] = cell;
            }
        }

        let spawn = spawn.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "maze has no spawn cell ('&')")
        })?;

        Ok(Self {
            rows,
            cols,
            grid,
            spawn,
            // Placeholder until the first add_food call
            food: Position::new(0, 0),
            snake: Snake::new(spawn),
        })
    }

    /// Overwrite a single cell.
    pub fn fill(&mut self, pos: Position, cell: Cell) {
        self.grid[pos.row][pos.col] = cell;
    }

    /// The arithmetic neighbor of `pos` one step in `direction`.
    ///
    /// Saturates at the top/left edges; callers check blocking first.
    pub fn move_to(&self, pos: Position, direction: Direction) -> Position {
        match direction {
            Direction::Up => Position::new(pos.row.saturating_sub(1), pos.col),
            Direction::Down => Position::new(pos.row + 1, pos.col),
            Direction::Left => Position::new(pos.row, pos.col.saturating_sub(1)),
            Direction::Right => Position::new(pos.row, pos.col + 1),
        }
    }

    /// Whether the snake can step from `pos` in `direction`.
    ///
    /// Out-of-bounds neighbors block, as does any cell other than open
    /// floor or food.
    pub fn is_blocked_toward(&self, pos: Position, direction: Direction) -> bool {
        match direction {
            Direction::Up if pos.row == 0 => return true,
            Direction::Left if pos.col == 0 => return true,
            Direction::Down if pos.row + 1 >= self.rows => return true,
            Direction::Right if pos.col + 1 >= self.cols => return true,
            _ => {}
        }
        let target = self.move_to(pos, direction);
        let cell = self.grid[target.row][target.col];
        cell != Cell::Free && cell != Cell::Food
    }

    /// Whether `pos` itself is unusable as open floor.
    ///
    /// The literal border ring is always blocked, as is any cell that is
    /// not currently free.
    pub fn is_blocked(&self, pos: Position) -> bool {
        if pos.row == 0 || pos.row + 1 >= self.rows || pos.col == 0 || pos.col + 1 >= self.cols {
            return true;
        }
        self.grid[pos.row][pos.col] != Cell::Free
    }

    /// Drop a food pellet on a uniformly random unblocked cell.
    pub fn add_food<R: Rng>(&mut self, rng: &mut R) {
        loop {
            let pos = Position::new(rng.gen_range(0..self.rows), rng.gen_range(0..self.cols));
            if !self.is_blocked(pos) {
                self.place_food(pos);
                return;
            }
        }
    }

    /// Put the food pellet at a specific cell.
    pub fn place_food(&mut self, pos: Position) {
        self.fill(pos, Cell::Food);
        self.food = pos;
    }

    /// Write the snake onto the grid: body segments first, then the head
    /// at `head` on top.
    pub fn place_snake(&mut self, head: Position) {
        for &segment in self.snake.body.iter() {
            self.grid[segment.row][segment.col] = Cell::SnakeBody;
        }
        self.grid[head.row][head.col] = Cell::SnakeHead;
    }

    /// Apply one snake step onto `position`, the cell being entered.
    ///
    /// Without food the tail follows and its old cell is freed; with food
    /// the snake grows by one segment. Either way the grid marks are
    /// rewritten, which consumes any pellet under the new head.
    pub fn update(&mut self, position: Position, direction: Direction, found_food: bool) {
        self.snake.direction = direction;

        if found_food {
            if self.snake.len() == 1 {
                // A lone head vacates no cell when it grows; the new tail
                // is the cell the head just came from.
                let tail = self.move_to(position, direction.opposite());
                self.snake.rebuild(position, tail);
            } else {
                self.snake.grow(position);
            }
        } else {
            let vacated = self.snake.advance(position);
            self.grid[vacated.row][vacated.col] = Cell::Free;
        }

        self.place_snake(position);
    }

    /// Repaint the snake with its death marks for the loss frame.
    pub fn mark_snake_dead(&mut self) {
        for &segment in self.snake.body.iter() {
            self.grid[segment.row][segment.col] = Cell::DeadSnakeBody;
        }
        let head = self.snake.head();
        self.grid[head.row][head.col] = Cell::DeadSnakeHead;
    }

    /// Restore the board for a new round.
    ///
    /// Clears food and every snake mark (live or dead), then places a fresh
    /// single-segment snake at the spawn point. Afterwards the only
    /// occupied cells are the walls and the head at spawn.
    pub fn reset(&mut self) {
        for line in self.grid.iter_mut() {
            for cell in line.iter_mut() {
                if matches!(
                    *cell,
                    Cell::Food
                        | Cell::SnakeHead
                        | Cell::SnakeBody
                        | Cell::DeadSnakeHead
                        | Cell::DeadSnakeBody
                ) {
                    *cell = Cell::Free;
                }
            }
        }
        self.snake = Snake::new(self.spawn);
        self.grid[self.spawn.row][self.spawn.col] = Cell::SnakeHead;
    }
}
