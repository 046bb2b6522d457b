//! The snake itself: positions, directions, and the body deque.

use std::collections::VecDeque;

/// A cell coordinate: (row, col), zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Cardinal movement direction.
///
/// Declaration order doubles as the route planner's neighbor-expansion
/// order, which fixes the tie-break among equally short paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions, in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// The snake's body. Head is at the front (index 0).
#[derive(Debug, Clone)]
pub struct Snake {
    /// Body segments, head first. Always at least one segment.
    pub body: VecDeque<Position>,
    /// Direction of the most recent move; drawn as the head glyph.
    pub direction: Direction,
}

impl Snake {
    /// A fresh single-segment snake at `head`.
    pub fn new(head: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Self {
            body,
            direction: Direction::Up,
        }
    }

    /// Head position (front of the deque).
    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Move onto `new_head` without growing. Returns the vacated tail
    /// position so the board can clear its mark.
    pub fn advance(&mut self, new_head: Position) -> Position {
        self.body.push_front(new_head);
        // The push guarantees at least two segments, so a tail exists.
        self.body.pop_back().unwrap_or(new_head)
    }

    /// Grow by one segment onto `new_head`; the tail stays put.
    pub fn grow(&mut self, new_head: Position) {
        self.body.push_front(new_head);
    }

    /// Replace the body with exactly a head and a tail segment.
    pub fn rebuild(&mut self, head: Position, tail: Position) {
        self.body.clear();
        self.body.push_back(head);
        self.body.push_back(tail);
    }
}
