//! snaze - a snake that solves mazes on its own.
//!
//! The library exposes the maze, pathfinding, and session logic so the
//! binary and the integration tests can drive games headlessly.

pub mod cli;
pub mod game;

// UI module is exposed so the binary can render; it stays out of the
// game logic's way otherwise.
pub mod ui;
