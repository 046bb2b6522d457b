//! Core game model: the maze, the snake, route planning, and the session
//! state machine that ties them together.

pub mod cell;
pub mod maze;
pub mod pathfinder;
pub mod session;
pub mod snake;

pub use cell::*;
pub use maze::*;
pub use pathfinder::*;
pub use session::*;
pub use snake::*;
