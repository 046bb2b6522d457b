//! Game session: the dual state machine that drives a full play-through.
//!
//! The outer phase walks the session from the welcome prompt into the
//! running game and out to the ending screen. The inner phase cycles one
//! round at a time: drop a pellet, plan a route, replay it step by step,
//! then score the outcome and reset or finish.

use super::maze::Maze;
use super::pathfinder::{Pathfinder, Strategy};
use super::snake::{Direction, Position};
use rand::Rng;
use std::io;

/// Points awarded for eating a pellet.
pub const FOOD_REWARD: u32 = 20;

/// Points deducted when the snake walks to its death.
pub const DEATH_PENALTY: u32 = 20;

/// Outer lifecycle of the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Starting,
    Welcome,
    Running,
    Ending,
}

/// Inner lifecycle of a single round while the game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Starting,
    LookingForFood,
    WalkToDeath,
    Reset,
    Win,
    Lost,
}

/// Runtime configuration, filled from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub maze_path: String,
    /// Frames (ticks) per second.
    pub fps: u32,
    pub lives: u32,
    /// Pellets to eat before winning.
    pub foods: u32,
    pub strategy: Strategy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            maze_path: String::new(),
            fps: 2,
            lives: 5,
            foods: 10,
            strategy: Strategy::ShortestPath,
        }
    }
}

/// Everything needed to run a full game of snaze.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub maze: Maze,
    pub pathfinder: Pathfinder,
    pub game_phase: GamePhase,
    pub match_phase: MatchPhase,
    pub score: u32,
    pub lives: u32,
    pub foods_eaten: u32,
    pub total_foods: u32,
    pub fps: u32,
    pub strategy: Strategy,
    pub game_over: bool,
    /// One-line status shown beneath the board.
    pub message: String,
}

impl GameSession {
    pub fn new(options: &RunOptions) -> Self {
        Self {
            maze: Maze::default(),
            pathfinder: Pathfinder::new(options.strategy),
            game_phase: GamePhase::Starting,
            match_phase: MatchPhase::Starting,
            score: 0,
            lives: options.lives,
            foods_eaten: 0,
            total_foods: options.foods,
            fps: options.fps,
            strategy: options.strategy,
            game_over: false,
            message: String::new(),
        }
    }

    /// Build the board from parsed maze characters. Must be called once
    /// before the first `update`.
    pub fn initialize(&mut self, cells: &[Vec<char>]) -> io::Result<()> {
        self.maze = Maze::from_chars(cells)?;
        Ok(())
    }

    /// True when the driver should block on Enter before the next tick.
    pub fn awaiting_acknowledge(&self) -> bool {
        match self.game_phase {
            GamePhase::Welcome => true,
            GamePhase::Running => self.match_phase == MatchPhase::Reset,
            _ => false,
        }
    }

    /// Advance the session by one tick: exactly one phase transition and
    /// at most one snake step.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        match self.game_phase {
            GamePhase::Starting => {
                self.message = String::from("Press <Enter> to start");
                self.game_phase = GamePhase::Welcome;
            }
            GamePhase::Welcome => {
                self.message.clear();
                self.game_phase = GamePhase::Running;
            }
            GamePhase::Running => self.update_match(rng),
            GamePhase::Ending => {}
        }
    }

    fn update_match<R: Rng>(&mut self, rng: &mut R) {
        match self.match_phase {
            MatchPhase::Starting => {
                self.maze.add_food(rng);
                let spawn = self.maze.spawn;
                self.maze.place_snake(spawn);
                self.pathfinder = Pathfinder::new(self.strategy);
                let reached = self.pathfinder.solve(&self.maze, spawn, self.maze.food, rng);
                self.match_phase = if reached {
                    MatchPhase::LookingForFood
                } else {
                    MatchPhase::WalkToDeath
                };
            }
            MatchPhase::LookingForFood => {
                if let Some((position, direction)) = self.pathfinder.next_move() {
                    let found_food = position == self.maze.food;
                    self.maze.update(position, direction, found_food);
                    if found_food {
                        self.eat_at(position);
                    }
                } else {
                    // Route ran out before the pellet; play it as a failed
                    // walk so the round still resolves.
                    self.match_phase = MatchPhase::WalkToDeath;
                }
            }
            MatchPhase::WalkToDeath => {
                if let Some((position, direction)) = self.pathfinder.next_move() {
                    if !self.maze.is_blocked(position) {
                        self.maze.update(position, direction, false);
                    }
                }
                if let Some(last) = self.pathfinder.last_move() {
                    self.maze.spawn = last;
                }
                if self.pathfinder.remaining_steps() == 0 {
                    self.score = self.score.saturating_sub(DEATH_PENALTY);
                    self.lose_life();
                }
            }
            MatchPhase::Reset => {
                self.maze.reset();
                self.message.clear();
                self.match_phase = MatchPhase::Starting;
            }
            // Terminal outcomes; the game phase has already moved on
            MatchPhase::Win | MatchPhase::Lost => {}
        }
    }

    /// Score a pellet at `position` and decide where the round goes next.
    fn eat_at(&mut self, position: Position) {
        self.maze.spawn = position;
        self.foods_eaten += 1;
        self.score += FOOD_REWARD;

        if self.foods_eaten >= self.total_foods {
            self.finish(MatchPhase::Win);
        } else if self.is_trapped(position) {
            self.lose_life();
        } else {
            self.match_phase = MatchPhase::Starting;
        }
    }

    /// All four directions away from `position` are blocked.
    fn is_trapped(&self, position: Position) -> bool {
        Direction::ALL
            .into_iter()
            .all(|direction| self.maze.is_blocked_toward(position, direction))
    }

    fn lose_life(&mut self) {
        self.maze.mark_snake_dead();
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.finish(MatchPhase::Lost);
        } else {
            self.message = String::from("Ouch! Press <Enter> to try again");
            self.match_phase = MatchPhase::Reset;
        }
    }

    fn finish(&mut self, outcome: MatchPhase) {
        self.match_phase = outcome;
        self.game_phase = GamePhase::Ending;
        self.game_over = true;
        self.message = match outcome {
            MatchPhase::Win => String::from("The snake cleared the maze!"),
            _ => String::from("The snake is out of lives."),
        };
    }

    /// Remaining food cell count, for display.
    pub fn foods_left(&self) -> u32 {
        self.total_foods.saturating_sub(self.foods_eaten)
    }
}
