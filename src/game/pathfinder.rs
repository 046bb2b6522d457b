//! Route planning for the snake.
//!
//! Both strategies produce the same replayable artifact: a list of
//! positions (start exclusive) paired one-to-one with the directions taken
//! to reach them, consumed one step per tick through a cursor. When no
//! route to the pellet exists, the planner keeps its best dead-end walk so
//! the session can play it out and charge a life at the end.

use super::maze::Maze;
use super::snake::{Direction, Position};
use rand::Rng;
use std::collections::{HashSet, VecDeque};

/// How the snake picks its route each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Breadth-first shortest path; ties broken by expansion order.
    ShortestPath,
    /// Self-avoiding uniform random walk.
    RandomWalk,
}

/// A planned route and a cursor over it.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    pub strategy: Strategy,
    /// Route positions, start exclusive.
    pub positions: Vec<Position>,
    /// Direction taken into each route position. On a failed search this
    /// carries one extra trailing entry (see `solve`).
    pub directions: Vec<Direction>,
    cursor: usize,
}

impl Pathfinder {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            positions: Vec::new(),
            directions: Vec::new(),
            cursor: 0,
        }
    }

    /// Plan a route from `start` to `goal` and reset the cursor.
    ///
    /// Returns whether the goal was reached. On failure the route of the
    /// last node dequeued from the exhausted search is retained, with its
    /// final direction doubled up as the terminal step; replaying it walks
    /// the snake into the dead end.
    pub fn solve<R: Rng>(
        &mut self,
        maze: &Maze,
        start: Position,
        goal: Position,
        rng: &mut R,
    ) -> bool {
        self.cursor = 0;
        match self.strategy {
            Strategy::ShortestPath => self.solve_shortest(maze, start, goal),
            Strategy::RandomWalk => self.solve_random(maze, start, goal, rng),
        }
    }

    /// Four-directional BFS, testing the goal as nodes are dequeued.
    ///
    /// Each frontier node carries its entire path so far, because the
    /// consumer replays the whole route move by move.
    fn solve_shortest(&mut self, maze: &Maze, start: Position, goal: Position) -> bool {
        type BfsNode = (Position, Vec<Position>, Vec<Direction>);

        let mut visited: HashSet<Position> = HashSet::new();
        let mut queue: VecDeque<BfsNode> = VecDeque::new();

        visited.insert(start);
        queue.push_back((start, Vec::new(), Vec::new()));

        let mut last_path: Vec<Position> = Vec::new();
        let mut last_dirs: Vec<Direction> = Vec::new();

        while let Some((pos, path, dirs)) = queue.pop_front() {
            if pos == goal {
                self.positions = path;
                self.directions = dirs;
                return true;
            }

            for direction in Direction::ALL {
                if maze.is_blocked_toward(pos, direction) {
                    continue;
                }
                let next = maze.move_to(pos, direction);
                if visited.contains(&next) {
                    continue;
                }
                visited.insert(next);

                let mut next_path = path.clone();
                let mut next_dirs = dirs.clone();
                next_path.push(next);
                next_dirs.push(direction);
                queue.push_back((next, next_path, next_dirs));
            }

            last_path = path;
            last_dirs = dirs;
        }

        // No route to the pellet. Keep the walk to the last dequeued node
        // and double its final direction as the terminal step.
        if let Some(&last) = last_dirs.last() {
            last_dirs.push(last);
        }
        self.positions = last_path;
        self.directions = last_dirs;
        false
    }

    /// Self-avoiding random walk with a step budget of one grid's worth of
    /// cells. Ends with the same fallback shape as an exhausted search.
    fn solve_random<R: Rng>(
        &mut self,
        maze: &Maze,
        start: Position,
        goal: Position,
        rng: &mut R,
    ) -> bool {
        let mut visited: HashSet<Position> = HashSet::new();
        let mut positions: Vec<Position> = Vec::new();
        let mut directions: Vec<Direction> = Vec::new();
        let mut current = start;
        let budget = maze.rows * maze.cols;

        visited.insert(start);
        loop {
            if current == goal {
                self.positions = positions;
                self.directions = directions;
                return true;
            }
            if positions.len() >= budget {
                break;
            }

            let open: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|&direction| {
                    !maze.is_blocked_toward(current, direction)
                        && !visited.contains(&maze.move_to(current, direction))
                })
                .collect();
            if open.is_empty() {
                break;
            }

            let direction = open[rng.gen_range(0..open.len())];
            current = maze.move_to(current, direction);
            visited.insert(current);
            positions.push(current);
            directions.push(direction);
        }

        if let Some(&last) = directions.last() {
            directions.push(last);
        }
        self.positions = positions;
        self.directions = directions;
        false
    }

    /// The next unconsumed step of the route, if any.
    pub fn next_move(&mut self) -> Option<(Position, Direction)> {
        if self.cursor >= self.positions.len() {
            return None;
        }
        let step = (self.positions[self.cursor], self.directions[self.cursor]);
        self.cursor += 1;
        Some(step)
    }

    /// Where the route ends, if it has any steps.
    pub fn last_move(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    /// Steps not yet consumed.
    pub fn remaining_steps(&self) -> usize {
        self.positions.len() - self.cursor
    }
}
