//! Integration test: full game simulation
//!
//! Drives complete sessions headlessly through `GameSession::update`,
//! from the welcome screen to a win or a game over, the way the binary
//! does minus the terminal.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use snaze::game::{Cell, GameSession, MatchPhase, Position, RunOptions, Strategy};

/// Parse literal maze rows into the grid the session expects.
fn cells(rows: &[&str]) -> Vec<Vec<char>> {
    rows.iter().map(|row| row.chars().collect()).collect()
}

/// Run a session until it ends or the tick budget runs out.
fn run_session(rows: &[&str], options: &RunOptions, max_ticks: u32, seed: u64) -> GameSession {
    let mut session = GameSession::new(options);
    session
        .initialize(&cells(rows))
        .expect("maze should initialize");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for _ in 0..max_ticks {
        if session.game_over {
            break;
        }
        session.update(&mut rng);
    }
    session
}

// =============================================================================
// Winning Sessions
// =============================================================================

#[test]
fn test_forced_corridor_game_is_won() {
    // One free cell next to the spawn: the pellet must land there.
    let rows = ["#####", "#& ##", "#####"];
    let options = RunOptions {
        foods: 1,
        ..RunOptions::default()
    };

    let session = run_session(&rows, &options, 10, 1);

    assert!(session.game_over, "session should have ended");
    assert_eq!(session.match_phase, MatchPhase::Win);
    assert_eq!(session.foods_eaten, 1);
    assert_eq!(session.score, 20);
    assert_eq!(session.message, "The snake cleared the maze!");
    assert_eq!(session.maze.snake.len(), 2, "snake should grow on eating");
    assert_eq!(session.maze.snake.head(), Position::new(1, 2));
}

#[test]
fn test_corridor_session_always_clears_the_maze() {
    // Two free cells: each round the pellet lands on the one the snake
    // is not occupying, so every round ends in a bite.
    let rows = ["######", "#&  ##", "######"];
    let options = RunOptions {
        foods: 2,
        ..RunOptions::default()
    };

    let session = run_session(&rows, &options, 50, 99);

    assert_eq!(session.match_phase, MatchPhase::Win);
    assert_eq!(session.foods_eaten, 2);
    assert_eq!(session.score, 40);
    assert!(
        session.lives >= 4,
        "at most one life can go to the post-bite trap"
    );
}

#[test]
fn test_random_walk_strategy_wins_forced_corridor() {
    let rows = ["#####", "#& ##", "#####"];
    let options = RunOptions {
        foods: 1,
        strategy: Strategy::RandomWalk,
        ..RunOptions::default()
    };

    let session = run_session(&rows, &options, 10, 5);

    assert_eq!(session.match_phase, MatchPhase::Win);
    assert_eq!(session.score, 20);
}

// =============================================================================
// Losing Sessions
// =============================================================================

#[test]
fn test_single_life_is_lost_when_trapped_after_eating() {
    // Eating the only pellet walls the snake in; with more food owed
    // and one life left, the game ends immediately.
    let rows = ["#####", "#& ##", "#####"];
    let options = RunOptions {
        foods: 2,
        lives: 1,
        ..RunOptions::default()
    };

    let session = run_session(&rows, &options, 10, 3);

    assert!(session.game_over);
    assert_eq!(session.match_phase, MatchPhase::Lost);
    assert_eq!(session.lives, 0);
    assert_eq!(session.foods_eaten, 1);
    assert_eq!(session.score, 20, "the bite still pays out");
    assert_eq!(session.message, "The snake is out of lives.");
    assert_eq!(session.maze.grid[1][2], Cell::DeadSnakeHead);
    assert_eq!(session.maze.grid[1][1], Cell::DeadSnakeBody);
}

#[test]
fn test_unreachable_food_burns_lives_and_ends_the_game() {
    // The invisible wall at (1, 2) seals the spawn off from the only
    // free cell, so every round is a doomed walk of zero steps.
    let rows = ["######", "#&.# #", "######"];
    let options = RunOptions {
        foods: 3,
        lives: 2,
        ..RunOptions::default()
    };

    let session = run_session(&rows, &options, 20, 7);

    assert!(session.game_over);
    assert_eq!(session.match_phase, MatchPhase::Lost);
    assert_eq!(session.lives, 0);
    assert_eq!(session.foods_eaten, 0);
    assert_eq!(session.score, 0, "the penalty clamps at zero");
    assert_eq!(
        session.maze.spawn,
        Position::new(1, 1),
        "a snake that never moved respawns where it started"
    );
    assert_eq!(session.maze.grid[1][1], Cell::DeadSnakeHead);
}

// =============================================================================
// File-Driven Sessions
// =============================================================================

#[test]
fn test_session_from_maze_file_runs_to_completion() {
    let path = std::env::temp_dir().join("snaze_simulation_corridor.txt");
    std::fs::write(&path, "3 5\n#####\n#& ##\n#####\n").expect("temp maze should write");

    let path_str = path.to_string_lossy().into_owned();
    let rows = snaze::cli::read_maze_file(&path_str).expect("maze file should parse");

    let mut session = GameSession::new(&RunOptions {
        foods: 1,
        ..RunOptions::default()
    });
    session.initialize(&rows).expect("maze should initialize");

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..10 {
        if session.game_over {
            break;
        }
        session.update(&mut rng);
    }

    assert_eq!(session.match_phase, MatchPhase::Win);
    let _ = std::fs::remove_file(&path);
}
