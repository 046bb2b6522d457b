//! snaze - an autonomous snake-in-a-maze simulation for the terminal.

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use snaze::cli;
use snaze::game::GameSession;
use snaze::ui;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        cli::print_usage();
        return Ok(());
    }

    let options = match cli::parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("snaze: {}", message);
            cli::print_usage();
            std::process::exit(1);
        }
    };

    let rows = match cli::read_maze_file(&options.maze_path) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("snaze: {}: {}", options.maze_path, e);
            std::process::exit(1);
        }
    };

    let mut session = GameSession::new(&options);
    if let Err(e) = session.initialize(&rows) {
        eprintln!("snaze: {}: {}", options.maze_path, e);
        std::process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// Drive the session until the game ends or the user quits.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let frame_delay = Duration::from_millis(1000 / u64::from(session.fps));

    // Move the session out of its boot phase so the first frame
    // already shows the welcome prompt.
    session.update(&mut rng);

    loop {
        terminal.draw(|frame| ui::draw(frame, session))?;

        if session.game_over {
            wait_for_any_key()?;
            return Ok(());
        }

        if session.awaiting_acknowledge() {
            if wait_for_acknowledge()? {
                return Ok(());
            }
            session.update(&mut rng);
            continue;
        }

        session.update(&mut rng);

        if pace_frame(frame_delay)? {
            return Ok(());
        }
    }
}

/// True when the key should quit the whole program.
fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

/// Block until the user confirms with Enter. Returns true if they chose
/// to quit instead.
fn wait_for_acknowledge() -> io::Result<bool> {
    loop {
        if let Event::Key(key_event) = event::read()? {
            if key_event.code == KeyCode::Enter {
                return Ok(false);
            }
            if is_quit_key(key_event.code, key_event.modifiers) {
                return Ok(true);
            }
        }
    }
}

/// Block until any key is pressed.
fn wait_for_any_key() -> io::Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

/// Sleep out the remainder of the frame while draining input. Returns
/// true if a quit key arrived.
fn pace_frame(frame_delay: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + frame_delay;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(false);
        }
        if event::poll(remaining)? {
            if let Event::Key(key_event) = event::read()? {
                if is_quit_key(key_event.code, key_event.modifiers) {
                    return Ok(true);
                }
            }
        }
    }
}
