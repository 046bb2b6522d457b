//! Terminal UI: frame layout and rendering for a running session.

pub mod board;
pub mod screens;

use crate::game::GameSession;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Screen regions for one frame.
struct SessionLayout {
    board: Rect,
    status_bar: Rect,
    info_panel: Rect,
}

/// Render one frame of the session.
pub fn draw(frame: &mut Frame, session: &GameSession) {
    let area = frame.size();
    let layout = create_layout(frame, area);

    board::render_board(frame, layout.board, &session.maze);
    screens::render_status_bar(frame, layout.status_bar, session);
    screens::render_info_panel(frame, layout.info_panel, session);

    if session.game_over {
        screens::render_game_over(frame, area, session);
    }
}

/// Clear the frame, draw the outer border, and carve out the board,
/// status bar, and info panel regions.
fn create_layout(frame: &mut Frame, area: Rect) -> SessionLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(" snaze ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Board + status bar
            Constraint::Length(24), // Info panel
        ])
        .split(inner);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Board
            Constraint::Length(2), // Status bar
        ])
        .split(columns[0]);

    SessionLayout {
        board: left[0],
        status_bar: left[1],
        info_panel: columns[1],
    }
}
