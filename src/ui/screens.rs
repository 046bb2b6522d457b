//! Status bar, info panel, and the end-of-game overlay.

use crate::game::{GameSession, MatchPhase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::board::{
    BODY_GLYPH, DEAD_COLOR, DEAD_HEAD_GLYPH, FOOD_COLOR, FOOD_GLYPH, SNAKE_COLOR, WALL_COLOR,
    WALL_GLYPH,
};

/// Status bar under the board: one message line plus a key-hint line.
pub fn render_status_bar(frame: &mut Frame, area: Rect, session: &GameSession) {
    if area.height < 1 {
        return;
    }

    let (text, color) = status_line(session);
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 {
        let hints = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::White)),
            Span::styled(" Continue  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::White)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]);
        let hints = Paragraph::new(hints).alignment(Alignment::Center);
        frame.render_widget(
            hints,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// The line to show under the board right now. Explicit messages win
/// over the phase commentary.
fn status_line(session: &GameSession) -> (String, Color) {
    if !session.message.is_empty() {
        let color = match session.match_phase {
            MatchPhase::Win => Color::Green,
            MatchPhase::Lost => Color::Red,
            MatchPhase::Reset => Color::Yellow,
            _ => Color::White,
        };
        return (session.message.clone(), color);
    }

    match session.match_phase {
        MatchPhase::LookingForFood => (
            format!(
                "Slithering toward the pellet... {} to go",
                session.foods_left()
            ),
            Color::Green,
        ),
        MatchPhase::WalkToDeath => ("No way to the pellet!".to_string(), Color::Red),
        _ => (String::new(), Color::White),
    }
}

/// Right-hand info panel: lives, score, food count, and the legend.
pub fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lives = "O".repeat(session.lives as usize);

    let lines = vec![
        Line::from(vec![
            Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(lives, Style::default().fg(SNAKE_COLOR)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.score.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Food:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", session.foods_eaten, session.total_foods),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{} fps", session.fps), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Legend", Style::default().fg(Color::DarkGray))),
        legend_line('>', SNAKE_COLOR, "head"),
        legend_line(BODY_GLYPH, SNAKE_COLOR, "body"),
        legend_line(FOOD_GLYPH, FOOD_COLOR, "pellet"),
        legend_line(WALL_GLYPH, WALL_COLOR, "wall"),
        legend_line(DEAD_HEAD_GLYPH, DEAD_COLOR, "crashed"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn legend_line(glyph: char, color: Color, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {} ", glyph), Style::default().fg(color)),
        Span::styled(label.to_string(), Style::default().fg(Color::DarkGray)),
    ])
}

/// Centered modal announcing the final result. The board stays visible
/// around it.
pub fn render_game_over(frame: &mut Frame, area: Rect, session: &GameSession) {
    let won = session.match_phase == MatchPhase::Win;
    let (title, color) = if won {
        ("YOU WON!", Color::Green)
    } else {
        ("GAME OVER", Color::Red)
    };

    let modal_width = 44.min(area.width);
    let modal_height = 9.min(area.height);
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(session.message.clone()),
        Line::from(format!(
            "Final score: {}   Food eaten: {}/{}",
            session.score, session.foods_eaten, session.total_foods
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Press any key to exit]",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(modal, modal_area);
}
