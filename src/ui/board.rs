//! Board rendering: the maze grid as styled text lines.

use crate::game::{Cell, Direction, Maze};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

// ── Board glyphs ─────────────────────────────────────────────────────
pub const WALL_GLYPH: char = '█';
pub const FOOD_GLYPH: char = '●';
pub const BODY_GLYPH: char = '▓';
pub const DEAD_HEAD_GLYPH: char = 'x';

// ── Board colors ─────────────────────────────────────────────────────
pub const WALL_COLOR: Color = Color::DarkGray;
pub const FOOD_COLOR: Color = Color::LightRed;
pub const SNAKE_COLOR: Color = Color::LightGreen;
pub const DEAD_COLOR: Color = Color::Red;

/// Render the maze centered in `area`.
pub fn render_board(frame: &mut Frame, area: Rect, maze: &Maze) {
    if maze.rows == 0 || area.height == 0 || area.width == 0 {
        return;
    }

    let width = (maze.cols as u16).min(area.width);
    let height = (maze.rows as u16).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;

    let board = Paragraph::new(board_lines(maze));
    frame.render_widget(board, Rect::new(x, y, width, height));
}

/// The maze as one styled line per grid row.
pub fn board_lines(maze: &Maze) -> Vec<Line<'static>> {
    let heading = maze.snake.direction;
    maze.grid
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row.iter().map(|&cell| cell_span(cell, heading)).collect();
            Line::from(spans)
        })
        .collect()
}

/// Head glyph for the current heading.
fn head_glyph(heading: Direction) -> char {
    match heading {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    }
}

fn cell_span(cell: Cell, heading: Direction) -> Span<'static> {
    match cell {
        Cell::Wall => Span::styled(WALL_GLYPH.to_string(), Style::default().fg(WALL_COLOR)),
        // Invisible walls and the spawn marker render as open floor
        Cell::InvisibleWall | Cell::Free | Cell::Spawn => Span::raw(" "),
        Cell::Food => Span::styled(FOOD_GLYPH.to_string(), Style::default().fg(FOOD_COLOR)),
        Cell::SnakeHead => Span::styled(
            head_glyph(heading).to_string(),
            Style::default()
                .fg(SNAKE_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::SnakeBody => {
            Span::styled(BODY_GLYPH.to_string(), Style::default().fg(SNAKE_COLOR))
        }
        Cell::DeadSnakeHead => Span::styled(
            DEAD_HEAD_GLYPH.to_string(),
            Style::default().fg(DEAD_COLOR).add_modifier(Modifier::BOLD),
        ),
        Cell::DeadSnakeBody => {
            Span::styled(BODY_GLYPH.to_string(), Style::default().fg(DEAD_COLOR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    fn maze_from(rows: &[&str]) -> Maze {
        let cells: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
        Maze::from_chars(&cells).unwrap()
    }

    #[test]
    fn test_board_lines_match_grid_dimensions() {
        let maze = maze_from(&["#####", "#&  #", "#####"]);
        let lines = board_lines(&maze);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans.len(), 5);
    }

    #[test]
    fn test_head_glyph_follows_heading() {
        let mut maze = maze_from(&["#####", "#&  #", "#####"]);
        maze.place_snake(maze.spawn);
        maze.update(Position::new(1, 2), Direction::Right, false);

        let lines = board_lines(&maze);
        assert_eq!(lines[1].spans[2].content.as_ref(), ">");
    }

    #[test]
    fn test_invisible_wall_renders_as_floor() {
        let maze = maze_from(&["#####", "#&. #", "#####"]);
        let lines = board_lines(&maze);
        assert_eq!(lines[1].spans[2].content.as_ref(), " ");
    }
}
