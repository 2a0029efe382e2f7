//! Board rendering and mouse hit-testing.
//!
//! Cell geometry is computed by plain arithmetic in [`grid`] so that the
//! renderer and the click hit-test can never disagree.

use noughts_core::rules::win;
use noughts_core::{Game, Player, Position, Square};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::theme::Palette;

/// Cell width in terminal columns.
const CELL_W: u16 = 12;
/// Cell height in terminal rows.
const CELL_H: u16 = 3;
/// Full board width: three cells plus two separator columns.
const BOARD_W: u16 = CELL_W * 3 + 2;
/// Full board height: three cells plus two separator rows.
const BOARD_H: u16 = CELL_H * 3 + 2;

/// Maps the digit keys to board cells in numpad layout: `1` is bottom-left,
/// `5` is the center, `9` is top-right.
pub fn digit_cell(digit: char) -> Option<Position> {
    let index = digit.to_digit(10)? as usize;
    if index == 0 {
        return None;
    }
    let row = 2 - (index - 1) / 3;
    let col = (index - 1) % 3;
    Position::from_row_col(row, col)
}

/// The digit shown in an empty cell, inverse of [`digit_cell`].
pub fn cell_digit(pos: Position) -> char {
    let index = (2 - pos.row()) * 3 + pos.col() + 1;
    char::from_digit(index as u32, 10).unwrap_or(' ')
}

/// The centered board rectangle within the given area.
pub fn board_rect(area: Rect) -> Rect {
    crate::ui::centered_rect(area, BOARD_W, BOARD_H)
}

/// Cell rectangles for the 3x3 grid, row-major.
pub fn grid(board: Rect) -> [[Rect; 3]; 3] {
    let mut cells = [[Rect::default(); 3]; 3];
    for (r, row) in cells.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            cell.x = board.x + c as u16 * (CELL_W + 1);
            cell.y = board.y + r as u16 * (CELL_H + 1);
            cell.width = CELL_W;
            cell.height = CELL_H;
        }
    }
    cells
}

/// Returns the cell under the given screen coordinates, if any.
pub fn cell_at(area: Rect, x: u16, y: u16) -> Option<Position> {
    let board = board_rect(area);
    for (r, row) in grid(board).iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let inside = x >= cell.x
                && x < cell.x + cell.width
                && y >= cell.y
                && y < cell.y + cell.height;
            if inside {
                return Position::from_row_col(r, c);
            }
        }
    }
    None
}

/// Renders the board with cursor and optional winning-line highlight.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: Position,
    palette: &Palette,
    highlight_on: bool,
) {
    let board = board_rect(area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.board_bg)),
        board,
    );

    let cells = grid(board);
    for (r, line) in win::ROWS.iter().enumerate() {
        for (c, pos) in line.iter().enumerate() {
            render_cell(frame, cells[r][c], game, cursor, palette, highlight_on, *pos);
        }
    }

    render_separators(frame, board, palette);
}

fn render_cell(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: Position,
    palette: &Palette,
    highlight_on: bool,
    pos: Position,
) {
    let (symbol, base_style) = match game.board().get(pos) {
        Square::Empty => (
            cell_digit(pos).to_string(),
            Style::default().fg(palette.line).add_modifier(Modifier::DIM),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default()
                .fg(palette.x_mark)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg(palette.o_mark)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = game
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let mut style = base_style.bg(palette.board_bg);
    if highlight_on && on_winning_line {
        style = style.bg(palette.highlight);
    }
    if pos == cursor && !game.is_over() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Blank line above the mark centers it vertically in the 3-row cell.
    let text = format!("\n{symbol}");
    let cell = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn render_separators(frame: &mut Frame, board: Rect, palette: &Palette) {
    let style = Style::default().fg(palette.line).bg(palette.board_bg);

    for r in 0..2 {
        let y = board.y + CELL_H + r * (CELL_H + 1);
        let area = Rect::new(board.x, y, BOARD_W, 1);
        let sep = Paragraph::new("─".repeat(BOARD_W as usize)).style(style);
        frame.render_widget(sep, area);
    }

    for c in 0..2 {
        let x = board.x + CELL_W + c * (CELL_W + 1);
        let area = Rect::new(x, board.y, 1, BOARD_H);
        let sep = Paragraph::new("│\n│\n│\n│\n│\n│\n│\n│\n│\n│\n│").style(style);
        frame.render_widget(sep, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_cell_uses_numpad_layout() {
        assert_eq!(digit_cell('1'), Some(Position::BottomLeft));
        assert_eq!(digit_cell('2'), Some(Position::BottomCenter));
        assert_eq!(digit_cell('5'), Some(Position::Center));
        assert_eq!(digit_cell('7'), Some(Position::TopLeft));
        assert_eq!(digit_cell('9'), Some(Position::TopRight));
        assert_eq!(digit_cell('0'), None);
        assert_eq!(digit_cell('x'), None);
    }

    #[test]
    fn test_cell_digit_is_inverse_of_digit_cell() {
        for pos in Position::ALL {
            assert_eq!(digit_cell(cell_digit(pos)), Some(pos));
        }
    }

    #[test]
    fn test_cell_at_finds_each_cell_center() {
        let area = Rect::new(0, 0, 80, 24);
        let board = board_rect(area);
        for (r, row) in grid(board).iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let x = cell.x + cell.width / 2;
                let y = cell.y + cell.height / 2;
                assert_eq!(cell_at(area, x, y), Position::from_row_col(r, c));
            }
        }
    }

    #[test]
    fn test_cell_at_misses_separators_and_outside() {
        let area = Rect::new(0, 0, 80, 24);
        let board = board_rect(area);
        // First vertical separator column.
        assert_eq!(cell_at(area, board.x + CELL_W, board.y + 1), None);
        // First horizontal separator row.
        assert_eq!(cell_at(area, board.x + 1, board.y + CELL_H), None);
        // Outside the board entirely.
        assert_eq!(cell_at(area, 0, 0), None);
    }
}
