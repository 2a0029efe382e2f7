//! Shared rendering helpers: centering and modal popups.

pub mod board;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::Palette;

/// Centers a `width` x `height` rectangle inside `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

/// Renders a modal dialog over whatever is on screen.
pub fn render_dialog(frame: &mut Frame, title: &str, message: &str, palette: &Palette) {
    let area = centered_rect(frame.area(), 44, 7);
    frame.render_widget(Clear, area);
    let text = format!("\n{message}\n\nPress any key to continue.");
    let dialog = Paragraph::new(text)
        .style(
            Style::default()
                .fg(palette.line)
                .bg(palette.panel_bg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::default().fg(palette.highlight)),
        );
    frame.render_widget(dialog, area);
}

/// Renders the modal error popup shown by the controller at the UI boundary.
pub fn render_error_popup(frame: &mut Frame, message: &str, palette: &Palette) {
    let area = centered_rect(frame.area(), 54, 8);
    frame.render_widget(Clear, area);
    let text = format!("\n{message}\n\nPress any key to dismiss.");
    let popup = Paragraph::new(text)
        .style(Style::default().fg(Color::Red).bg(palette.panel_bg))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Error")
                .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        );
    frame.render_widget(popup, area);
}
