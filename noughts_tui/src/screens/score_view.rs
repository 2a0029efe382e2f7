//! Score screen — counters, reset with confirmation, save/load to a path.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use tracing::{debug, info, instrument};

use crate::controller::AppContext;
use crate::screen::{Screen, ScreenTransition};
use crate::store::Store;

/// What an entered path will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathAction {
    Save,
    Load,
}

/// Input mode of the score screen.
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Normal,
    ConfirmReset,
    EnterPath { action: PathAction, input: String },
}

/// State for the score screen.
#[derive(Debug)]
pub struct ScoreViewScreen {
    mode: Mode,
    message: Option<String>,
}

impl ScoreViewScreen {
    /// Creates a new score screen.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing ScoreViewScreen");
        Self {
            mode: Mode::Normal,
            message: None,
        }
    }

    /// Runs a confirmed save/load against the entered path.
    #[instrument(skip(self, ctx))]
    fn apply_path_action(&mut self, action: PathAction, input: &str, ctx: &mut AppContext) {
        let path = PathBuf::from(input.trim());
        match action {
            PathAction::Save => match Store::export_score(&path, &ctx.score) {
                Ok(()) => {
                    info!(path = %path.display(), "Score exported");
                    self.message = Some(format!("Score saved to {}", path.display()));
                }
                Err(e) => ctx.report_error(format!("Could not save score: {e:#}")),
            },
            PathAction::Load => match Store::import_score(&path) {
                Ok(score) => {
                    info!(path = %path.display(), "Score imported");
                    ctx.score = score;
                    ctx.save_score_now();
                    self.message = Some(format!("Score loaded from {}", path.display()));
                }
                Err(e) => ctx.report_error(format!("Could not load score: {e:#}")),
            },
        }
    }

    fn footer_text(&self) -> &str {
        match self.mode {
            Mode::Normal => "r: Reset | s: Save to file | l: Load from file | Esc: Back to game",
            Mode::ConfirmReset => "Reset score to zero? (y/n)",
            Mode::EnterPath { .. } => "Enter: Confirm | Esc: Cancel",
        }
    }
}

impl Default for ScoreViewScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ScoreViewScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let palette = ctx.palette();
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.bg)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Score")
            .style(
                Style::default()
                    .fg(palette.line)
                    .bg(palette.panel_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let score = &ctx.score;
        let win_rate = if score.total() > 0 {
            score.x_wins as f64 * 100.0 / score.total() as f64
        } else {
            0.0
        };
        let summary = Paragraph::new(format!(
            "Games: {}   X win rate: {:.1}%",
            score.total(),
            win_rate
        ))
        .style(Style::default().fg(palette.line).bg(palette.status_bg))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Summary"));
        frame.render_widget(summary, chunks[1]);

        let header = Row::new(vec![
            Cell::from("Outcome").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Count").style(Style::default().add_modifier(Modifier::BOLD)),
        ]);
        let rows = vec![
            Row::new(vec![
                Cell::from("X wins").style(Style::default().fg(palette.x_mark)),
                Cell::from(score.x_wins.to_string()),
            ]),
            Row::new(vec![
                Cell::from("O wins").style(Style::default().fg(palette.o_mark)),
                Cell::from(score.o_wins.to_string()),
            ]),
            Row::new(vec![
                Cell::from("Draws").style(Style::default().fg(Color::Yellow)),
                Cell::from(score.draws.to_string()),
            ]),
        ];
        let widths = [Constraint::Percentage(60), Constraint::Percentage(40)];
        let table = Table::new(rows, widths)
            .header(header)
            .style(Style::default().fg(palette.line).bg(palette.status_bg))
            .block(Block::default().borders(Borders::ALL).title("Counters"));
        frame.render_widget(table, chunks[2]);

        // Input line: path entry when active, last action message otherwise.
        match &self.mode {
            Mode::EnterPath { action, input } => {
                let title = match action {
                    PathAction::Save => "Save score to",
                    PathAction::Load => "Load score from",
                };
                let field = Paragraph::new(format!("{input}_"))
                    .style(Style::default().fg(palette.line).bg(palette.panel_bg))
                    .block(Block::default().borders(Borders::ALL).title(title));
                frame.render_widget(field, chunks[3]);
            }
            _ => {
                let message = Paragraph::new(self.message.clone().unwrap_or_default())
                    .style(Style::default().fg(palette.line).bg(palette.bg))
                    .alignment(Alignment::Center);
                frame.render_widget(message, chunks[3]);
            }
        }

        let style = if self.mode == Mode::ConfirmReset {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.line).add_modifier(Modifier::DIM)
        };
        let footer = Paragraph::new(self.footer_text())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[4]);
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut AppContext) -> ScreenTransition {
        let mut confirmed: Option<(PathAction, String)> = None;

        match &mut self.mode {
            Mode::Normal => match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.mode = Mode::ConfirmReset;
                    return ScreenTransition::Stay;
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.mode = Mode::EnterPath {
                        action: PathAction::Save,
                        input: "score.json".to_string(),
                    };
                    return ScreenTransition::Stay;
                }
                KeyCode::Char('l') | KeyCode::Char('L') => {
                    self.mode = Mode::EnterPath {
                        action: PathAction::Load,
                        input: "score.json".to_string(),
                    };
                    return ScreenTransition::Stay;
                }
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('b') => {
                    return ScreenTransition::GoToGame;
                }
                _ => return ScreenTransition::Stay,
            },
            Mode::ConfirmReset => {
                if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                    info!("Score reset");
                    ctx.score.reset();
                    ctx.save_score_now();
                    self.message = Some("Score reset.".to_string());
                }
                self.mode = Mode::Normal;
                return ScreenTransition::Stay;
            }
            Mode::EnterPath { action, input } => match key.code {
                KeyCode::Char(c) => {
                    input.push(c);
                    return ScreenTransition::Stay;
                }
                KeyCode::Backspace => {
                    input.pop();
                    return ScreenTransition::Stay;
                }
                KeyCode::Enter => {
                    confirmed = Some((*action, std::mem::take(input)));
                }
                KeyCode::Esc => {
                    self.mode = Mode::Normal;
                    return ScreenTransition::Stay;
                }
                _ => return ScreenTransition::Stay,
            },
        }

        if let Some((action, input)) = confirmed {
            self.mode = Mode::Normal;
            self.apply_path_action(action, &input, ctx);
        }
        ScreenTransition::Stay
    }
}
