//! Game screen — the themed board with status bar, score, and input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use noughts_core::{Game, GameStatus, Player, Position};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::{debug, info, instrument};

use crate::controller::AppContext;
use crate::screen::{Screen, ScreenTransition};
use crate::ui;
use crate::ui::board::digit_cell;

const KEY_HINTS: &str =
    "1-9/click: move | u: undo | n: new game | t: theme | s: settings | v: score | ?: help | q: quit";

/// State for the game screen.
#[derive(Debug)]
pub struct GameScreen {
    game: Game,
    cursor: Position,
    info: Option<String>,
    dialog: Option<String>,
    blink_hidden: bool,
}

impl GameScreen {
    /// Creates a fresh game with the cursor on the center square.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameScreen");
        Self {
            game: Game::new(),
            cursor: Position::Center,
            info: Some("Press 1-9, click a square, or move with the arrow keys.".to_string()),
            dialog: None,
            blink_hidden: false,
        }
    }

    /// Moves the cursor by a row/column delta, wrapping at the edges.
    fn move_cursor(&mut self, dr: isize, dc: isize) {
        let row = (self.cursor.row() as isize + dr).rem_euclid(3) as usize;
        let col = (self.cursor.col() as isize + dc).rem_euclid(3) as usize;
        if let Some(pos) = Position::from_row_col(row, col) {
            self.cursor = pos;
        }
    }

    /// Attempts a move and updates score, dialog, and messages on game end.
    #[instrument(skip(self, ctx))]
    fn try_move(&mut self, pos: Position, ctx: &mut AppContext) {
        match self.game.make_move(pos) {
            Ok(status) => {
                self.info = None;
                self.blink_hidden = false;
                match status {
                    GameStatus::Won(player) => {
                        info!(winner = %player, moves = self.game.move_count(), "Game won");
                        ctx.record_outcome(status);
                        self.dialog = Some(format!("Player {player} wins!"));
                    }
                    GameStatus::Draw => {
                        info!(moves = self.game.move_count(), "Game drawn");
                        ctx.record_outcome(status);
                        self.dialog = Some("Draw!".to_string());
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.info = Some("Square occupied or the game is over.".to_string());
            }
        }
    }

    fn undo(&mut self) {
        self.info = Some(match self.game.undo() {
            Some(_) => "Last move undone.".to_string(),
            None => "Nothing to undo.".to_string(),
        });
        self.dialog = None;
        self.blink_hidden = false;
    }

    fn new_game(&mut self) {
        info!("New game started");
        self.game.reset(Player::X);
        self.dialog = None;
        self.blink_hidden = false;
        self.info = Some("New game started.".to_string());
    }

    fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("{} to move", self.game.current_player()),
            GameStatus::Won(player) => format!("Winner: {player}"),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Vertical layout shared by rendering and mouse hit-testing:
    /// header, board, status bar, key hints.
    fn layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(13),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2], chunks[3])
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let palette = ctx.palette();
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.bg)),
            area,
        );

        let (header_area, board_area, status_area, hints_area) = Self::layout(area);

        // Header: app title on the left, score on the right.
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(34)])
            .split(header_area);
        let title = Paragraph::new(format!("noughts — tic-tac-toe  [{}]", ctx.theme.label()))
            .style(
                Style::default()
                    .fg(palette.line)
                    .bg(palette.panel_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, header[0]);
        let score = Paragraph::new(format!(
            "X: {}   O: {}   Draws: {}",
            ctx.score.x_wins, ctx.score.o_wins, ctx.score.draws
        ))
        .style(Style::default().fg(palette.line).bg(palette.panel_bg))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(score, header[1]);

        let highlight_on = ctx.settings.show_highlight && !self.blink_hidden;
        ui::board::render_board(frame, board_area, &self.game, self.cursor, &palette, highlight_on);

        // Status bar: game status on the left, transient info on the right.
        let status_bar = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(status_area);
        let status = Paragraph::new(self.status_text())
            .style(Style::default().fg(palette.line).bg(palette.status_bg))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, status_bar[0]);
        let info = Paragraph::new(self.info.clone().unwrap_or_default())
            .style(Style::default().fg(palette.line).bg(palette.status_bg))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(info, status_bar[1]);

        let hints = Paragraph::new(KEY_HINTS)
            .style(Style::default().fg(palette.line).add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        frame.render_widget(hints, hints_area);

        if let Some(message) = &self.dialog {
            ui::render_dialog(frame, "Game over", message, &palette);
        }
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut AppContext) -> ScreenTransition {
        // The result dialog is modal: any key closes it.
        if self.dialog.is_some() {
            self.dialog = None;
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = digit_cell(c) {
                    self.cursor = pos;
                    self.try_move(pos, ctx);
                }
                ScreenTransition::Stay
            }
            KeyCode::Up => {
                self.move_cursor(-1, 0);
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.move_cursor(1, 0);
                ScreenTransition::Stay
            }
            KeyCode::Left => {
                self.move_cursor(0, -1);
                ScreenTransition::Stay
            }
            KeyCode::Right => {
                self.move_cursor(0, 1);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.try_move(self.cursor, ctx);
                ScreenTransition::Stay
            }
            KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.undo();
                ScreenTransition::Stay
            }
            KeyCode::Char('u') | KeyCode::Char('U') => {
                self.undo();
                ScreenTransition::Stay
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.new_game();
                ScreenTransition::Stay
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                let next = ctx.theme.next();
                ctx.set_theme(next);
                self.info = Some(format!("Theme set: {}", next.label()));
                ScreenTransition::Stay
            }
            KeyCode::Char('s') | KeyCode::Char('S') => ScreenTransition::GoToSettings,
            KeyCode::Char('v') | KeyCode::Char('V') => ScreenTransition::GoToScoreView,
            KeyCode::Char('?') | KeyCode::F(1) => ScreenTransition::GoToHelp,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, event, ctx))]
    fn handle_mouse(
        &mut self,
        event: MouseEvent,
        area: Rect,
        ctx: &mut AppContext,
    ) -> ScreenTransition {
        if self.dialog.is_some() {
            self.dialog = None;
            return ScreenTransition::Stay;
        }
        let (_, board_area, _, _) = Self::layout(area);
        if let Some(pos) = ui::board::cell_at(board_area, event.column, event.row) {
            self.cursor = pos;
            self.try_move(pos, ctx);
        }
        ScreenTransition::Stay
    }

    fn tick(&mut self, ctx: &AppContext) {
        let blinking = self.game.is_over()
            && self.game.winning_line().is_some()
            && ctx.settings.show_highlight;
        self.blink_hidden = blinking && !self.blink_hidden;
    }
}
