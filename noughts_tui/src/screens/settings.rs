//! Settings screen — theme, winning-line highlight, score autosave.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::controller::AppContext;
use crate::screen::{Screen, ScreenTransition};

/// The editable entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
enum SettingsItem {
    Theme,
    Highlight,
    Autosave,
}

impl SettingsItem {
    fn label(self) -> &'static str {
        match self {
            SettingsItem::Theme => "Theme",
            SettingsItem::Highlight => "Winning-line highlight",
            SettingsItem::Autosave => "Autosave score",
        }
    }

    fn value_label(self, ctx: &AppContext) -> String {
        match self {
            SettingsItem::Theme => ctx.theme.label().to_string(),
            SettingsItem::Highlight => on_off(ctx.settings.show_highlight),
            SettingsItem::Autosave => on_off(ctx.settings.autosave_score),
        }
    }
}

fn on_off(value: bool) -> String {
    if value { "on" } else { "off" }.to_string()
}

/// State for the settings screen.
#[derive(Debug)]
pub struct SettingsScreen {
    list_state: ListState,
}

impl SettingsScreen {
    /// Creates a new settings screen with the first entry selected.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SettingsScreen");
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }

    fn selected(&self) -> Option<SettingsItem> {
        self.list_state
            .selected()
            .and_then(|i| SettingsItem::iter().nth(i))
    }

    fn select_previous(&mut self) {
        let count = SettingsItem::iter().count();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = SettingsItem::iter().count();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Cycles or toggles the selected entry; changes persist immediately.
    #[instrument(skip(self, ctx))]
    fn apply_selected(&mut self, ctx: &mut AppContext) {
        match self.selected() {
            Some(SettingsItem::Theme) => {
                let next = ctx.theme.next();
                ctx.set_theme(next);
                info!(theme = next.label(), "Theme changed");
            }
            Some(SettingsItem::Highlight) => {
                ctx.toggle_highlight();
                info!(show_highlight = ctx.settings.show_highlight, "Toggled highlight");
            }
            Some(SettingsItem::Autosave) => {
                ctx.toggle_autosave();
                info!(autosave_score = ctx.settings.autosave_score, "Toggled autosave");
            }
            None => {}
        }
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SettingsScreen {
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
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Settings")
            .style(
                Style::default()
                    .fg(palette.line)
                    .bg(palette.panel_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = SettingsItem::iter()
            .map(|item| {
                ListItem::new(format!(
                    "{:<26}[ {} ]",
                    item.label(),
                    item.value_label(ctx)
                ))
            })
            .collect();

        let list = List::new(items)
            .style(Style::default().fg(palette.line).bg(palette.status_bg))
            .block(Block::default().borders(Borders::ALL).title("Preferences"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓: Select | ←→ / Enter: Change | Esc: Back to game")
            .style(Style::default().fg(palette.line).add_modifier(Modifier::DIM))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, ctx))]
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut AppContext) -> ScreenTransition {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.apply_selected(ctx);
                ScreenTransition::Stay
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Leaving settings screen");
                ScreenTransition::GoToGame
            }
            _ => ScreenTransition::Stay,
        }
    }
}
