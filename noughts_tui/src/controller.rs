//! Application controller — the state machine driving the screens.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument, warn};

use noughts_core::GameStatus;

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, HelpScreen, ScoreViewScreen, SettingsScreen};
use crate::store::{Score, Settings, Store, MIN_COLS, MIN_ROWS};
use crate::theme::{Palette, Theme};
use crate::ui;

/// How often the winning-line highlight toggles while a result stands.
const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Shared state that screens read and mutate.
///
/// Screens report errors here, the controller surfaces them as a modal
/// popup, and persistence failures never propagate past the store.
#[derive(Debug)]
pub struct AppContext {
    /// Current settings; persisted through the store on every change.
    pub settings: Settings,
    /// Win/draw counters.
    pub score: Score,
    /// Active theme, resolved from the settings at startup.
    pub theme: Theme,
    store: Store,
    last_error: Option<String>,
}

impl AppContext {
    /// Loads settings and score and resolves the active theme.
    #[instrument(skip(store))]
    pub fn new(store: Store) -> Self {
        let settings = store.load_settings();
        let score = store.load_score();
        let theme = Theme::from_name(&settings.theme).unwrap_or_else(|| {
            warn!(name = %settings.theme, "Unknown theme in settings, using default");
            Theme::default()
        });
        info!(theme = theme.label(), games = score.total(), "Loaded settings and score");
        Self {
            settings,
            score,
            theme,
            store,
            last_error: None,
        }
    }

    /// The store holding the persisted records.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Resolved colors for the active theme.
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Switches the active theme and persists the choice.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.settings.theme = theme.label().to_string();
        self.store.save_settings(&self.settings);
    }

    /// Toggles the winning-line highlight and persists the change.
    pub fn toggle_highlight(&mut self) {
        self.settings.show_highlight = !self.settings.show_highlight;
        self.store.save_settings(&self.settings);
    }

    /// Toggles score autosave and persists the change.
    pub fn toggle_autosave(&mut self) {
        self.settings.autosave_score = !self.settings.autosave_score;
        self.store.save_settings(&self.settings);
    }

    /// Persists the current settings.
    pub fn save_settings(&self) {
        self.store.save_settings(&self.settings);
    }

    /// Bumps the score for a finished game; autosaves when enabled.
    pub fn record_outcome(&mut self, status: GameStatus) {
        self.score.record(status);
        if self.settings.autosave_score {
            self.store.save_score(&self.score);
        }
    }

    /// Persists the score unconditionally (reset and explicit save/load).
    pub fn save_score_now(&self) {
        self.store.save_score(&self.score);
    }

    /// Records an error for the controller to surface as a modal popup.
    ///
    /// The message also lands in the log file with a timestamp.
    pub fn report_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!(%message, "UI error");
        self.last_error = Some(message);
    }

    fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }
}

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Game(GameScreen),
    Settings(SettingsScreen),
    ScoreView(ScoreViewScreen),
    Help(HelpScreen),
}

/// Controller that drives the screen state machine.
///
/// Call [`AppController::run`] to start the event loop.
#[derive(Debug)]
pub struct AppController {
    ctx: AppContext,
    parked_game: Option<GameScreen>,
    error_popup: Option<String>,
}

impl AppController {
    /// Creates a controller, loading persisted state from the store.
    pub fn new(store: Store) -> Self {
        Self {
            ctx: AppContext::new(store),
            parked_game: None,
            error_popup: None,
        }
    }

    /// The stored window size, clamped to the minimum, for startup resize.
    pub fn preferred_window_size(&self) -> (u16, u16) {
        (
            self.ctx.settings.width.max(MIN_COLS),
            self.ctx.settings.height.max(MIN_ROWS),
        )
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        info!("Starting event loop");

        let mut screen = ActiveScreen::Game(GameScreen::new());
        let mut last_blink = Instant::now();

        loop {
            if let Some(message) = self.ctx.take_error() {
                self.error_popup = Some(message);
            }

            terminal.draw(|f| {
                match &screen {
                    ActiveScreen::Game(s) => s.render(f, &self.ctx),
                    ActiveScreen::Settings(s) => s.render(f, &self.ctx),
                    ActiveScreen::ScoreView(s) => s.render(f, &self.ctx),
                    ActiveScreen::Help(s) => s.render(f, &self.ctx),
                }
                if let Some(message) = &self.error_popup {
                    ui::render_error_popup(f, message, &self.ctx.palette());
                }
            })?;

            // Poll for input with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        // The error popup is modal: any key dismisses it.
                        if self.error_popup.take().is_some() {
                            continue;
                        }
                        let transition = match &mut screen {
                            ActiveScreen::Game(s) => s.handle_key(key, &mut self.ctx),
                            ActiveScreen::Settings(s) => s.handle_key(key, &mut self.ctx),
                            ActiveScreen::ScoreView(s) => s.handle_key(key, &mut self.ctx),
                            ActiveScreen::Help(s) => s.handle_key(key, &mut self.ctx),
                        };
                        screen = match self.apply_transition(transition, screen) {
                            Some(next) => next,
                            None => {
                                self.persist_on_quit();
                                return Ok(());
                            }
                        };
                    }
                    Event::Mouse(mouse)
                        if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                    {
                        if self.error_popup.take().is_some() {
                            continue;
                        }
                        let size = terminal.size()?;
                        let area = Rect::new(0, 0, size.width, size.height);
                        let transition = match &mut screen {
                            ActiveScreen::Game(s) => s.handle_mouse(mouse, area, &mut self.ctx),
                            ActiveScreen::Settings(s) => s.handle_mouse(mouse, area, &mut self.ctx),
                            ActiveScreen::ScoreView(s) => s.handle_mouse(mouse, area, &mut self.ctx),
                            ActiveScreen::Help(s) => s.handle_mouse(mouse, area, &mut self.ctx),
                        };
                        screen = match self.apply_transition(transition, screen) {
                            Some(next) => next,
                            None => {
                                self.persist_on_quit();
                                return Ok(());
                            }
                        };
                    }
                    _ => {}
                }
            }

            if last_blink.elapsed() >= BLINK_INTERVAL {
                last_blink = Instant::now();
                match &mut screen {
                    ActiveScreen::Game(s) => s.tick(&self.ctx),
                    ActiveScreen::Settings(s) => s.tick(&self.ctx),
                    ActiveScreen::ScoreView(s) => s.tick(&self.ctx),
                    ActiveScreen::Help(s) => s.tick(&self.ctx),
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Applies a screen transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),
            ScreenTransition::GoToGame => {
                self.park(current);
                let game = self.parked_game.take().unwrap_or_default();
                Some(ActiveScreen::Game(game))
            }
            ScreenTransition::GoToSettings => {
                self.park(current);
                Some(ActiveScreen::Settings(SettingsScreen::new()))
            }
            ScreenTransition::GoToScoreView => {
                self.park(current);
                Some(ActiveScreen::ScoreView(ScoreViewScreen::new()))
            }
            ScreenTransition::GoToHelp => {
                self.park(current);
                Some(ActiveScreen::Help(HelpScreen::new()))
            }
            ScreenTransition::Quit => {
                info!("Quitting");
                None
            }
        }
    }

    /// Keeps a game in progress alive across navigation.
    fn park(&mut self, screen: ActiveScreen) {
        if let ActiveScreen::Game(game) = screen {
            self.parked_game = Some(game);
        }
    }

    /// Saves the terminal size and settings on the way out.
    fn persist_on_quit(&mut self) {
        if let Ok((cols, rows)) = crossterm::terminal::size() {
            self.ctx.settings.width = cols.max(MIN_COLS);
            self.ctx.settings.height = rows.max(MIN_ROWS);
        }
        self.ctx.save_settings();
    }
}
