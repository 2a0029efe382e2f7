//! Screen trait and transition type for the application state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::controller::AppContext;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`AppController`](crate::controller::AppController) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Return to the game board.
    GoToGame,
    /// Open the settings screen.
    GoToSettings,
    /// Open the score screen.
    GoToScoreView,
    /// Open the help screen.
    GoToHelp,
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the application state machine.
///
/// Each screen owns its own state, renders its UI, and handles input.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, ctx: &AppContext);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut AppContext) -> ScreenTransition;

    /// Handles a left mouse click; `area` is the full frame rectangle.
    ///
    /// Most screens ignore the mouse.
    fn handle_mouse(
        &mut self,
        _event: MouseEvent,
        _area: Rect,
        _ctx: &mut AppContext,
    ) -> ScreenTransition {
        ScreenTransition::Stay
    }

    /// Periodic animation tick, fired roughly twice a second.
    fn tick(&mut self, _ctx: &AppContext) {}
}
