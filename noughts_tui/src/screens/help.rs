//! Help screen — about text and key reference.

use crossterm::event::KeyEvent;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::{debug, instrument};

use crate::controller::AppContext;
use crate::screen::{Screen, ScreenTransition};

/// Static help screen.
#[derive(Debug, Default)]
pub struct HelpScreen;

impl HelpScreen {
    /// Creates the help screen.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing HelpScreen");
        Self
    }
}

impl Screen for HelpScreen {
    #[instrument(skip(self, frame, ctx))]
    fn render(&self, frame: &mut Frame, ctx: &AppContext) {
        let palette = ctx.palette();
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.bg)),
            area,
        );

        let store = ctx.store();
        let text = format!(
            "noughts — tic-tac-toe for two players at one keyboard\n\
             \n\
             Take turns placing X and O on the 3x3 board.\n\
             Three in a row, column, or diagonal wins; a full board is a draw.\n\
             The score is kept across games.\n\
             \n\
             In the game:\n\
             1-9           place a mark (numpad layout: 1 is bottom-left)\n\
             arrows        move the cursor, Enter or Space to place\n\
             mouse click   place a mark on the clicked square\n\
             u / Ctrl-Z    undo the last move\n\
             n             new game\n\
             t             cycle the color theme\n\
             s             settings\n\
             v             score\n\
             q / Esc       quit\n\
             \n\
             Files:\n\
             settings  {}\n\
             score     {}\n\
             log       {}\n\
             \n\
             Press any key to return to the game.",
            store.settings_path().display(),
            store.score_path().display(),
            store.log_path().display(),
        );

        let help = Paragraph::new(text)
            .style(Style::default().fg(palette.line).bg(palette.panel_bg))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help")
                    .title_style(Style::default().add_modifier(Modifier::BOLD)),
            );
        frame.render_widget(help, area);
    }

    #[instrument(skip(self, _key, _ctx))]
    fn handle_key(&mut self, _key: KeyEvent, _ctx: &mut AppContext) -> ScreenTransition {
        ScreenTransition::GoToGame
    }
}
