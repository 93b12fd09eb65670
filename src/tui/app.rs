//! Main TUI application.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info, warn};

use crate::provider::SnapshotProvider;

use super::error::Result;
use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::page::{Page, PageEvent};
use super::render::render;
use super::state::AppState;

/// Main TUI application.
pub struct App {
    provider: Box<dyn SnapshotProvider>,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App showing `page`, fed by `provider`.
    pub fn new(provider: Box<dyn SnapshotProvider>, page: Page) -> Self {
        Self {
            provider,
            state: AppState::new(page),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs the TUI application until the user quits.
    ///
    /// The terminal is restored even when the loop fails.
    pub fn run(mut self, tick_rate: Duration) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        info!(page = self.state.page.name(), ?tick_rate, "dashboard started");
        let result = self.event_loop(&mut terminal, tick_rate);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!("dashboard stopped");
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        tick_rate: Duration,
    ) -> Result<()> {
        let events = EventHandler::new(tick_rate);

        let size = terminal.size()?;
        self.resize(size.width, size.height)?;

        // Initial data fetch
        self.advance()?;

        while !self.should_quit {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next() {
                Ok(Event::Tick) => {
                    if !self.state.paused {
                        self.advance()?;
                    }
                }
                Ok(Event::Key(key)) => {
                    if handle_key(&mut self.state, key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Resize(width, height)) => self.resize(width, height)?,
                Err(_) => {
                    self.should_quit = true;
                }
            }
        }
        Ok(())
    }

    /// Pulls the next snapshot and binds it to the page.
    pub fn advance(&mut self) -> Result<()> {
        match self.provider.advance() {
            Some(snapshot) => {
                self.state.page.handle(PageEvent::Tick(snapshot))?;
                self.state.status_message = None;
            }
            None => {
                if let Some(err) = self.provider.last_error() {
                    debug!(%err, "no snapshot this tick");
                    self.state.status_message = Some(err.to_string());
                }
            }
        }
        Ok(())
    }

    /// Lays the page out again. A terminal that is too small keeps the
    /// previous layout and shows the error in the status badge until a
    /// usable size arrives; any other error is fatal.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        match self.state.page.handle(PageEvent::Resize(width, height)) {
            Ok(()) => {
                self.state.layout_warning = None;
                Ok(())
            }
            Err(err) if err.is_recoverable() => {
                warn!(%err, "keeping previous layout");
                self.state.layout_warning = Some(err.to_string());
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
