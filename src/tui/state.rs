//! Application state owned by the render loop.

use super::page::Page;

/// Everything the render loop mutates between frames.
#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    /// Ticks are ignored while paused; resizes are still applied.
    pub paused: bool,
    /// Set while the terminal is too small for the page. The page keeps its
    /// last good layout until a usable size arrives.
    pub layout_warning: Option<String>,
    /// Last provider problem, shown in the status badge until the next
    /// successful tick.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            paused: false,
            layout_warning: None,
            status_message: None,
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Text of the status badge, if any.
    pub fn badge(&self) -> Option<String> {
        if let Some(msg) = self.layout_warning.as_ref().or(self.status_message.as_ref()) {
            Some(format!(" {} ", msg))
        } else if self.paused {
            Some(" PAUSED ".to_string())
        } else {
            None
        }
    }
}
