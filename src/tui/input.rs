//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::AppState;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Applies `key` to `state` and tells the loop what to do next.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    let page_size = state.page.scroll_page_size();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('p') | KeyCode::Char(' ') => state.toggle_pause(),
        KeyCode::Up | KeyCode::Char('k') => state.page.scrollable_mut().scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => state.page.scrollable_mut().scroll_down(1),
        KeyCode::PageUp => state.page.scrollable_mut().scroll_up(page_size),
        KeyCode::PageDown => state.page.scrollable_mut().scroll_down(page_size),
        KeyCode::Home | KeyCode::Char('g') => state.page.scrollable_mut().scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => state.page.scrollable_mut().scroll_to_bottom(),
        _ => {}
    }
    KeyAction::None
}
