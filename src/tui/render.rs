//! Paints the page's widget tree into a frame.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use super::state::AppState;
use super::style::Styles;

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let bounds = frame.area();

    for (rect, widget) in state.page.panes() {
        // Rectangles come from the last good layout and may exceed a frame
        // that shrank below the minimum size.
        let area = rect.intersection(bounds);
        if area.is_empty() {
            continue;
        }
        widget.render(frame, area);
    }

    if let Some(badge) = state.badge() {
        render_badge(frame, bounds, &badge);
    }
}

/// Status badge in the top-right corner, drawn over the pane border.
fn render_badge(frame: &mut Frame, bounds: Rect, text: &str) {
    let width = (text.chars().count() as u16).min(bounds.width);
    if width == 0 || bounds.height == 0 {
        return;
    }
    let area = Rect::new(
        bounds.right().saturating_sub(width + 1).max(bounds.x),
        bounds.y,
        width,
        1,
    )
    .intersection(bounds);
    frame.render_widget(Paragraph::new(text.to_string()).style(Styles::badge()), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContextSwitches, MetricSnapshot, ProcessSnapshot};
    use crate::tui::page::Page;
    use crate::tui::style::DashboardStyle;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn single_state(width: u16, height: u16) -> AppState {
        let mut page = Page::single_process(&DashboardStyle::default(), 120, 40).unwrap();
        page.resize(width, height).unwrap();
        AppState::new(page)
    }

    #[test]
    fn test_single_process_page_draws_every_title() {
        let mut state = single_state(160, 48);
        state
            .page
            .apply(MetricSnapshot::Process(ProcessSnapshot {
                cpu_percent: Some(50.0),
                context_switches: Some(ContextSwitches {
                    voluntary: 12,
                    involuntary: 3,
                }),
                ..ProcessSnapshot::default()
            }))
            .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();
        let text = screen(&terminal);

        for title in [
            " CPU % ",
            " Mem % ",
            " PID ",
            " Child Processes ",
            " Ctx switches ",
            " Page Faults ",
            " Mem Stats (mb) ",
        ] {
            assert!(text.contains(title), "missing {:?}", title);
        }
        assert!(text.contains("50.00%"));
        assert!(text.contains("Volun"));
        assert!(text.contains("Involun"));
    }

    #[test]
    fn test_all_processes_page_draws_heading() {
        let mut page = Page::all_processes(&DashboardStyle::default(), 120, 40).unwrap();
        page.resize(140, 40).unwrap();
        let state = AppState::new(page);

        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();
        let text = screen(&terminal);
        assert!(text.contains("PID"));
        assert!(text.contains("Creation Time"));
        assert!(text.contains("Thread Count"));
    }

    #[test]
    fn test_stale_layout_is_clipped_to_smaller_frame() {
        let state = single_state(200, 60);
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();
        assert!(screen(&terminal).contains("CPU"));
    }

    #[test]
    fn test_paused_badge() {
        let mut state = single_state(100, 30);
        state.toggle_pause();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();
        assert!(screen(&terminal).lines().next().unwrap().contains("PAUSED"));
    }
}
