//! Scrollable list of lines.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{List as ListWidget, ListItem};

use super::pane_block;
use crate::tui::style::PaneStyle;

/// List of display strings with a scroll offset.
///
/// The offset is view state, not payload: it survives payload updates and is
/// only clamped when the list shrinks.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pane: PaneStyle,
    text: Style,
    items: Vec<String>,
    offset: usize,
}

impl List {
    pub fn new(pane: PaneStyle, text: Style) -> Self {
        Self {
            pane,
            text,
            items: Vec::new(),
            offset: 0,
        }
    }

    pub fn pane(&self) -> &PaneStyle {
        &self.pane
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.clamp_offset();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines);
        self.clamp_offset();
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.items.len().saturating_sub(1);
    }

    fn clamp_offset(&mut self) {
        let max = self.items.len().saturating_sub(1);
        if self.offset > max {
            self.offset = max;
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .skip(self.offset)
            .map(|line| ListItem::new(line.as_str()))
            .collect();
        let list = ListWidget::new(items)
            .block(pane_block(&self.pane))
            .style(self.text);
        frame.render_widget(list, area);
    }
}
