//! Dashboard widgets.
//!
//! Every pane is one of four kinds. Each kind keeps its fixed identity
//! ([`PaneStyle`]) apart from its payload and validates payload updates
//! against the shape fixed at construction.

mod bar_chart;
mod gauge;
mod list;
mod table;

pub use bar_chart::{BarChart, BarStyle};
pub use gauge::Gauge;
pub use list::List;
pub use table::Table;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::widgets::Block;

use super::style::PaneStyle;

/// Borrowed view of one pane, used by the paint stage and by tests.
#[derive(Debug, Clone, Copy)]
pub enum WidgetRef<'a> {
    Gauge(&'a Gauge),
    Table(&'a Table),
    List(&'a List),
    BarChart(&'a BarChart),
}

impl<'a> WidgetRef<'a> {
    pub fn pane(&self) -> &'a PaneStyle {
        match *self {
            WidgetRef::Gauge(w) => w.pane(),
            WidgetRef::Table(w) => w.pane(),
            WidgetRef::List(w) => w.pane(),
            WidgetRef::BarChart(w) => w.pane(),
        }
    }

    pub fn title(&self) -> &'a str {
        &self.pane().title
    }

    /// Short name of the widget kind.
    pub fn kind(&self) -> &'static str {
        match self {
            WidgetRef::Gauge(_) => "gauge",
            WidgetRef::Table(_) => "table",
            WidgetRef::List(_) => "list",
            WidgetRef::BarChart(_) => "bar chart",
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            WidgetRef::Gauge(w) => w.render(frame, area),
            WidgetRef::Table(w) => w.render(frame, area),
            WidgetRef::List(w) => w.render(frame, area),
            WidgetRef::BarChart(w) => w.render(frame, area),
        }
    }
}

/// Bordered block carrying the pane's title and colors.
fn pane_block(pane: &PaneStyle) -> Block<'_> {
    let block = Block::bordered().border_style(pane.border_style());
    if pane.title.is_empty() {
        block
    } else {
        block.title(Span::styled(pane.title.as_str(), pane.title_style()))
    }
}
