//! Color scheme and pane styling.
//!
//! All styling is carried by an immutable [`DashboardStyle`] value that is
//! handed to page construction, so two dashboards never share mutable state.

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};

/// Heading columns of the all-processes page.
pub const HEADING_COLUMNS: [&str; 8] = [
    "PID",
    "Command",
    "CPU",
    "Memory",
    "Status",
    "Foreground",
    "Creation Time",
    "Thread Count",
];

/// Widths of the heading columns, shared with the body lines.
pub const HEADING_WIDTHS: [u16; 8] = [10, 40, 10, 10, 8, 12, 23, 15];

/// Fixed visual identity of a pane: title and frame colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneStyle {
    pub title: String,
    pub border: Color,
    pub title_fg: Color,
}

impl PaneStyle {
    pub fn new(title: impl Into<String>, border: Color, title_fg: Color) -> Self {
        Self {
            title: title.into(),
            border,
            title_fg,
        }
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title_fg)
    }
}

/// Dashboard-wide palette and widget defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStyle {
    /// Border color of every pane.
    pub border: Color,
    /// Title color of the per-process panes.
    pub title: Color,
    /// Title color of the all-processes panes.
    pub listing_title: Color,
    /// Body text color of tables and lists.
    pub text: Color,
    /// Fill color of the percentage gauges.
    pub gauge_bar: Color,
    /// Bar colors of the two-bar charts, cycled in label order.
    pub pair_bars: Vec<Color>,
    /// Bar colors of the memory composition chart, cycled in label order.
    pub memory_bars: Vec<Color>,
    /// Color of the labels under the bars.
    pub bar_label: Color,
    /// Color of the numbers printed inside the bars.
    pub bar_value: Color,
    /// Width of a single bar in columns.
    pub bar_width: u16,
    /// Alignment of the identity table cells.
    pub identity_alignment: Alignment,
    /// Alignment of the heading table cells.
    pub heading_alignment: Alignment,
    /// Column widths of the heading table and body lines.
    pub heading_widths: [u16; 8],
}

impl Default for DashboardStyle {
    fn default() -> Self {
        Self {
            border: Color::Cyan,
            title: Color::White,
            listing_title: Color::Cyan,
            text: Color::White,
            gauge_bar: Color::Green,
            pair_bars: vec![Color::Green, Color::Cyan],
            memory_bars: vec![Color::Green, Color::Magenta, Color::Yellow, Color::Cyan],
            bar_label: Color::White,
            bar_value: Color::Black,
            bar_width: 10,
            identity_alignment: Alignment::Center,
            heading_alignment: Alignment::Left,
            heading_widths: HEADING_WIDTHS,
        }
    }
}

impl DashboardStyle {
    /// Identity of a per-process pane with the given title.
    pub fn pane(&self, title: &str) -> PaneStyle {
        PaneStyle::new(title, self.border, self.title)
    }

    /// Identity of an untitled all-processes pane.
    pub fn listing_pane(&self) -> PaneStyle {
        PaneStyle::new("", self.border, self.listing_title)
    }

    /// Default text style.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }
}

/// Styles of chrome drawn outside the panes.
pub struct Styles;

impl Styles {
    /// Status badge (paused, provider errors).
    pub fn badge() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    }
}
