//! Percentage gauge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Gauge as GaugeWidget;

use super::pane_block;
use crate::tui::style::PaneStyle;

/// Gauge showing one percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pane: PaneStyle,
    bar: Color,
    percent: f64,
}

impl Gauge {
    pub fn new(pane: PaneStyle, bar: Color) -> Self {
        Self {
            pane,
            bar,
            percent: 0.0,
        }
    }

    pub fn pane(&self) -> &PaneStyle {
        &self.pane
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Sets the value, clamped into `[0, 100]`. NaN reads as 0.
    pub fn set_percent(&mut self, value: f64) {
        self.percent = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 100.0)
        };
    }

    pub fn clear(&mut self) {
        self.percent = 0.0;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let gauge = GaugeWidget::default()
            .block(pane_block(&self.pane))
            .gauge_style(Style::default().fg(self.bar))
            .ratio(self.percent / 100.0)
            .label(format!("{:.2}%", self.percent));
        frame.render_widget(gauge, area);
    }
}
