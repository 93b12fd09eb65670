//! Labelled bar chart with a fixed series shape.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart as BarChartWidget, BarGroup};

use super::pane_block;
use crate::tui::error::{DashboardError, Result};
use crate::tui::style::PaneStyle;

/// Bar geometry and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct BarStyle {
    /// Bar colors, cycled in label order.
    pub colors: Vec<Color>,
    pub width: u16,
    pub label: Color,
    pub value: Color,
}

/// Bar chart whose value count always equals its label count.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pane: PaneStyle,
    style: BarStyle,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl BarChart {
    /// Creates a chart with one zero-valued bar per label.
    pub fn new(pane: PaneStyle, labels: &[&str], style: BarStyle) -> Self {
        Self {
            pane,
            style,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            values: vec![0.0; labels.len()],
        }
    }

    pub fn pane(&self) -> &PaneStyle {
        &self.pane
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Checks that `values` has one entry per label, without storing it.
    pub fn check_values(&self, values: &[f64]) -> Result<()> {
        if values.len() != self.labels.len() {
            return Err(DashboardError::PayloadShape {
                widget: self.pane.title.clone(),
                expected: self.labels.len(),
                actual: values.len(),
            });
        }
        Ok(())
    }

    /// Replaces the series. A series of the wrong length is rejected and the
    /// previous values are kept.
    pub fn set_values(&mut self, values: &[f64]) -> Result<()> {
        self.check_values(values)?;
        self.values.copy_from_slice(values);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|v| *v = 0.0);
    }

    /// Color of the bar at `index`.
    pub fn bar_color(&self, index: usize) -> Color {
        if self.style.colors.is_empty() {
            Color::Reset
        } else {
            self.style.colors[index % self.style.colors.len()]
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let bars: Vec<Bar> = self
            .labels
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(i, (label, &value))| {
                let color = self.bar_color(i);
                Bar::default()
                    .value(bar_height(value))
                    .label(Line::from(label.as_str()))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(self.style.value).bg(color))
            })
            .collect();

        let chart = BarChartWidget::default()
            .block(pane_block(&self.pane))
            .bar_width(self.style.width)
            .bar_gap(1)
            .label_style(Style::default().fg(self.style.label))
            .data(BarGroup::default().bars(&bars));
        frame.render_widget(chart, area);
    }
}

fn bar_height(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> BarChart {
        BarChart::new(
            PaneStyle::new(" Ctx switches ", Color::Cyan, Color::White),
            &["Volun", "Involun"],
            BarStyle {
                colors: vec![Color::Green, Color::Cyan],
                width: 10,
                label: Color::White,
                value: Color::Black,
            },
        )
    }

    #[test]
    fn test_new_chart_has_zero_series_of_label_length() {
        let chart = chart();
        assert_eq!(chart.labels(), &["Volun", "Involun"]);
        assert_eq!(chart.values(), &[0.0, 0.0]);
    }

    #[test]
    fn test_set_values_keeps_order() {
        let mut chart = chart();
        chart.set_values(&[12.0, 3.0]).unwrap();
        assert_eq!(chart.values(), &[12.0, 3.0]);
        assert_eq!(chart.labels(), &["Volun", "Involun"]);
    }

    #[test]
    fn test_mismatched_series_is_rejected_and_previous_kept() {
        let mut chart = chart();
        chart.set_values(&[5.0, 6.0]).unwrap();

        for bad in [&[1.0][..], &[1.0, 2.0, 3.0][..], &[][..]] {
            let err = chart.set_values(bad).unwrap_err();
            assert!(matches!(
                err,
                DashboardError::PayloadShape { expected: 2, .. }
            ));
            assert_eq!(chart.values(), &[5.0, 6.0]);
        }
    }

    #[test]
    fn test_clear_zeroes_series_and_keeps_labels() {
        let mut chart = chart();
        chart.set_values(&[5.0, 6.0]).unwrap();
        assert!(chart.check_values(&[1.0]).is_err());
        chart.clear();
        assert_eq!(chart.values(), &[0.0, 0.0]);
        assert_eq!(chart.labels(), &["Volun", "Involun"]);
    }

    #[test]
    fn test_bar_colors_cycle() {
        let chart = chart();
        assert_eq!(chart.bar_color(0), Color::Green);
        assert_eq!(chart.bar_color(1), Color::Cyan);
        assert_eq!(chart.bar_color(2), Color::Green);
    }

    #[test]
    fn test_bar_height_rounds_and_floors_at_zero() {
        assert_eq!(bar_height(2.6), 3);
        assert_eq!(bar_height(-1.0), 0);
        assert_eq!(bar_height(f64::INFINITY), 0);
    }
}
