//! Text table.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell, Row, Table as TableWidget};

use super::pane_block;
use crate::tui::error::{DashboardError, Result};
use crate::tui::style::PaneStyle;

/// Table of display strings.
///
/// With fixed column widths or a fixed header every row must carry exactly
/// one cell per column; otherwise columns share the pane width evenly.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pane: PaneStyle,
    text: Style,
    alignment: Alignment,
    widths: Option<Vec<u16>>,
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(pane: PaneStyle, text: Style, alignment: Alignment) -> Self {
        Self {
            pane,
            text,
            alignment,
            widths: None,
            header: None,
            rows: Vec::new(),
        }
    }

    /// Fixes a header row drawn above the payload rows.
    pub fn with_header(mut self, header: &[&str]) -> Self {
        self.header = Some(header.iter().map(|h| h.to_string()).collect());
        self
    }

    /// Fixes the column widths, and with them the cell count of every row.
    pub fn with_widths(mut self, widths: &[u16]) -> Self {
        self.widths = Some(widths.to_vec());
        self
    }

    pub fn pane(&self) -> &PaneStyle {
        &self.pane
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn widths(&self) -> Option<&[u16]> {
        self.widths.as_deref()
    }

    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of cells every row must have, if fixed.
    pub fn column_count(&self) -> Option<usize> {
        self.widths
            .as_ref()
            .map(Vec::len)
            .or_else(|| self.header.as_ref().map(Vec::len))
    }

    /// Checks that every row has the fixed cell count, without storing them.
    pub fn check_rows(&self, rows: &[Vec<String>]) -> Result<()> {
        if let Some(expected) = self.column_count()
            && let Some(bad) = rows.iter().find(|row| row.len() != expected)
        {
            return Err(DashboardError::PayloadShape {
                widget: self.pane.title.clone(),
                expected,
                actual: bad.len(),
            });
        }
        Ok(())
    }

    /// Replaces all rows. A row with the wrong cell count is rejected and
    /// the previous rows are kept.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) -> Result<()> {
        self.check_rows(&rows)?;
        self.rows = rows;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    fn constraints(&self) -> Vec<Constraint> {
        match &self.widths {
            Some(widths) => widths.iter().map(|&w| Constraint::Length(w)).collect(),
            None => {
                let columns = self
                    .column_count()
                    .unwrap_or_else(|| self.rows.iter().map(Vec::len).max().unwrap_or(0))
                    .max(1);
                (0..columns)
                    .map(|_| Constraint::Ratio(1, columns as u32))
                    .collect()
            }
        }
    }

    fn row<'a>(&self, cells: &'a [String]) -> Row<'a> {
        Row::new(
            cells
                .iter()
                .map(|text| Cell::from(Line::from(text.as_str()).alignment(self.alignment))),
        )
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self.rows.iter().map(|cells| self.row(cells)).collect();
        // Fixed-width columns already carry their own leading space.
        let spacing = if self.widths.is_some() { 0 } else { 1 };
        let mut table = TableWidget::new(rows, self.constraints())
            .block(pane_block(&self.pane))
            .style(self.text)
            .column_spacing(spacing);
        if let Some(header) = &self.header {
            table = table.header(self.row(header).style(self.text.add_modifier(Modifier::BOLD)));
        }
        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn pane() -> PaneStyle {
        PaneStyle::new(" PID ", Color::Cyan, Color::White)
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_free_table_accepts_any_row_shape() {
        let mut table = Table::new(pane(), Style::default(), Alignment::Center);
        table.set_rows(vec![row(&["1", "init"]), row(&["2"])]).unwrap();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.constraints().len(), 2);
    }

    #[test]
    fn test_fixed_width_table_rejects_wrong_cell_count() {
        let mut table =
            Table::new(pane(), Style::default(), Alignment::Left).with_widths(&[10, 40, 10]);
        table.set_rows(vec![row(&["a", "b", "c"])]).unwrap();
        assert!(table.check_rows(&[row(&["a", "b"])]).is_err());

        let err = table.set_rows(vec![row(&["a", "b"])]).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::PayloadShape {
                expected: 3,
                actual: 2,
                ..
            }
        ));
        assert_eq!(table.rows(), &[row(&["a", "b", "c"])]);
    }

    #[test]
    fn test_header_fixes_row_shape() {
        let mut table = Table::new(pane(), Style::default(), Alignment::Center)
            .with_header(&["PID", "Command"]);
        assert_eq!(table.column_count(), Some(2));
        assert!(table.set_rows(vec![row(&["1"])]).is_err());
        table.set_rows(vec![row(&["1", "init"])]).unwrap();
        assert_eq!(table.header().map(|h| h.len()), Some(2));
        assert_eq!(table.constraints().len(), 2);
    }

    #[test]
    fn test_clear_keeps_header_and_widths() {
        let mut table = Table::new(pane(), Style::default(), Alignment::Center)
            .with_header(&["PID", "Command"]);
        table.set_rows(vec![row(&["1", "init"])]).unwrap();
        table.clear();
        assert!(table.rows().is_empty());
        assert_eq!(table.column_count(), Some(2));
    }

    #[test]
    fn test_empty_table_still_has_one_column() {
        let table = Table::new(pane(), Style::default(), Alignment::Center);
        assert_eq!(table.constraints(), vec![Constraint::Ratio(1, 1)]);
    }
}
