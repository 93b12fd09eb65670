//! All-processes page: fixed heading table over a scrollable body list.

use ratatui::layout::Rect;

use crate::tui::error::Result;
use crate::tui::layout::{Grid, Node};
use crate::tui::style::{DashboardStyle, HEADING_COLUMNS};
use crate::tui::widgets::{List, Table, WidgetRef};

/// Panes of the all-processes page, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingPane {
    Heading,
    Body,
}

/// Widgets and grid of the process listing.
#[derive(Debug, Clone)]
pub struct AllProcessesPage {
    grid: Grid<ListingPane>,
    widths: [u16; 8],
    heading: Table,
    pub(crate) body: List,
}

impl AllProcessesPage {
    pub const NAME: &'static str = "all-processes";

    pub fn layout() -> Node<ListingPane> {
        Node::rows(
            1.0,
            vec![
                Node::leaf(0.12, ListingPane::Heading),
                Node::leaf(0.88, ListingPane::Body),
            ],
        )
    }

    /// Builds the widgets and composes the grid. The heading row is written
    /// here once and never changes afterwards.
    fn new(style: &DashboardStyle) -> Result<Self> {
        let mut heading = Table::new(
            style.listing_pane(),
            style.text_style(),
            style.heading_alignment,
        )
        .with_widths(&style.heading_widths);
        heading.set_rows(vec![
            HEADING_COLUMNS
                .iter()
                .map(|name| format!(" {}", name))
                .collect(),
        ])?;

        Ok(Self {
            grid: Grid::compose(Self::NAME, Self::layout())?,
            widths: style.heading_widths,
            heading,
            body: List::new(style.listing_pane(), style.text_style()),
        })
    }

    /// Builds the page and lays it out for a `width` x `height` terminal.
    pub fn with_size(style: &DashboardStyle, width: u16, height: u16) -> Result<Self> {
        let mut page = Self::new(style)?;
        page.resize(width, height)?;
        Ok(page)
    }

    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.grid.resize(width, height)
    }

    pub fn grid(&self) -> &Grid<ListingPane> {
        &self.grid
    }

    /// Column widths shared by the heading and the body lines.
    pub fn widths(&self) -> &[u16; 8] {
        &self.widths
    }

    pub fn widget(&self, pane: ListingPane) -> WidgetRef<'_> {
        match pane {
            ListingPane::Heading => WidgetRef::Table(&self.heading),
            ListingPane::Body => WidgetRef::List(&self.body),
        }
    }

    pub fn widgets(&self) -> Vec<WidgetRef<'_>> {
        vec![self.widget(ListingPane::Heading), self.widget(ListingPane::Body)]
    }

    pub fn panes(&self) -> Vec<(Rect, WidgetRef<'_>)> {
        self.grid
            .leaves()
            .map(|(pane, rect)| (rect, self.widget(pane)))
            .collect()
    }

    pub fn heading(&self) -> &Table {
        &self.heading
    }

    pub fn body(&self) -> &List {
        &self.body
    }
}
