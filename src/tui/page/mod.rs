//! Page model: one grid plus its bound widgets per view.

mod all;
mod single;

pub use all::{AllProcessesPage, ListingPane};
pub use single::{
    CONTEXT_SWITCH_LABELS, IDENTITY_COLUMNS, MEMORY_LABELS, PAGE_FAULT_LABELS, ProcessPane,
    SingleProcessPage,
};

use ratatui::layout::Rect;
use tracing::{debug, trace};

use super::binder::apply_snapshot;
use super::error::Result;
use super::style::DashboardStyle;
use super::widgets::{List, WidgetRef};
use crate::model::MetricSnapshot;

/// Events consumed by a page, strictly in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// New metrics for one refresh tick.
    Tick(MetricSnapshot),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
}

/// One of the two dashboard views.
#[derive(Debug, Clone)]
pub enum Page {
    SingleProcess(SingleProcessPage),
    AllProcesses(AllProcessesPage),
}

impl Page {
    /// Builds the single-process page laid out for a `width` x `height`
    /// terminal. A size that leaves any pane empty fails with
    /// `DegenerateSize`.
    pub fn single_process(style: &DashboardStyle, width: u16, height: u16) -> Result<Self> {
        Ok(Page::SingleProcess(SingleProcessPage::with_size(
            style, width, height,
        )?))
    }

    /// Builds the process listing laid out for a `width` x `height` terminal.
    pub fn all_processes(style: &DashboardStyle, width: u16, height: u16) -> Result<Self> {
        Ok(Page::AllProcesses(AllProcessesPage::with_size(
            style, width, height,
        )?))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::SingleProcess(_) => SingleProcessPage::NAME,
            Page::AllProcesses(_) => AllProcessesPage::NAME,
        }
    }

    /// Recomputes every pane rectangle. Payloads are never touched.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        match self {
            Page::SingleProcess(page) => page.resize(width, height),
            Page::AllProcesses(page) => page.resize(width, height),
        }
    }

    /// Projects `snapshot` onto the widget payloads.
    pub fn apply(&mut self, snapshot: MetricSnapshot) -> Result<()> {
        apply_snapshot(self, snapshot)
    }

    pub fn handle(&mut self, event: PageEvent) -> Result<()> {
        match event {
            PageEvent::Tick(snapshot) => {
                trace!(page = self.name(), "applying snapshot");
                self.apply(snapshot)
            }
            PageEvent::Resize(width, height) => {
                debug!(page = self.name(), width, height, "resizing");
                self.resize(width, height)
            }
        }
    }

    /// Area covered by the last successful layout.
    pub fn area(&self) -> Rect {
        match self {
            Page::SingleProcess(page) => page.grid().area(),
            Page::AllProcesses(page) => page.grid().area(),
        }
    }

    pub fn widgets(&self) -> Vec<WidgetRef<'_>> {
        match self {
            Page::SingleProcess(page) => page.widgets(),
            Page::AllProcesses(page) => page.widgets(),
        }
    }

    /// Leaf rectangles paired with their widgets, in layout order.
    pub fn panes(&self) -> Vec<(Rect, WidgetRef<'_>)> {
        match self {
            Page::SingleProcess(page) => page.panes(),
            Page::AllProcesses(page) => page.panes(),
        }
    }

    /// The list the user scrolls: child processes or the process listing.
    pub fn scrollable_mut(&mut self) -> &mut List {
        match self {
            Page::SingleProcess(page) => &mut page.children,
            Page::AllProcesses(page) => &mut page.body,
        }
    }

    /// Number of visible lines in the scrollable list.
    pub fn scroll_page_size(&self) -> usize {
        let rect = match self {
            Page::SingleProcess(page) => page.grid().leaf_rect(ProcessPane::Children),
            Page::AllProcesses(page) => page.grid().leaf_rect(ListingPane::Body),
        };
        // Borders take one line at the top and one at the bottom.
        rect.map(|r| usize::from(r.height.saturating_sub(2)))
            .unwrap_or(0)
            .max(1)
    }
}
