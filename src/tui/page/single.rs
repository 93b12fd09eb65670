//! Single-process page: gauges, identity table, child list and bar charts.

use ratatui::layout::Rect;

use crate::tui::error::Result;
use crate::tui::layout::{Grid, Node};
use crate::tui::style::DashboardStyle;
use crate::tui::widgets::{BarChart, BarStyle, Gauge, List, Table, WidgetRef};

pub const CONTEXT_SWITCH_LABELS: [&str; 2] = ["Volun", "Involun"];
pub const PAGE_FAULT_LABELS: [&str; 2] = ["minr", "mjr"];
pub const MEMORY_LABELS: [&str; 4] = ["RSS", "Data", "Stack", "Swap"];

/// Columns of the identity table.
pub const IDENTITY_COLUMNS: [&str; 6] =
    ["PID", "Command", "Status", "Foreground", "Threads", "Created"];

/// Panes of the single-process page, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessPane {
    Cpu,
    Mem,
    Identity,
    Children,
    ContextSwitches,
    PageFaults,
    MemStats,
}

impl ProcessPane {
    pub const ALL: [ProcessPane; 7] = [
        ProcessPane::Cpu,
        ProcessPane::Mem,
        ProcessPane::Identity,
        ProcessPane::Children,
        ProcessPane::ContextSwitches,
        ProcessPane::PageFaults,
        ProcessPane::MemStats,
    ];
}

/// Widgets and grid of the single-process view.
#[derive(Debug, Clone)]
pub struct SingleProcessPage {
    grid: Grid<ProcessPane>,
    pub(crate) cpu: Gauge,
    pub(crate) mem: Gauge,
    pub(crate) identity: Table,
    pub(crate) children: List,
    pub(crate) context_switches: BarChart,
    pub(crate) page_faults: BarChart,
    pub(crate) mem_stats: BarChart,
}

impl SingleProcessPage {
    pub const NAME: &'static str = "single-process";

    /// Two equal columns. The left one stacks both gauges, the identity
    /// table and the child list; the right one puts the context switch and
    /// page fault charts side by side above the memory chart.
    pub fn layout() -> Node<ProcessPane> {
        Node::columns(
            1.0,
            vec![
                Node::rows(
                    0.5,
                    vec![
                        Node::leaf(0.125, ProcessPane::Cpu),
                        Node::leaf(0.125, ProcessPane::Mem),
                        Node::leaf(0.35, ProcessPane::Identity),
                        Node::leaf(0.4, ProcessPane::Children),
                    ],
                ),
                Node::rows(
                    0.5,
                    vec![
                        Node::columns(
                            0.6,
                            vec![
                                Node::leaf(0.5, ProcessPane::ContextSwitches),
                                Node::leaf(0.5, ProcessPane::PageFaults),
                            ],
                        ),
                        Node::leaf(0.4, ProcessPane::MemStats),
                    ],
                ),
            ],
        )
    }

    /// Builds the widgets and composes the grid. Rectangles stay empty until
    /// the first [`SingleProcessPage::resize`].
    fn new(style: &DashboardStyle) -> Result<Self> {
        let pair_bars = BarStyle {
            colors: style.pair_bars.clone(),
            width: style.bar_width,
            label: style.bar_label,
            value: style.bar_value,
        };
        let memory_bars = BarStyle {
            colors: style.memory_bars.clone(),
            ..pair_bars.clone()
        };

        Ok(Self {
            grid: Grid::compose(Self::NAME, Self::layout())?,
            cpu: Gauge::new(style.pane(" CPU % "), style.gauge_bar),
            mem: Gauge::new(style.pane(" Mem % "), style.gauge_bar),
            identity: Table::new(
                style.pane(" PID "),
                style.text_style(),
                style.identity_alignment,
            )
            .with_header(&IDENTITY_COLUMNS),
            children: List::new(style.pane(" Child Processes "), style.text_style()),
            context_switches: BarChart::new(
                style.pane(" Ctx switches "),
                &CONTEXT_SWITCH_LABELS,
                pair_bars.clone(),
            ),
            page_faults: BarChart::new(style.pane(" Page Faults "), &PAGE_FAULT_LABELS, pair_bars),
            mem_stats: BarChart::new(style.pane(" Mem Stats (mb) "), &MEMORY_LABELS, memory_bars),
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

    pub fn grid(&self) -> &Grid<ProcessPane> {
        &self.grid
    }

    pub fn widget(&self, pane: ProcessPane) -> WidgetRef<'_> {
        match pane {
            ProcessPane::Cpu => WidgetRef::Gauge(&self.cpu),
            ProcessPane::Mem => WidgetRef::Gauge(&self.mem),
            ProcessPane::Identity => WidgetRef::Table(&self.identity),
            ProcessPane::Children => WidgetRef::List(&self.children),
            ProcessPane::ContextSwitches => WidgetRef::BarChart(&self.context_switches),
            ProcessPane::PageFaults => WidgetRef::BarChart(&self.page_faults),
            ProcessPane::MemStats => WidgetRef::BarChart(&self.mem_stats),
        }
    }

    /// Every widget of the page, in pane order.
    pub fn widgets(&self) -> Vec<WidgetRef<'_>> {
        ProcessPane::ALL.iter().map(|&p| self.widget(p)).collect()
    }

    /// Leaf rectangles paired with their widgets.
    pub fn panes(&self) -> Vec<(Rect, WidgetRef<'_>)> {
        self.grid
            .leaves()
            .map(|(pane, rect)| (rect, self.widget(pane)))
            .collect()
    }

    pub fn cpu(&self) -> &Gauge {
        &self.cpu
    }

    pub fn mem(&self) -> &Gauge {
        &self.mem
    }

    pub fn identity(&self) -> &Table {
        &self.identity
    }

    pub fn children(&self) -> &List {
        &self.children
    }

    pub fn context_switches(&self) -> &BarChart {
        &self.context_switches
    }

    pub fn page_faults(&self) -> &BarChart {
        &self.page_faults
    }

    pub fn mem_stats(&self) -> &BarChart {
        &self.mem_stats
    }
}
