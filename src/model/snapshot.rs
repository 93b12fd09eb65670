//! One tick worth of process metrics.
//!
//! Fields a sampler could not read are `None` (or empty) and are rendered
//! as explicit zero/empty values, never as the previous tick's value.

/// Voluntary and involuntary context switch counts.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ContextSwitches {
    pub voluntary: u64,
    pub involuntary: u64,
}

/// Minor and major page fault counts.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PageFaults {
    pub minor: u64,
    pub major: u64,
}

/// Memory composition of a process, in bytes.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MemoryComposition {
    pub rss: u64,
    pub data: u64,
    pub stack: u64,
    pub swap: u64,
}

/// One row of the process table.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProcessRow {
    pub pid: u32,
    pub command: String,
    pub cpu_percent: f64,
    pub mem_percent: f64,
    pub status: String,
    /// Whether the process is in the terminal's foreground process group.
    pub foreground: bool,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at_ms: i64,
    pub threads: u32,
}

/// Metrics of a single process.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProcessSnapshot {
    pub cpu_percent: Option<f64>,
    pub mem_percent: Option<f64>,
    pub identity: Option<ProcessRow>,
    pub children: Vec<String>,
    pub context_switches: Option<ContextSwitches>,
    pub page_faults: Option<PageFaults>,
    pub memory: Option<MemoryComposition>,
}

/// Every tracked process.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProcessTableSnapshot {
    pub processes: Vec<ProcessRow>,
}

/// Snapshot for one refresh tick.
///
/// Every snapshot is complete; there is no "unchanged" marker, a sampler
/// that saw no change sends the same values again.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricSnapshot {
    Process(ProcessSnapshot),
    AllProcesses(ProcessTableSnapshot),
}

impl MetricSnapshot {
    /// Short name of the variant, used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MetricSnapshot::Process(_) => "single-process",
            MetricSnapshot::AllProcesses(_) => "all-processes",
        }
    }
}
