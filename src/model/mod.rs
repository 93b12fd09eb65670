//! Metric snapshot types handed to the dashboard by samplers.

mod snapshot;

pub use snapshot::{
    ContextSwitches, MemoryComposition, MetricSnapshot, PageFaults, ProcessRow, ProcessSnapshot,
    ProcessTableSnapshot,
};
