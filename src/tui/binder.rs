//! Projects metric snapshots onto widget payloads.
//!
//! Every tick rewrites every payload of the page. Fields the sampler left
//! out become zero or empty, so a pane never shows a value from an earlier
//! tick by omission.

use std::fmt::Display;

use chrono::{Local, TimeZone};

use super::error::{DashboardError, Result};
use super::page::{AllProcessesPage, Page, SingleProcessPage};
use crate::fmt::{bytes_to_mib, format_creation_time, format_process_line};
use crate::model::{MetricSnapshot, ProcessRow, ProcessSnapshot, ProcessTableSnapshot};

/// Applies `snapshot` to `page`, formatting timestamps in local time.
pub fn apply_snapshot(page: &mut Page, snapshot: MetricSnapshot) -> Result<()> {
    apply_snapshot_in(page, snapshot, &Local)
}

/// Applies `snapshot` to `page`, formatting timestamps in `tz`.
///
/// A snapshot of the other variant is rejected before anything is written.
pub fn apply_snapshot_in<Tz>(page: &mut Page, snapshot: MetricSnapshot, tz: &Tz) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match (page, snapshot) {
        (Page::SingleProcess(page), MetricSnapshot::Process(snapshot)) => {
            bind_process(page, snapshot, tz)
        }
        (Page::AllProcesses(page), MetricSnapshot::AllProcesses(snapshot)) => {
            bind_process_table(page, snapshot, tz);
            Ok(())
        }
        (page, snapshot) => Err(DashboardError::SnapshotMismatch {
            page: page.name(),
            snapshot: snapshot.kind(),
        }),
    }
}

fn bind_process<Tz>(page: &mut SingleProcessPage, snapshot: ProcessSnapshot, tz: &Tz) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let ctx = snapshot
        .context_switches
        .map(|c| [c.voluntary as f64, c.involuntary as f64]);
    let faults = snapshot
        .page_faults
        .map(|f| [f.minor as f64, f.major as f64]);
    let memory = snapshot.memory.map(|m| {
        [
            bytes_to_mib(m.rss),
            bytes_to_mib(m.data),
            bytes_to_mib(m.stack),
            bytes_to_mib(m.swap),
        ]
    });
    let identity = snapshot.identity.map(|row| vec![identity_row(row, tz)]);

    // Nothing is written until every payload has passed its shape check.
    if let Some(values) = &ctx {
        page.context_switches.check_values(values)?;
    }
    if let Some(values) = &faults {
        page.page_faults.check_values(values)?;
    }
    if let Some(values) = &memory {
        page.mem_stats.check_values(values)?;
    }
    if let Some(rows) = &identity {
        page.identity.check_rows(rows)?;
    }

    match ctx {
        Some(values) => page.context_switches.set_values(&values)?,
        None => page.context_switches.clear(),
    }
    match faults {
        Some(values) => page.page_faults.set_values(&values)?,
        None => page.page_faults.clear(),
    }
    match memory {
        Some(values) => page.mem_stats.set_values(&values)?,
        None => page.mem_stats.clear(),
    }
    match identity {
        Some(rows) => page.identity.set_rows(rows)?,
        None => page.identity.clear(),
    }
    match snapshot.cpu_percent {
        Some(value) => page.cpu.set_percent(value),
        None => page.cpu.clear(),
    }
    match snapshot.mem_percent {
        Some(value) => page.mem.set_percent(value),
        None => page.mem.clear(),
    }
    page.children.set_items(snapshot.children);
    Ok(())
}

fn identity_row<Tz>(row: ProcessRow, tz: &Tz) -> Vec<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    vec![
        row.pid.to_string(),
        row.command,
        row.status,
        row.foreground.to_string(),
        row.threads.to_string(),
        format_creation_time(row.created_at_ms, tz),
    ]
}

fn bind_process_table<Tz>(page: &mut AllProcessesPage, snapshot: ProcessTableSnapshot, tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let widths = *page.widths();
    let lines = snapshot
        .processes
        .iter()
        .map(|row| format_process_line(row, &widths, tz))
        .collect();
    page.body.set_items(lines);
}
