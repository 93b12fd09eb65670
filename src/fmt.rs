//! Shared formatting helpers for dashboard panes.
//!
//! Pure functions only: no ratatui styles, no layout.

use std::fmt::Display;

use chrono::TimeZone;

use crate::model::ProcessRow;

const MIB: f64 = 1024.0 * 1024.0;

/// Format a percentage with two decimals: `"12.50%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Convert a byte count to mebibytes.
pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / MIB
}

/// Format a creation timestamp (milliseconds since epoch) in `tz`.
///
/// Non-positive or out-of-range timestamps render as `"-"`.
pub fn format_creation_time<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if millis <= 0 {
        return "-".to_string();
    }
    tz.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Fit `text` into a column of exactly `width` characters: one leading
/// space, then the text truncated or padded.
pub fn fit_column(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if width == 0 {
        return String::new();
    }
    let body: String = text.chars().take(width - 1).collect();
    format!(" {:<pad$}", body, pad = width - 1)
}

/// Format one process as a line aligned to the heading columns
/// (PID, Command, CPU, Memory, Status, Foreground, Creation Time, Thread Count).
pub fn format_process_line<Tz>(row: &ProcessRow, widths: &[u16; 8], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let fields = [
        row.pid.to_string(),
        row.command.clone(),
        format_percent(row.cpu_percent),
        format_percent(row.mem_percent),
        row.status.clone(),
        row.foreground.to_string(),
        format_creation_time(row.created_at_ms, tz),
        row.threads.to_string(),
    ];
    fields
        .iter()
        .zip(widths)
        .map(|(field, &width)| fit_column(field, width))
        .collect()
}
