//! Error types for page composition and data binding.

use std::io;

use thiserror::Error;

/// Errors raised by the grid composer, the page model and the update binder.
///
/// `LayoutConfig`, `PayloadShape` and `SnapshotMismatch` indicate programming
/// errors and are fatal. `DegenerateSize` is recoverable: the caller keeps the
/// last good rectangles and waits for the next resize.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The proportional tree handed to the grid composer is invalid.
    #[error("invalid layout at {path}: {message}")]
    LayoutConfig {
        /// Position of the offending cell, e.g. `root/1/0`.
        path: String,
        /// What is wrong with it.
        message: String,
    },

    /// A payload does not match the shape fixed at widget construction.
    #[error("payload for '{widget}' has {actual} values, expected {expected}")]
    PayloadShape {
        /// Title of the widget that rejected the payload.
        widget: String,
        /// Cardinality fixed at construction.
        expected: usize,
        /// Cardinality supplied.
        actual: usize,
    },

    /// The terminal is too small for every pane to get a visible rectangle.
    #[error("terminal size {width}x{height} is too small for the {page} page")]
    DegenerateSize {
        /// Page variant being laid out.
        page: &'static str,
        /// Terminal width in columns.
        width: u16,
        /// Terminal height in rows.
        height: u16,
    },

    /// A snapshot of one variant was applied to a page of the other variant.
    #[error("cannot apply a {snapshot} snapshot to the {page} page")]
    SnapshotMismatch {
        /// Page variant receiving the snapshot.
        page: &'static str,
        /// Snapshot variant supplied.
        snapshot: &'static str,
    },

    /// Terminal setup, drawing or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl DashboardError {
    /// Returns `true` for errors the render loop can recover from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DashboardError::DegenerateSize { .. })
    }
}

/// Result alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
