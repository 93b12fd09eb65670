//! procview - terminal dashboard for process metrics.
//!
//! This library provides:
//! - `model` - metric snapshot types produced by samplers
//! - `provider` - snapshot source abstraction (channel, synthetic)
//! - `tui` - grid composer, widgets, pages, update binder and the ratatui app
//! - `fmt` - shared formatting helpers

pub mod fmt;
pub mod model;
pub mod provider;
pub mod tui;
