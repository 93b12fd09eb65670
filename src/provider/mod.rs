//! Provider abstraction for snapshot sources.
//!
//! This module defines the `SnapshotProvider` trait the render loop pulls
//! snapshots from. Samplers live outside the dashboard; they either implement
//! the trait directly or push snapshots through a [`ChannelProvider`].

mod channel;
mod mock;

pub use channel::ChannelProvider;
pub use mock::{MockProvider, Scenario};

use thiserror::Error;

use crate::model::MetricSnapshot;

/// Errors reported by snapshot providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The producing side went away; no more snapshots will arrive.
    #[error("sampler disconnected")]
    Disconnected,
}

/// Source of snapshots for the render loop.
///
/// The trait is object-safe and is used as `Box<dyn SnapshotProvider>`.
pub trait SnapshotProvider {
    /// Returns the snapshot for the next tick.
    ///
    /// Returns `None` when nothing new is available; check `last_error()`
    /// to tell an idle source from a broken one.
    fn advance(&mut self) -> Option<MetricSnapshot>;

    /// Returns the error of the last `advance()` call, if any.
    fn last_error(&self) -> Option<&ProviderError>;
}
