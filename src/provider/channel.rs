//! Provider fed by a sampler thread over an mpsc channel.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::{debug, warn};

use super::{ProviderError, SnapshotProvider};
use crate::model::MetricSnapshot;

/// Receives snapshots produced on another thread.
///
/// `advance()` never blocks: it drains the channel and keeps only the newest
/// snapshot, so a slow render loop skips ticks instead of falling behind.
pub struct ChannelProvider {
    rx: Receiver<MetricSnapshot>,
    last_error: Option<ProviderError>,
}

impl ChannelProvider {
    pub fn new(rx: Receiver<MetricSnapshot>) -> Self {
        Self {
            rx,
            last_error: None,
        }
    }

    /// Creates a provider together with the sender a sampler pushes into.
    pub fn channel() -> (Sender<MetricSnapshot>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self::new(rx))
    }
}

impl SnapshotProvider for ChannelProvider {
    fn advance(&mut self) -> Option<MetricSnapshot> {
        let mut latest = None;
        let mut skipped = 0usize;
        loop {
            match self.rx.try_recv() {
                Ok(snapshot) => {
                    if latest.replace(snapshot).is_some() {
                        skipped += 1;
                    }
                }
                Err(TryRecvError::Empty) => {
                    self.last_error = None;
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    if self.last_error.is_none() {
                        warn!("snapshot channel disconnected");
                    }
                    self.last_error = Some(ProviderError::Disconnected);
                    break;
                }
            }
        }
        if skipped > 0 {
            debug!(skipped, "coalesced queued snapshots");
        }
        latest
    }

    fn last_error(&self) -> Option<&ProviderError> {
        self.last_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProcessSnapshot, ProcessTableSnapshot};
    use std::thread;

    fn cpu(value: f64) -> MetricSnapshot {
        MetricSnapshot::Process(ProcessSnapshot {
            cpu_percent: Some(value),
            ..ProcessSnapshot::default()
        })
    }

    #[test]
    fn test_empty_channel_yields_nothing() {
        let (_tx, mut provider) = ChannelProvider::channel();
        assert!(provider.advance().is_none());
        assert!(provider.last_error().is_none());
    }

    #[test]
    fn test_keeps_newest_snapshot() {
        let (tx, mut provider) = ChannelProvider::channel();
        for v in [1.0, 2.0, 3.0] {
            tx.send(cpu(v)).unwrap();
        }
        assert_eq!(provider.advance(), Some(cpu(3.0)));
        assert!(provider.advance().is_none());
    }

    #[test]
    fn test_snapshots_from_sampler_thread() {
        let (tx, mut provider) = ChannelProvider::channel();
        let sampler = thread::spawn(move || {
            tx.send(MetricSnapshot::AllProcesses(ProcessTableSnapshot::default()))
                .unwrap();
        });
        sampler.join().unwrap();

        assert_eq!(
            provider.advance(),
            Some(MetricSnapshot::AllProcesses(ProcessTableSnapshot::default()))
        );
        // The sender was dropped with the thread.
        assert!(provider.advance().is_none());
        assert_eq!(provider.last_error(), Some(&ProviderError::Disconnected));
    }
}
