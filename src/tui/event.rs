//! Terminal event source.
//!
//! A background thread polls crossterm and emits ticks on a fixed schedule.
//! Key presses and resizes do not push the next tick back.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tracing::warn;

/// Events delivered to the render loop, in arrival order.
#[derive(Debug)]
pub enum Event {
    /// Refresh interval elapsed.
    Tick,
    /// Key press (repeats and releases are dropped).
    Key(KeyEvent),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
}

/// Owns the polling thread. Dropping it stops the thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let worker = {
            let stop = Arc::clone(&stop);
            thread::spawn(move || poll_loop(&tx, &stop, tick_rate))
        };
        Self {
            rx,
            stop,
            worker: Some(worker),
        }
    }

    /// Blocks until the next event. Fails once the polling thread is gone.
    pub fn next(&self) -> Result<Event, RecvError> {
        self.rx.recv()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn poll_loop(tx: &Sender<Event>, stop: &AtomicBool, tick_rate: Duration) {
    let mut next_tick = Instant::now() + tick_rate;
    while !stop.load(Ordering::Relaxed) {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        let ready = match event::poll(timeout) {
            Ok(ready) => ready,
            Err(err) => {
                warn!(%err, "terminal poll failed");
                return;
            }
        };

        let event = if ready {
            match event::read() {
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => Event::Key(key),
                Ok(CrosstermEvent::Resize(width, height)) => Event::Resize(width, height),
                Ok(_) => continue,
                Err(err) => {
                    warn!(%err, "terminal read failed");
                    return;
                }
            }
        } else {
            // Skip missed ticks instead of bursting them after a stall.
            next_tick = (next_tick + tick_rate).max(Instant::now());
            Event::Tick
        };

        if tx.send(event).is_err() {
            return;
        }
    }
}
