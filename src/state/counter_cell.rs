//! Shared counter cell with change notification

use std::sync::Mutex;
use tokio::sync::watch;
use tracing::warn;

use super::counter::{Counter, CounterSnapshot};

/// A counter shared between request handlers and the ticker task.
///
/// All mutation goes through the single mutex, so commands and ticks are
/// mutually exclusive on the active flag. Two watch channels carry the
/// observable side: the bare active level (which drives the ticker) and
/// the full snapshot (which the presentation layer reads).
#[derive(Debug)]
pub struct CounterCell {
    counter: Mutex<Counter>,
    /// Active level, watched by the ticker task
    active_tx: watch::Sender<bool>,
    /// Snapshot updates for presentation-side observers
    update_tx: watch::Sender<CounterSnapshot>,
    /// Keep the receivers alive to prevent channel closure
    _active_rx: watch::Receiver<bool>,
    _update_rx: watch::Receiver<CounterSnapshot>,
}

impl CounterCell {
    /// Create a new cell around a stopped, zeroed counter
    pub fn new() -> Self {
        let (active_tx, active_rx) = watch::channel(false);
        let (update_tx, update_rx) = watch::channel(CounterSnapshot::new());

        Self {
            counter: Mutex::new(Counter::new()),
            active_tx,
            update_tx,
            _active_rx: active_rx,
            _update_rx: update_rx,
        }
    }

    /// Apply an update to the counter and notify observers
    fn mutate<F>(&self, updater: F) -> Result<CounterSnapshot, String>
    where
        F: FnOnce(&mut Counter),
    {
        let mut counter = self
            .counter
            .lock()
            .map_err(|e| format!("Failed to lock counter state: {}", e))?;

        updater(&mut counter);
        let snapshot = counter.snapshot();
        drop(counter); // Release the lock before notifying

        self.publish(snapshot);
        Ok(snapshot)
    }

    fn publish(&self, snapshot: CounterSnapshot) {
        if let Err(e) = self.active_tx.send(snapshot.active) {
            warn!("Failed to send active level update: {}", e);
        }
        if let Err(e) = self.update_tx.send(snapshot) {
            warn!("Failed to send counter update: {}", e);
        }
    }

    /// Start the counter; a no-op if it is already running
    pub fn start(&self) -> Result<CounterSnapshot, String> {
        self.mutate(|counter| {
            counter.start();
        })
    }

    /// Stop the counter; a no-op if it is already stopped.
    ///
    /// The active flag flips under the mutex before this returns, so any
    /// tick already scheduled by the ticker task applies as a no-op.
    pub fn stop(&self) -> Result<CounterSnapshot, String> {
        self.mutate(|counter| {
            counter.stop();
        })
    }

    /// Set the active level from a derived gate value
    pub fn set_active(&self, active: bool) -> Result<CounterSnapshot, String> {
        self.mutate(|counter| {
            counter.set_active(active);
        })
    }

    /// Zero the elapsed count, leaving the active flag untouched
    pub fn reset(&self) -> Result<CounterSnapshot, String> {
        self.mutate(|counter| counter.reset())
    }

    /// Apply one whole-second tick from the ticker task. Returns whether
    /// the increment applied; it does not while the counter is stopped.
    pub fn apply_tick(&self) -> Result<bool, String> {
        let mut counter = self
            .counter
            .lock()
            .map_err(|e| format!("Failed to lock counter state: {}", e))?;

        let ticked = counter.tick();
        let snapshot = counter.snapshot();
        drop(counter);

        // Ticks never change the active level, so only snapshot watchers
        // need to hear about them.
        if ticked {
            if let Err(e) = self.update_tx.send(snapshot) {
                warn!("Failed to send counter update: {}", e);
            }
        }

        Ok(ticked)
    }

    /// Get the current counter snapshot
    pub fn snapshot(&self) -> Result<CounterSnapshot, String> {
        self.counter
            .lock()
            .map(|counter| counter.snapshot())
            .map_err(|e| format!("Failed to lock counter state: {}", e))
    }

    /// Subscribe to the active level (used by the ticker task)
    pub fn subscribe_active(&self) -> watch::Receiver<bool> {
        self.active_tx.subscribe()
    }

    /// Subscribe to snapshot updates
    pub fn subscribe_updates(&self) -> watch::Receiver<CounterSnapshot> {
        self.update_tx.subscribe()
    }
}

impl Default for CounterCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_publishes_active_level() {
        let cell = CounterCell::new();
        let active_rx = cell.subscribe_active();

        let snap = cell.start().unwrap();
        assert!(snap.active);
        assert!(*active_rx.borrow());

        cell.stop().unwrap();
        assert!(!*active_rx.borrow());
    }

    #[test]
    fn tick_after_stop_does_not_apply() {
        let cell = CounterCell::new();
        cell.start().unwrap();
        assert!(cell.apply_tick().unwrap());
        cell.stop().unwrap();
        assert!(!cell.apply_tick().unwrap());
        assert_eq!(cell.snapshot().unwrap().elapsed_seconds, 1);
    }

    #[test]
    fn tick_updates_snapshot_watchers() {
        let cell = CounterCell::new();
        let update_rx = cell.subscribe_updates();

        cell.start().unwrap();
        cell.apply_tick().unwrap();
        let seen = *update_rx.borrow();
        assert!(seen.active);
        assert_eq!(seen.elapsed_seconds, 1);
    }

    #[test]
    fn reset_keeps_active_level() {
        let cell = CounterCell::new();
        cell.start().unwrap();
        cell.apply_tick().unwrap();

        let snap = cell.reset().unwrap();
        assert!(snap.active);
        assert_eq!(snap.elapsed_seconds, 0);
    }
}
