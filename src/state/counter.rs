//! Core counter state machine

use serde::{Deserialize, Serialize};

/// Elapsed-time counter with two states, `Stopped` and `Running`, over the
/// `active` flag. The count advances only through [`Counter::tick`], and
/// `tick` only applies while active, so a tick that arrives after a stop
/// has completed is a no-op.
#[derive(Debug)]
pub struct Counter {
    elapsed_seconds: u64,
    active: bool,
}

impl Counter {
    /// Create a new counter: stopped, zero seconds elapsed
    pub fn new() -> Self {
        Self {
            elapsed_seconds: 0,
            active: false,
        }
    }

    /// Transition `Stopped -> Running`. Returns whether a transition
    /// happened; calling while already running is a no-op.
    pub fn start(&mut self) -> bool {
        self.set_active(true)
    }

    /// Transition `Running -> Stopped`. Returns whether a transition
    /// happened; calling while already stopped is a no-op.
    pub fn stop(&mut self) -> bool {
        self.set_active(false)
    }

    /// Set the active level directly (used when the level is derived from
    /// gating conditions). Returns whether the level changed.
    pub fn set_active(&mut self, active: bool) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        true
    }

    /// Set the elapsed count back to zero. Valid in either state and does
    /// not touch the active flag.
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
    }

    /// Apply one whole-second tick. Increments only while active; returns
    /// whether the increment applied.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    /// Whole seconds elapsed while active
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Check if the counter is currently running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Snapshot the current state for observers
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            active: self.active,
            elapsed_seconds: self.elapsed_seconds,
        }
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

/// Read model published to observers on every state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub active: bool,
    pub elapsed_seconds: u64,
}

impl CounterSnapshot {
    /// Snapshot of a freshly created counter
    pub fn new() -> Self {
        Self {
            active: false,
            elapsed_seconds: 0,
        }
    }
}

impl Default for CounterSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_at_zero() {
        let counter = Counter::new();
        assert!(!counter.is_active());
        assert_eq!(counter.elapsed_seconds(), 0);
    }

    #[test]
    fn start_is_idempotent() {
        let mut counter = Counter::new();
        assert!(counter.start());
        assert!(!counter.start());
        assert!(counter.is_active());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut counter = Counter::new();
        assert!(!counter.stop());
        counter.start();
        assert!(counter.stop());
        assert!(!counter.stop());
        assert!(!counter.is_active());
    }

    #[test]
    fn tick_applies_only_while_active() {
        let mut counter = Counter::new();
        assert!(!counter.tick());
        assert_eq!(counter.elapsed_seconds(), 0);

        counter.start();
        assert!(counter.tick());
        assert!(counter.tick());
        assert_eq!(counter.elapsed_seconds(), 2);

        counter.stop();
        assert!(!counter.tick());
        assert_eq!(counter.elapsed_seconds(), 2);
    }

    #[test]
    fn reset_zeroes_count_without_touching_active() {
        let mut counter = Counter::new();
        counter.start();
        counter.tick();
        counter.tick();
        counter.reset();
        assert_eq!(counter.elapsed_seconds(), 0);
        assert!(counter.is_active());

        counter.tick();
        assert_eq!(counter.elapsed_seconds(), 1);

        counter.stop();
        counter.reset();
        assert_eq!(counter.elapsed_seconds(), 0);
        assert!(!counter.is_active());
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let mut counter = Counter::new();
        assert_eq!(counter.snapshot(), CounterSnapshot::new());

        counter.start();
        counter.tick();
        let snap = counter.snapshot();
        assert!(snap.active);
        assert_eq!(snap.elapsed_seconds, 1);
    }
}
