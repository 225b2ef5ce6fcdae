//! Gated counter variant: active derived from three conditions

use std::sync::{Arc, Mutex};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::counter::CounterSnapshot;
use super::counter_cell::CounterCell;
use super::gate::{GateFlag, GateFlags};

/// Combined read model for the gated variant
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GatedSnapshot {
    pub flags: GateFlags,
    pub counter: CounterSnapshot,
}

/// A counter whose active level is the conjunction of three gating
/// conditions. Toggling any flag recomputes the conjunction eagerly and
/// applies it to the inner cell, which notifies its observers.
#[derive(Debug)]
pub struct GatedCell {
    gate: Mutex<GateFlags>,
    counter: Arc<CounterCell>,
}

impl GatedCell {
    /// Create a gated cell with all conditions false (counter stopped)
    pub fn new() -> Self {
        Self {
            gate: Mutex::new(GateFlags::new()),
            counter: Arc::new(CounterCell::new()),
        }
    }

    /// Flip one gating condition and reapply the conjunction.
    ///
    /// The gate lock is held across the recompute so concurrent toggles
    /// cannot apply a stale conjunction to the counter.
    pub fn toggle(&self, flag: GateFlag) -> Result<GatedSnapshot, String> {
        let mut gate = self
            .gate
            .lock()
            .map_err(|e| format!("Failed to lock gate state: {}", e))?;

        let value = gate.toggle(flag);
        let flags = *gate;
        let counter = self.counter.set_active(flags.is_open())?;
        drop(gate);

        info!(
            "Gate flag {} toggled to {}, gate {}",
            flag.as_str(),
            value,
            if flags.is_open() { "open" } else { "closed" }
        );
        Ok(GatedSnapshot { flags, counter })
    }

    /// Zero the gated counter's elapsed count; the gate is untouched
    pub fn reset(&self) -> Result<GatedSnapshot, String> {
        let counter = self.counter.reset()?;
        let flags = self.flags()?;
        Ok(GatedSnapshot { flags, counter })
    }

    /// Get the current gating conditions
    pub fn flags(&self) -> Result<GateFlags, String> {
        self.gate
            .lock()
            .map(|gate| *gate)
            .map_err(|e| format!("Failed to lock gate state: {}", e))
    }

    /// Get the combined gated snapshot
    pub fn snapshot(&self) -> Result<GatedSnapshot, String> {
        Ok(GatedSnapshot {
            flags: self.flags()?,
            counter: self.counter.snapshot()?,
        })
    }

    /// The inner counter cell, shared with the ticker task
    pub fn counter(&self) -> Arc<CounterCell> {
        Arc::clone(&self.counter)
    }
}

impl Default for GatedCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_runs_only_while_all_flags_hold() {
        let cell = GatedCell::new();

        let snap = cell.toggle(GateFlag::Okay).unwrap();
        assert!(!snap.counter.active);

        let snap = cell.toggle(GateFlag::Safe).unwrap();
        assert!(!snap.counter.active);

        let snap = cell.toggle(GateFlag::Cool).unwrap();
        assert!(snap.counter.active);
    }

    #[test]
    fn any_flag_dropping_stops_the_counter() {
        let cell = GatedCell::new();
        cell.toggle(GateFlag::Okay).unwrap();
        cell.toggle(GateFlag::Safe).unwrap();
        cell.toggle(GateFlag::Cool).unwrap();

        let counter = cell.counter();
        counter.apply_tick().unwrap();

        let snap = cell.toggle(GateFlag::Safe).unwrap();
        assert!(!snap.counter.active);
        assert_eq!(snap.counter.elapsed_seconds, 1);

        // A tick racing the toggle applies as a no-op
        assert!(!counter.apply_tick().unwrap());
    }

    #[test]
    fn reset_preserves_gate_and_active_level() {
        let cell = GatedCell::new();
        cell.toggle(GateFlag::Okay).unwrap();
        cell.toggle(GateFlag::Safe).unwrap();
        cell.toggle(GateFlag::Cool).unwrap();
        cell.counter().apply_tick().unwrap();

        let snap = cell.reset().unwrap();
        assert!(snap.counter.active);
        assert_eq!(snap.counter.elapsed_seconds, 0);
        assert!(snap.flags.is_open());
    }
}
