//! Presentation-facing counter interface

use tokio::sync::watch;

use super::counter::CounterSnapshot;
use super::counter_cell::CounterCell;
use super::gate::GateFlag;
use super::gated_cell::GatedCell;

/// The full operation set a presentation layer depends on: mutate through
/// the listed operations, read the listed state. Every operation is total;
/// an operation that does not apply to a variant returns the current
/// snapshot unchanged, the same way starting an already-running counter
/// does.
pub trait CounterPort: Send + Sync {
    fn start(&self) -> Result<CounterSnapshot, String>;
    fn stop(&self) -> Result<CounterSnapshot, String>;
    fn reset(&self) -> Result<CounterSnapshot, String>;
    fn toggle(&self, flag: GateFlag) -> Result<CounterSnapshot, String>;
    fn snapshot(&self) -> Result<CounterSnapshot, String>;
    fn subscribe(&self) -> watch::Receiver<CounterSnapshot>;
}

impl CounterPort for CounterCell {
    fn start(&self) -> Result<CounterSnapshot, String> {
        CounterCell::start(self)
    }

    fn stop(&self) -> Result<CounterSnapshot, String> {
        CounterCell::stop(self)
    }

    fn reset(&self) -> Result<CounterSnapshot, String> {
        CounterCell::reset(self)
    }

    /// The direct variant carries no gate; toggling is a no-op
    fn toggle(&self, _flag: GateFlag) -> Result<CounterSnapshot, String> {
        CounterCell::snapshot(self)
    }

    fn snapshot(&self) -> Result<CounterSnapshot, String> {
        CounterCell::snapshot(self)
    }

    fn subscribe(&self) -> watch::Receiver<CounterSnapshot> {
        self.subscribe_updates()
    }
}

impl CounterPort for GatedCell {
    /// The gated variant's active level is derived solely from the
    /// conjunction; a forced start is a no-op
    fn start(&self) -> Result<CounterSnapshot, String> {
        CounterPort::snapshot(self)
    }

    fn stop(&self) -> Result<CounterSnapshot, String> {
        CounterPort::snapshot(self)
    }

    fn reset(&self) -> Result<CounterSnapshot, String> {
        GatedCell::reset(self).map(|snap| snap.counter)
    }

    fn toggle(&self, flag: GateFlag) -> Result<CounterSnapshot, String> {
        GatedCell::toggle(self, flag).map(|snap| snap.counter)
    }

    fn snapshot(&self) -> Result<CounterSnapshot, String> {
        GatedCell::snapshot(self).map(|snap| snap.counter)
    }

    fn subscribe(&self) -> watch::Receiver<CounterSnapshot> {
        self.counter().subscribe_updates()
    }
}
