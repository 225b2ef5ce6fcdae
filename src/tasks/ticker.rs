//! Counter ticker background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant};
use tracing::{debug, error, info};

use crate::state::CounterCell;

/// Period of one whole-second tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that drives one counter's tick process.
///
/// The interval is armed exactly once per entry into `Running` (first fire
/// a full period after entry) and dropped exactly once per exit, so rapid
/// toggling can neither double-schedule ticks nor leak them. Increments
/// are applied through [`CounterCell::apply_tick`], which re-checks the
/// active flag under the cell's lock; a tick that loses the race against a
/// stop is a no-op.
pub async fn counter_ticker_task(name: &'static str, cell: Arc<CounterCell>) {
    info!("Starting {} ticker task", name);

    let mut active_rx = cell.subscribe_active();

    loop {
        // Wait for the counter to enter Running
        while !*active_rx.borrow_and_update() {
            if active_rx.changed().await.is_err() {
                debug!("{} ticker: counter state gone, exiting", name);
                return;
            }
        }

        debug!("{} ticker: counter running, arming interval", name);
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match cell.apply_tick() {
                        Ok(true) => {}
                        Ok(false) => {
                            // Lost the race against a stop; the level
                            // change arrives next and disarms the interval
                            debug!("{} ticker: tick skipped, counter inactive", name);
                        }
                        Err(e) => {
                            error!("{} ticker: failed to apply tick: {}", name, e);
                        }
                    }
                }
                changed = active_rx.changed() => {
                    if changed.is_err() {
                        debug!("{} ticker: counter state gone, exiting", name);
                        return;
                    }
                    if !*active_rx.borrow_and_update() {
                        debug!("{} ticker: counter stopped, disarming interval", name);
                        break;
                    }
                    // Still running (idempotent start, or a reset while
                    // running): keep the existing cadence
                }
            }
        }
    }
}
