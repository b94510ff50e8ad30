//! Repeating memory spike-and-release cycle.

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::cache::{Record, TransactionCache};
use crate::error::ScenarioResult;
use crate::tuning::SpikeTuning;

/// Alternate between a bounded allocation burst and an explicit release
/// until `duration` elapses.
///
/// Each iteration is one full spike-and-release cycle: fill a fresh storage
/// as fast as possible, hold the high-water mark through one plateau, drop
/// the storage, rest through the trough. The plateaus are long enough for a
/// profiler to tell the peak from the baseline. Elapsed time is checked once
/// per cycle, never mid-burst.
pub fn run(
    cache: &TransactionCache,
    duration: Duration,
    tuning: &SpikeTuning,
) -> ScenarioResult<()> {
    let started = Instant::now();
    let mut cycles = 0u32;

    loop {
        drop(cache.clear());
        if started.elapsed() > duration {
            break;
        }

        for _ in 0..tuning.burst_records {
            cache.insert(Record::generate());
        }
        debug!(
            cycle = cycles,
            records = tuning.burst_records,
            "spike plateau reached"
        );
        thread::sleep(tuning.high_plateau);

        // Dropping the old storage immediately gives the sharpest release
        // edge the allocator can produce; actual reclamation may still lag.
        drop(cache.clear());
        thread::sleep(tuning.low_plateau);
        cycles += 1;
    }

    info!(
        cycles,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "memory spike finished"
    );
    Ok(())
}
