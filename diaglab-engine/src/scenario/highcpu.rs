//! Busy loop saturating one thread.

use std::time::{Duration, Instant};

use tracing::info;

use crate::error::ScenarioResult;
use crate::tuning::CpuTuning;

/// Spin on cheap pseudo-random work, without yielding, until `duration`
/// elapses.
///
/// Elapsed time is sampled only between fixed-size batches so the clock
/// reads stay a rounding error next to the work itself.
pub fn run(duration: Duration, tuning: &CpuTuning) -> ScenarioResult<()> {
    let started = Instant::now();

    while started.elapsed() <= duration {
        for _ in 0..tuning.batch_iterations {
            // 1001 is outside the sampled range; the branch never fires but
            // keeps the generator call from being optimized away.
            if fastrand::u32(0..1000) == 1001 {
                break;
            }
        }
    }

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "cpu saturation finished"
    );
    Ok(())
}
