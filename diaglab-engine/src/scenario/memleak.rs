//! One-shot allocation burst with no release.

use tracing::info;

use crate::cache::{Record, TransactionCache};
use crate::error::ScenarioResult;
use crate::tuning::LeakTuning;

/// Insert `volume_kb` worth of records into the process-wide cache.
///
/// Nothing in the engine ever reclaims these records; the cache lives for
/// the process lifetime, so repeated invocations accumulate without bound
/// until an external restart. Returns as soon as the insert loop completes.
pub fn run(cache: &TransactionCache, volume_kb: u64, tuning: &LeakTuning) -> ScenarioResult<()> {
    let count = volume_kb * tuning.records_per_kb;
    for _ in 0..count {
        cache.insert(Record::generate());
    }

    info!(
        volume_kb,
        records = count,
        cache_total = cache.len(),
        "leak burst inserted"
    );
    Ok(())
}
