//! Two-lock reversed-order deadlock with an amplification thread burst.

use std::sync::{Arc, Barrier};
use std::thread;

use tracing::{debug, info};

use crate::error::ScenarioResult;
use crate::locks::LockPair;
use crate::tuning::DeadlockTuning;
use crate::worker::WorkerPool;

/// Induce a permanent deadlock on the lock pair, then amplify it.
///
/// Two auxiliary threads acquire the locks in opposite orders. A three-party
/// barrier guarantees each holder owns its first lock before either attempts
/// its second, so the collision cannot be dodged by lucky scheduling: once
/// the barrier opens, t1 blocks on B and t2 blocks on A, and neither lock is
/// ever released again.
///
/// After the establishment grace, a fixed burst of worker threads piles up
/// behind lock A, and joining them blocks the calling thread forever. The
/// hang is the point: a thread snapshot of the process shows hundreds of
/// threads parked on a lock whose owner can never release it. The success
/// return below is effectively unreachable.
pub fn run(locks: &Arc<LockPair>, tuning: &DeadlockTuning) -> ScenarioResult<()> {
    let mut pool = WorkerPool::new();
    let barrier = Arc::new(Barrier::new(3));

    {
        let locks = Arc::clone(locks);
        let barrier = Arc::clone(&barrier);
        pool.spawn("diag-deadlock-t1", move || {
            let _a = locks.lock_a();
            debug!("t1 holds lock A");
            barrier.wait();
            // Blocks forever: t2 holds B and is itself stuck waiting for A.
            let _b = locks.lock_b();
        })?;
    }

    {
        let locks = Arc::clone(locks);
        let barrier = Arc::clone(&barrier);
        pool.spawn("diag-deadlock-t2", move || {
            let _b = locks.lock_b();
            debug!("t2 holds lock B");
            barrier.wait();
            // Blocks forever: t1 holds A and is itself stuck waiting for B.
            let _a = locks.lock_a();
        })?;
    }

    // Both first acquisitions are in place once the barrier opens; the
    // grace period lets t1 and t2 park on their cross acquisitions.
    barrier.wait();
    thread::sleep(tuning.establish_grace);

    info!(
        workers = tuning.amplification_threads,
        "deadlock established, starting amplification burst"
    );

    for i in 0..tuning.amplification_threads {
        let locks = Arc::clone(locks);
        let hold = tuning.amplification_hold;
        pool.spawn(format!("diag-deadlock-amp-{i}"), move || {
            let _a = locks.lock_a();
            thread::sleep(hold);
        })?;
    }

    // Never returns: every amplification worker is queued on lock A behind
    // an owner that cannot release it.
    pool.join_all()
}
