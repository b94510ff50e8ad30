//! End-to-end tests for the scenario engine
//!
//! Tuning values are shrunk so each run finishes in a couple of seconds;
//! the properties under test do not depend on the production constants.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use diaglab_engine::{
    CpuTuning, DeadlockTuning, EngineTuning, LeakTuning, LockPair, ScenarioInvoker,
    ScenarioLimits, ScenarioRequest, SpikeTuning, TransactionCache,
};

fn test_tuning() -> EngineTuning {
    EngineTuning {
        deadlock: DeadlockTuning {
            establish_grace: Duration::from_millis(50),
            amplification_threads: 4,
            amplification_hold: Duration::from_millis(10),
        },
        spike: SpikeTuning {
            burst_records: 200,
            high_plateau: Duration::from_millis(40),
            low_plateau: Duration::from_millis(40),
        },
        leak: LeakTuning { records_per_kb: 10 },
        cpu: CpuTuning {
            batch_iterations: 1_000,
        },
    }
}

fn test_invoker() -> ScenarioInvoker {
    ScenarioInvoker::new(
        Arc::new(TransactionCache::new()),
        Arc::new(LockPair::new()),
        test_tuning(),
        ScenarioLimits::default(),
    )
}

#[test]
fn highcpu_returns_after_requested_duration_never_earlier() {
    let invoker = test_invoker();

    let started = Instant::now();
    let token = invoker
        .invoke(ScenarioRequest::HighCpu { duration_ms: 200 })
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(token, "success:highcpu");
    assert!(elapsed >= Duration::from_millis(200), "returned early: {elapsed:?}");
    assert!(elapsed < Duration::from_secs(2), "overhead out of bounds: {elapsed:?}");
}

#[test]
fn highcpu_zero_duration_returns_promptly() {
    let invoker = test_invoker();

    let started = Instant::now();
    invoker
        .invoke(ScenarioRequest::HighCpu { duration_ms: 0 })
        .unwrap();
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[test]
fn memleak_accumulates_across_invocations() {
    let invoker = test_invoker();

    // 50 KB at 10 records per KB is 500 records per call
    invoker
        .invoke(ScenarioRequest::MemLeak { volume_kb: 50 })
        .unwrap();
    assert_eq!(invoker.cache().len(), 500);

    invoker
        .invoke(ScenarioRequest::MemLeak { volume_kb: 50 })
        .unwrap();
    assert_eq!(invoker.cache().len(), 1000);
}

#[test]
fn memleak_records_survive_other_scenarios() {
    let invoker = test_invoker();

    invoker
        .invoke(ScenarioRequest::MemLeak { volume_kb: 10 })
        .unwrap();
    assert_eq!(invoker.cache().len(), 100);

    invoker
        .invoke(ScenarioRequest::HighCpu { duration_ms: 10 })
        .unwrap();
    let _ = catch_unwind(AssertUnwindSafe(|| {
        invoker.invoke(ScenarioRequest::Exception)
    }));

    assert_eq!(invoker.cache().len(), 100);
}

#[test]
fn memspike_peaks_and_returns_to_baseline() {
    let invoker = Arc::new(test_invoker());
    let cache = Arc::clone(invoker.cache());

    let done = Arc::new(AtomicBool::new(false));
    let sampler = {
        let cache = Arc::clone(&cache);
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut high = 0usize;
            while !done.load(Ordering::Relaxed) {
                high = high.max(cache.len());
                thread::sleep(Duration::from_millis(2));
            }
            high
        })
    };

    let token = invoker
        .invoke(ScenarioRequest::MemSpike { duration_secs: 1 })
        .unwrap();
    done.store(true, Ordering::Relaxed);
    let observed_high = sampler.join().unwrap();

    assert_eq!(token, "success:memspike");
    // every cycle fills the full burst and the 40ms plateau is far longer
    // than the 2ms sampling interval
    assert_eq!(observed_high, 200);
    // the final clear leaves the cache at its low baseline
    assert_eq!(cache.len(), 0);
}

#[test]
fn memspike_zero_duration_returns_promptly() {
    let invoker = test_invoker();

    let started = Instant::now();
    let token = invoker
        .invoke(ScenarioRequest::MemSpike { duration_secs: 0 })
        .unwrap();

    assert_eq!(token, "success:memspike");
    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(invoker.cache().is_empty());
}

#[test]
fn crash_scenario_always_fails() {
    let invoker = test_invoker();

    for _ in 0..3 {
        let result = catch_unwind(AssertUnwindSafe(|| {
            invoker.invoke(ScenarioRequest::Exception)
        }));
        assert!(result.is_err(), "crash scenario must never succeed");
    }
}

#[test]
fn out_of_range_parameters_are_rejected_before_dispatch() {
    let invoker = test_invoker();

    assert!(invoker
        .invoke(ScenarioRequest::MemSpike { duration_secs: -1 })
        .is_err());
    assert!(invoker
        .invoke(ScenarioRequest::MemLeak { volume_kb: -1 })
        .is_err());
    assert!(invoker
        .invoke(ScenarioRequest::HighCpu { duration_ms: -1 })
        .is_err());
    assert!(invoker
        .invoke(ScenarioRequest::MemLeak {
            volume_kb: ScenarioLimits::default().max_leak_volume_kb + 1,
        })
        .is_err());

    // rejected requests never touch the cache
    assert!(invoker.cache().is_empty());
}

#[test]
fn deadlock_holds_both_locks_and_never_returns() {
    let invoker = Arc::new(test_invoker());
    let locks = Arc::clone(invoker.locks());
    let returned = Arc::new(AtomicBool::new(false));

    {
        let invoker = Arc::clone(&invoker);
        let returned = Arc::clone(&returned);
        // Leaked on purpose: the invocation is expected to hang forever and
        // its threads die with the test process.
        thread::spawn(move || {
            let _ = invoker.invoke(ScenarioRequest::Deadlock);
            returned.store(true, Ordering::SeqCst);
        });
    }

    // establish_grace is 50ms in the test tuning; leave a wide margin for
    // thread starts under a loaded scheduler
    thread::sleep(Duration::from_millis(600));

    assert!(locks.try_lock_a().is_none(), "lock A must stay held");
    assert!(locks.try_lock_b().is_none(), "lock B must stay held");
    assert!(
        !returned.load(Ordering::SeqCst),
        "deadlock invocation must not return"
    );

    // still wedged after another window
    thread::sleep(Duration::from_millis(300));
    assert!(locks.try_lock_a().is_none());
    assert!(locks.try_lock_b().is_none());
    assert!(!returned.load(Ordering::SeqCst));
}
