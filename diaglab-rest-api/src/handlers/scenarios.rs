//! One handler per diagnostic scenario

use axum::extract::{Path, State};
use tracing::info;

use diaglab_engine::ScenarioRequest;

use crate::context::ScenariosContext;
use crate::errors::{RestError, RestResult};

/// Trigger the deadlock scenario.
///
/// Never responds once the deadlock is established: the handler's blocking
/// thread joins workers parked on a dead lock, so the connection stays open
/// forever. That hang is the scenario working, not a routing defect.
pub async fn trigger_deadlock(State(ctx): State<ScenariosContext>) -> RestResult<&'static str> {
    run_scenario(ctx, ScenarioRequest::Deadlock).await
}

/// Trigger the memory spike scenario for `seconds` seconds.
pub async fn trigger_memspike(
    State(ctx): State<ScenariosContext>,
    Path(seconds): Path<i64>,
) -> RestResult<&'static str> {
    run_scenario(
        ctx,
        ScenarioRequest::MemSpike {
            duration_secs: seconds,
        },
    )
    .await
}

/// Trigger the memory leak scenario for `kb` kilobytes.
pub async fn trigger_memleak(
    State(ctx): State<ScenariosContext>,
    Path(kb): Path<i64>,
) -> RestResult<&'static str> {
    run_scenario(ctx, ScenarioRequest::MemLeak { volume_kb: kb }).await
}

/// Trigger the crash scenario.
///
/// Always fails; the scenario panic unwinds through this handler's task
/// uncaught.
pub async fn trigger_exception(State(ctx): State<ScenariosContext>) -> RestResult<&'static str> {
    run_scenario(ctx, ScenarioRequest::Exception).await
}

/// Trigger the CPU saturation scenario for `milliseconds` milliseconds.
pub async fn trigger_highcpu(
    State(ctx): State<ScenariosContext>,
    Path(milliseconds): Path<i64>,
) -> RestResult<&'static str> {
    run_scenario(
        ctx,
        ScenarioRequest::HighCpu {
            duration_ms: milliseconds,
        },
    )
    .await
}

/// Run one scenario on a dedicated blocking thread.
///
/// Scenario bodies are synchronous and may block forever (deadlock) or spin
/// flat out (highcpu); `spawn_blocking` keeps them off the async workers. A
/// panicking scenario is resumed onto this task rather than swallowed, so
/// the crash scenario stays an unhandled failure.
async fn run_scenario(ctx: ScenariosContext, request: ScenarioRequest) -> RestResult<&'static str> {
    info!(scenario = %request.kind(), "scenario requested");

    let invoker = ctx.invoker.clone();
    match tokio::task::spawn_blocking(move || invoker.invoke(request)).await {
        Ok(result) => Ok(result?),
        Err(join_err) if join_err.is_panic() => std::panic::resume_unwind(join_err.into_panic()),
        Err(join_err) => Err(RestError::InternalError(join_err.to_string())),
    }
}
