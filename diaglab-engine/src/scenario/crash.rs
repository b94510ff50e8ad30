//! Unconditional unrecoverable failure.

/// Fail immediately with a panic that no engine or router layer catches.
///
/// The unwind is the artifact: crash-diagnostic tooling gets a genuine
/// unhandled failure to capture. No parameters, no side effects beyond the
/// failure itself.
///
/// # Panics
///
/// Always.
pub fn run() -> ! {
    panic!("deliberately unhandled failure");
}
