//! Elapsed-time instrumentation.
//!
//! Thin wrappers around a call that log wall-clock duration when
//! `Settings::enable_timer` is set. The flag is read at call time, so a
//! long-lived process picks up the configured value for every invocation.
//! The async wrapper awaits the given future directly and adds no
//! suspension points of its own.

use std::future::Future;
use std::time::Instant;

use tracing::info;

use crate::config::Settings;

/// Run `f`, logging its elapsed time under `name` when timing is enabled.
/// The result is returned unchanged either way.
pub fn timed<T>(settings: &Settings, name: &str, f: impl FnOnce() -> T) -> T {
    if !settings.enable_timer {
        return f();
    }

    let start = Instant::now();
    let result = f();
    info!(
        "{} elapsed time: {:.4} seconds",
        name,
        start.elapsed().as_secs_f64()
    );
    result
}

/// Await `fut`, logging its elapsed time under `name` when timing is
/// enabled. The result is returned unchanged either way.
pub async fn timed_async<F>(settings: &Settings, name: &str, fut: F) -> F::Output
where
    F: Future,
{
    if !settings.enable_timer {
        return fut.await;
    }

    let start = Instant::now();
    let result = fut.await;
    info!(
        "{} elapsed time: {:.4} seconds",
        name,
        start.elapsed().as_secs_f64()
    );
    result
}
