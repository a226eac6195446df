//! Cooperative delay used between streamed lines.

use std::time::Duration;

/// Sleep for `duration` without blocking the executor.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

/// Sleep for `duration` without blocking the executor.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        gloo_timers::future::sleep(duration).await;
    }
}
