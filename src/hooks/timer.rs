use std::time::Duration;

#[cfg(feature = "web")]
pub async fn sleep(duration: Duration) {
    gloo::timers::future::sleep(duration).await;
}

/// Outside the browser there is no event loop to wait on, the delay is
/// skipped.
#[cfg(not(feature = "web"))]
pub async fn sleep(duration: Duration) {
    tracing::debug!("skipping {:?} delay", duration);
}
