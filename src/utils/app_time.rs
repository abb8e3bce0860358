// src/utils/app_time.rs

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Fraction of `span` elapsed between `start` and `at`, clamped to [0, 1].
/// A zero span counts as already finished.
pub fn progress(start: AppInstant, at: AppInstant, span: Duration) -> f32 {
    if span.is_zero() {
        return 1.0;
    }
    let elapsed = at.saturating_duration_since(start);
    (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
}
