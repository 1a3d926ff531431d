//! Wall-clock milliseconds for effect and loading timelines.

/// Milliseconds since the Unix epoch.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Milliseconds since the Unix epoch.
#[cfg(not(feature = "hydrate"))]
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}

/// Delay from `now` until `due`, clamped into the range a browser timeout accepts.
pub fn delay_until(due_ms: u64, now_ms: u64) -> u32 {
    u32::try_from(due_ms.saturating_sub(now_ms)).unwrap_or(u32::MAX)
}
