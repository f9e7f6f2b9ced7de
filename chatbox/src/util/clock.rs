//! Wall-clock timestamps for new chat messages.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in Unix milliseconds.
///
/// Uses `Date.now()` in the browser and the system clock elsewhere (SSR and
/// native tests). Falls back to `0` if the clock reads before the epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
    }
}
