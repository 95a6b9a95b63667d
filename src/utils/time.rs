use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since UNIX epoch, or 0 if the clock is set before the epoch
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
