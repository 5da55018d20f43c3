//! Active window filter.
//!
//! A notification is due when the caller-supplied current hour falls within
//! ±1 hour of its scheduled hour. The clock is always an explicit parameter
//! so the filter stays a pure function.

use chrono::Timelike;

use crate::models::GeneratedNotification;

/// Half-width of the active window, in hours.
pub const ACTIVE_WINDOW_HOURS: u8 = 1;

/// Select the notifications due at `current_hour` (0-23).
///
/// Hour distance is plain absolute difference: hour 0 and hour 23 count as
/// 23 apart, so a 23:30 reminder is never active shortly after midnight.
/// That matches the source behavior; [`select_active_wrapping`] applies
/// circular distance instead. Never mutates its input.
pub fn select_active(
    notifications: &[GeneratedNotification],
    current_hour: u8,
) -> Vec<GeneratedNotification> {
    notifications
        .iter()
        .filter(|n| n.enabled && current_hour.abs_diff(n.time.hour) <= ACTIVE_WINDOW_HOURS)
        .cloned()
        .collect()
}

/// Variant of [`select_active`] using circular 24-hour distance, so the
/// window wraps across midnight.
pub fn select_active_wrapping(
    notifications: &[GeneratedNotification],
    current_hour: u8,
) -> Vec<GeneratedNotification> {
    notifications
        .iter()
        .filter(|n| {
            let linear = current_hour.abs_diff(n.time.hour);
            n.enabled && linear.min(24 - linear) <= ACTIVE_WINDOW_HOURS
        })
        .cloned()
        .collect()
}

/// The local wall-clock hour, for callers that want "due now" semantics.
pub fn current_hour_local() -> u8 {
    chrono::Local::now().hour() as u8
}
