//! Arithmetic over the monotonic millisecond clock.
//!
//! Timestamps are kept in `u32`, which wraps around after roughly 49 days.
//! All comparisons here stay correct across the wrap as long as compared
//! timestamps are less than half of the range apart.

/// Milliseconds since boot.
pub type Millis = u32;

/// How many milliseconds passed between `since` and `now`.
#[must_use]
pub fn elapsed(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}

/// Signed distance from `older` to `newer`.
///
/// Negative when `newer` actually precedes `older`.
#[must_use]
pub fn delta(newer: Millis, older: Millis) -> i32 {
    newer.wrapping_sub(older) as i32
}

/// Whether `now` is at or past the `deadline`.
#[must_use]
pub fn reached(now: Millis, deadline: Millis) -> bool {
    delta(now, deadline) >= 0
}
