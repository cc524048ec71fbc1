//! Evaluate whether button taps are forming a tempo.

use crate::time::{self, Millis};

/// How many of the most recent taps are considered for the estimate.
pub const TAP_HISTORY_CAPACITY: usize = 6;

/// Circular history of tap timestamps.
///
/// Once full, the oldest timestamp gets overwritten. The cursor always
/// points to the slot that will be written next.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapHistory<const N: usize> {
    timestamps: [Millis; N],
    count: usize,
    cursor: usize,
}

impl<const N: usize> Default for TapHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TapHistory<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamps: [0; N],
            count: 0,
            cursor: 0,
        }
    }

    pub fn write(&mut self, now: Millis) {
        self.timestamps[self.cursor] = now;
        self.cursor = (self.cursor + 1) % N;
        self.count = (self.count + 1).min(N);
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.cursor = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Timestamp written `age` taps ago, 0 being the newest.
    #[must_use]
    pub fn recent(&self, age: usize) -> Option<Millis> {
        if age >= self.count {
            return None;
        }
        let index = (self.cursor + N - 1 - age) % N;
        Some(self.timestamps[index])
    }

    /// Estimate tempo from the average of intervals between stored taps.
    ///
    /// Intervals that are not positive are left out of the average. Returns
    /// `None` when there are less than two taps, no positive interval, or
    /// when the average is too long to make at least one beat per minute.
    #[must_use]
    pub fn estimate(&self) -> Option<u32> {
        if self.count < 2 {
            return None;
        }

        let mut total: u64 = 0;
        let mut intervals: u64 = 0;
        for age in 0..self.count - 1 {
            let newer = self.recent(age)?;
            let older = self.recent(age + 1)?;
            let delta = time::delta(newer, older);
            if delta > 0 {
                total += delta as u64;
                intervals += 1;
            }
        }

        if intervals == 0 {
            return None;
        }

        let average = total / intervals;
        if average == 0 {
            return None;
        }

        let bpm = libm::round(60_000.0 / average as f64) as u32;
        if bpm > 0 {
            Some(bpm)
        } else {
            None
        }
    }
}

/// Identify tempo being tapped in by the user.
///
/// Call `trigger` for every tap and `reset_if_inactive` on every tick. The
/// history gets forgotten once the user stops tapping for longer than the
/// given expiry, so a stale tap never resurfaces in a future estimate.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDetector {
    history: TapHistory<TAP_HISTORY_CAPACITY>,
    last_tap: Millis,
}

impl TapDetector {
    /// Record a tap and return the freshly estimated tempo, if any.
    pub fn trigger(&mut self, now: Millis) -> Option<u32> {
        self.history.write(now);
        self.last_tap = now;
        self.history.estimate()
    }

    pub fn reset_if_inactive(&mut self, now: Millis, expiry: Millis) {
        if !self.history.is_empty() && time::elapsed(now, self.last_tap) > expiry {
            self.history.reset();
        }
    }

    #[must_use]
    pub fn taps(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &TapHistory<TAP_HISTORY_CAPACITY> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn history_from(taps: &[Millis]) -> TapHistory<TAP_HISTORY_CAPACITY> {
        let mut history = TapHistory::new();
        for tap in taps {
            history.write(*tap);
        }
        history
    }

    #[test]
    fn when_empty_it_does_not_estimate() {
        assert_eq!(history_from(&[]).estimate(), None);
    }

    #[test]
    fn when_tapped_once_it_does_not_estimate() {
        assert_eq!(history_from(&[1000]).estimate(), None);
    }

    #[test]
    fn when_tapped_in_exact_interval_it_estimates_tempo() {
        assert_eq!(history_from(&[0, 500, 1000]).estimate(), Some(120));
    }

    #[test]
    fn when_interval_does_not_divide_minute_it_rounds_to_nearest() {
        // 60000 / 700 = 85.71
        assert_eq!(history_from(&[0, 700]).estimate(), Some(86));
        // 60000 / 480 = 125.0
        assert_eq!(history_from(&[0, 480, 960]).estimate(), Some(125));
        // 60000 / 1001 = 59.94
        assert_eq!(history_from(&[0, 1001]).estimate(), Some(60));
    }

    #[test]
    fn when_intervals_vary_it_averages_them() {
        // Average of 400 and 600 is 500.
        assert_eq!(history_from(&[0, 400, 1000]).estimate(), Some(120));
    }

    #[test]
    fn when_all_taps_share_timestamp_it_does_not_estimate() {
        assert_eq!(history_from(&[100, 100, 100]).estimate(), None);
    }

    #[test]
    fn when_some_intervals_are_zero_they_are_left_out_of_average() {
        assert_eq!(history_from(&[0, 500, 500, 1000]).estimate(), Some(120));
    }

    #[test]
    fn when_timestamps_go_backwards_negative_interval_is_left_out() {
        assert_eq!(history_from(&[1000, 500, 1000]).estimate(), Some(120));
    }

    #[test]
    fn when_interval_is_too_long_it_does_not_estimate() {
        assert_eq!(history_from(&[0, 200_000]).estimate(), None);
    }

    #[test]
    fn when_clock_wraps_between_taps_it_still_estimates() {
        let start = u32::MAX - 200;
        let history = history_from(&[start, start.wrapping_add(500), start.wrapping_add(1000)]);
        assert_eq!(history.estimate(), Some(120));
    }

    #[test]
    fn when_full_it_never_holds_more_than_capacity() {
        let mut history = TapHistory::<TAP_HISTORY_CAPACITY>::new();
        for i in 0..20 {
            history.write(i * 100);
            assert!(history.len() <= TAP_HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), TAP_HISTORY_CAPACITY);
    }

    #[test]
    fn cursor_points_to_next_write_slot() {
        let mut history = TapHistory::<TAP_HISTORY_CAPACITY>::new();
        assert_eq!(history.cursor(), 0);
        for i in 1..=7 {
            history.write(i * 100);
            assert_eq!(history.cursor(), i as usize % TAP_HISTORY_CAPACITY);
        }
    }

    #[test]
    fn when_seventh_tap_arrives_the_first_is_evicted() {
        // The first interval is very different, so its presence would be
        // visible in the average.
        let history = history_from(&[0, 3000, 3500, 4000, 4500, 5000, 5500]);
        assert_eq!(history.len(), 6);
        assert_eq!(history.recent(5), Some(3000));
        assert_eq!(history.recent(6), None);
        assert_eq!(history.estimate(), Some(120));
    }

    #[test]
    fn when_reset_it_is_empty_and_starts_from_first_slot() {
        let mut history = history_from(&[0, 500, 1000]);
        history.reset();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.estimate(), None);
    }

    #[test]
    fn when_detector_is_triggered_it_returns_estimate() {
        let mut detector = TapDetector::default();
        assert_eq!(detector.trigger(0), None);
        assert_eq!(detector.trigger(500), Some(120));
        assert_eq!(detector.trigger(1000), Some(120));
    }

    #[test]
    fn when_taps_stop_for_longer_than_expiry_history_is_forgotten() {
        let mut detector = TapDetector::default();
        detector.trigger(0);
        detector.trigger(500);

        detector.reset_if_inactive(4500, 4000);
        assert_eq!(detector.taps(), 2);

        detector.reset_if_inactive(4501, 4000);
        assert_eq!(detector.taps(), 0);
        assert_eq!(detector.history().cursor(), 0);

        assert_eq!(detector.trigger(5000), None);
    }

    proptest! {
        #[test]
        fn constant_interval_estimates_exact_tempo(
            interval in 1_u32..100_000,
            start in any::<u32>(),
            taps in 2_usize..12,
        ) {
            let mut history = TapHistory::<TAP_HISTORY_CAPACITY>::new();
            for i in 0..taps {
                history.write(start.wrapping_add(interval * i as u32));
            }
            let expected = libm::round(60_000.0 / f64::from(interval)) as u32;
            let expected = if expected > 0 { Some(expected) } else { None };
            prop_assert_eq!(history.estimate(), expected);
        }

        #[test]
        fn history_never_exceeds_capacity(taps in proptest::collection::vec(any::<u32>(), 0..32)) {
            let mut history = TapHistory::<TAP_HISTORY_CAPACITY>::new();
            for tap in taps {
                history.write(tap);
                prop_assert!(history.len() <= TAP_HISTORY_CAPACITY);
                prop_assert!(history.cursor() < TAP_HISTORY_CAPACITY);
            }
        }
    }
}
