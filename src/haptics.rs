// WakeWatch — Wake Pattern Playback
//
// The wake signal is a list of alternating ON/OFF segment durations in
// milliseconds, starting with ON. `WakePlayback` holds the active pattern
// and its start time; the haptic driver is a thin GPIO wrapper around it,
// so start and cancel behave the same off-target as on the watch.

/// Motor level at `elapsed_ms` into a pattern.
///
/// Even-indexed segments are ON, odd-indexed OFF. Returns `None` once the
/// pattern has run its full length.
pub fn pattern_level(pattern: &[u32], elapsed_ms: u32) -> Option<bool> {
    let mut position = elapsed_ms;
    for (ix, &segment) in pattern.iter().enumerate() {
        if position < segment {
            return Some(ix % 2 == 0);
        }
        position -= segment;
    }
    None
}

/// Playback state for one vibration pattern at a time.
#[derive(Debug, Default)]
pub struct WakePlayback {
    pattern: Option<&'static [u32]>,
    started_ms: u32,
}

impl WakePlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin playing a pattern from its first segment. Restarts playback if
    /// one is already running.
    pub fn start(&mut self, pattern: &'static [u32], now_ms: u32) {
        self.pattern = Some(pattern);
        self.started_ms = now_ms;
    }

    /// Stop immediately. A cancel with nothing playing is a no-op.
    pub fn cancel(&mut self) {
        self.pattern = None;
    }

    /// Motor level at `now_ms`, or `None` when nothing is playing.
    /// A pattern that has run its full length clears itself.
    pub fn level_at(&mut self, now_ms: u32) -> Option<bool> {
        let pattern = self.pattern?;
        let level = pattern_level(pattern, now_ms.wrapping_sub(self.started_ms));
        if level.is_none() {
            self.pattern = None;
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WAKE_PATTERN_MS;

    #[test]
    fn wake_pattern_alternates_on_and_off() {
        assert_eq!(pattern_level(WAKE_PATTERN_MS, 0), Some(true));
        assert_eq!(pattern_level(WAKE_PATTERN_MS, 999), Some(true));
        assert_eq!(pattern_level(WAKE_PATTERN_MS, 1000), Some(false));
        assert_eq!(pattern_level(WAKE_PATTERN_MS, 1799), Some(false));
        assert_eq!(pattern_level(WAKE_PATTERN_MS, 1800), Some(true));
    }

    #[test]
    fn wake_pattern_finishes_after_last_segment() {
        let total: u32 = WAKE_PATTERN_MS.iter().sum();
        assert_eq!(pattern_level(WAKE_PATTERN_MS, total - 1), Some(true));
        assert_eq!(pattern_level(WAKE_PATTERN_MS, total), None);
        assert_eq!(pattern_level(WAKE_PATTERN_MS, u32::MAX), None);
    }

    #[test]
    fn wake_pattern_shape() {
        // Four 1 s pulses separated by 800 ms gaps, 6.4 s end to end.
        assert_eq!(WAKE_PATTERN_MS.len(), 7);
        assert_eq!(WAKE_PATTERN_MS.iter().sum::<u32>(), 6400);
    }

    #[test]
    fn empty_pattern_is_already_done() {
        assert_eq!(pattern_level(&[], 0), None);
    }

    #[test]
    fn cancel_mid_pattern_stops_playback() {
        let mut playback = WakePlayback::new();
        playback.start(WAKE_PATTERN_MS, 1_000);
        assert_eq!(playback.level_at(1_000), Some(true));
        assert_eq!(playback.level_at(2_100), Some(false));

        playback.cancel();
        // 2_900 falls inside the second ON pulse; a cancelled pattern must
        // never go high again.
        assert_eq!(playback.level_at(2_900), None);
        assert_eq!(playback.level_at(7_500), None);
    }

    #[test]
    fn cancel_with_nothing_playing_is_a_noop() {
        let mut playback = WakePlayback::new();
        playback.cancel();
        assert_eq!(playback.level_at(0), None);

        // Still usable afterwards.
        playback.start(WAKE_PATTERN_MS, 500);
        assert_eq!(playback.level_at(500), Some(true));
    }

    #[test]
    fn playback_clears_after_natural_completion() {
        let mut playback = WakePlayback::new();
        playback.start(WAKE_PATTERN_MS, 0);
        let total: u32 = WAKE_PATTERN_MS.iter().sum();
        assert_eq!(playback.level_at(total - 1), Some(true));
        assert_eq!(playback.level_at(total), None);
        // Finished means idle, not looping back to the start.
        assert_eq!(playback.level_at(0), None);
    }

    #[test]
    fn restart_resets_the_clock() {
        let mut playback = WakePlayback::new();
        playback.start(WAKE_PATTERN_MS, 0);
        assert_eq!(playback.level_at(1_200), Some(false));

        playback.start(WAKE_PATTERN_MS, 1_200);
        assert_eq!(playback.level_at(1_200), Some(true));
    }
}
