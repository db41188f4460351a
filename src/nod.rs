// WakeWatch — Nod Detector
//
// A head nod tilts the watch so most of a sample window reads positive
// vertical acceleration. The check is stateless: each window is judged on
// its own, with no smoothing or debounce between consecutive windows, so a
// sustained tilt can confirm more than once.

use crate::config::REQUEST_VALUE;
use crate::events::{Message, MessageKey, MotionSample};

/// True when strictly more than 80% of the window has positive z.
///
/// The threshold `4 * len / 5` truncates, so a window of 20 needs at least
/// 17 positive samples and a window of 3 needs all 3. Uses the window's
/// actual length, not the configured size, so a reconfigured sensor task
/// stays correct.
pub fn detect_nod(window: &[MotionSample]) -> bool {
    if window.is_empty() {
        return false;
    }
    let positive = window.iter().filter(|s| s.z > 0).count();
    positive > 4 * window.len() / 5
}

/// The one-shot confirmation sent when a window qualifies.
pub fn confirm_message() -> Message {
    Message {
        key: MessageKey::NodConfirmed,
        value: REQUEST_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(positive: usize, total: usize) -> Vec<MotionSample> {
        (0..total)
            .map(|i| MotionSample {
                x: 0,
                y: 0,
                z: if i < positive { 512 } else { -512 },
            })
            .collect()
    }

    #[test]
    fn window_of_20_needs_17_positive() {
        assert!(!detect_nod(&window(16, 20)));
        assert!(detect_nod(&window(17, 20)));
        assert!(detect_nod(&window(20, 20)));
    }

    #[test]
    fn window_of_3_needs_all_3() {
        // 4 * 3 / 5 truncates to 2, so the count must exceed 2.
        assert!(!detect_nod(&window(2, 3)));
        assert!(detect_nod(&window(3, 3)));
    }

    #[test]
    fn zero_z_is_not_positive() {
        let flat = vec![MotionSample { x: 100, y: -40, z: 0 }; 20];
        assert!(!detect_nod(&flat));
    }

    #[test]
    fn empty_window_never_nods() {
        assert!(!detect_nod(&[]));
    }

    #[test]
    fn consecutive_windows_are_independent() {
        // No hysteresis: the same tilted window qualifies every time.
        let tilted = window(20, 20);
        assert!(detect_nod(&tilted));
        assert!(detect_nod(&tilted));
    }

    #[test]
    fn confirmation_shape() {
        let msg = confirm_message();
        assert_eq!(msg.key, MessageKey::NodConfirmed);
        assert_eq!(msg.value, REQUEST_VALUE);
    }
}
