// WakeWatch — Presence Poller
//
// Decides when to query the companion for sleep status and what to do with
// the replies. Handlers only decide; the app task performs the sends and
// forwards display/haptic updates. Replies are not matched to queries —
// the link is fire-and-forget and the last reply wins.

use crate::config::{POLL_INTERVAL_SECONDS, REQUEST_VALUE};
use crate::events::{DisplayState, Message, MessageKey};

/// What the reply handler wants done with the wake signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeAction {
    /// Start the wake vibration pattern.
    Start,
    /// Clear any alert state (no vibration).
    Clear,
}

pub struct PresencePoller {
    display_state: DisplayState,
    num_queries: u32,
}

impl PresencePoller {
    pub fn new() -> Self {
        Self {
            display_state: DisplayState::default(),
            num_queries: 0,
        }
    }

    pub fn display_state(&self) -> DisplayState {
        self.display_state
    }

    /// Total status queries emitted this boot. Diagnostic only.
    pub fn num_queries(&self) -> u32 {
        self.num_queries
    }

    /// Per-second tick: on every multiple-of-10 second, emit one status query.
    ///
    /// Relies on the clock delivering each second exactly once; there is no
    /// duplicate-tick guard beyond that.
    pub fn on_tick(&mut self, second_of_minute: u8) -> Option<Message> {
        if second_of_minute % POLL_INTERVAL_SECONDS != 0 {
            return None;
        }
        self.num_queries += 1;
        Some(Message {
            key: MessageKey::Asleep,
            value: REQUEST_VALUE,
        })
    }

    /// Sleep status reply, whenever one arrives.
    pub fn on_reply(&mut self, asleep: bool) -> WakeAction {
        if asleep {
            self.display_state = DisplayState::Alert;
            WakeAction::Start
        } else {
            self.display_state = DisplayState::Normal;
            WakeAction::Clear
        }
    }

    /// Any button press dismisses the wake signal. The caller cancels the
    /// vibration unconditionally; this just produces the confirmation to
    /// send upstream.
    pub fn on_dismiss(&mut self) -> Message {
        Message {
            key: MessageKey::ButtonPressed,
            value: REQUEST_VALUE,
        }
    }
}

impl Default for PresencePoller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_poll_seconds_emit_nothing() {
        let mut poller = PresencePoller::new();
        for second in (0..60u8).filter(|s| s % 10 != 0) {
            assert_eq!(poller.on_tick(second), None);
        }
        assert_eq!(poller.num_queries(), 0);
    }

    #[test]
    fn poll_seconds_emit_one_query_each() {
        let mut poller = PresencePoller::new();
        for (i, second) in [0u8, 10, 20, 30, 40, 50].iter().enumerate() {
            let msg = poller.on_tick(*second).expect("query expected");
            assert_eq!(msg.key, MessageKey::Asleep);
            assert_eq!(msg.value, REQUEST_VALUE);
            assert_eq!(poller.num_queries(), i as u32 + 1);
        }
    }

    #[test]
    fn tick_sequence_queries_only_at_ten() {
        let mut poller = PresencePoller::new();
        let emitted: Vec<_> = [8u8, 9, 10, 11]
            .iter()
            .filter_map(|&s| poller.on_tick(s).map(|m| (s, m)))
            .collect();
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].0, 10);
        assert_eq!(poller.num_queries(), 1);
    }

    #[test]
    fn asleep_reply_alerts_and_starts_wake() {
        let mut poller = PresencePoller::new();
        assert_eq!(poller.on_reply(true), WakeAction::Start);
        assert_eq!(poller.display_state(), DisplayState::Alert);

        // Already alerted: still starts the pattern again.
        assert_eq!(poller.on_reply(true), WakeAction::Start);
        assert_eq!(poller.display_state(), DisplayState::Alert);
    }

    #[test]
    fn awake_reply_clears_without_wake() {
        let mut poller = PresencePoller::new();
        poller.on_reply(true);
        assert_eq!(poller.on_reply(false), WakeAction::Clear);
        assert_eq!(poller.display_state(), DisplayState::Normal);
    }

    #[test]
    fn dismiss_confirms_button_press() {
        let mut poller = PresencePoller::new();
        let msg = poller.on_dismiss();
        assert_eq!(msg.key, MessageKey::ButtonPressed);
        assert_eq!(msg.value, REQUEST_VALUE);
        // Dismiss does not touch the displayed status; the next poll does.
        assert_eq!(poller.display_state(), DisplayState::Normal);
    }

    #[test]
    fn replies_need_no_outstanding_query() {
        // Fire-and-forget link: a reply with no query in flight is valid.
        let mut poller = PresencePoller::new();
        assert_eq!(poller.on_reply(true), WakeAction::Start);
        assert_eq!(poller.num_queries(), 0);
    }
}
