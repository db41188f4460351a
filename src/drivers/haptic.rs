// WakeWatch — Haptic Motor Driver
//
// GPIO wrapper over the wake-pattern playback state. The UI task polls
// `update()` at ~100 Hz; playback never blocks, so a cancel takes effect
// on the next poll.

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};

use wakewatch::haptics::WakePlayback;

pub struct HapticDriver<'d> {
    pin: PinDriver<'d, AnyOutputPin, Output>,
    playback: WakePlayback,
}

impl<'d> HapticDriver<'d> {
    pub fn new(pin: PinDriver<'d, AnyOutputPin, Output>) -> Self {
        Self {
            pin,
            playback: WakePlayback::new(),
        }
    }

    /// Begin playing a pattern from its first segment. Restarts playback if
    /// one is already running.
    pub fn start(&mut self, pattern: &'static [u32], now_ms: u32) {
        self.playback.start(pattern, now_ms);
        let _ = self.pin.set_high();
    }

    /// Stop immediately. A cancel with nothing playing is a no-op.
    pub fn cancel(&mut self) {
        self.playback.cancel();
        let _ = self.pin.set_low();
    }

    /// Advance playback to `now_ms`. Call every UI poll interval.
    pub fn update(&mut self, now_ms: u32) {
        match self.playback.level_at(now_ms) {
            Some(true) => {
                let _ = self.pin.set_high();
            }
            Some(false) | None => {
                let _ = self.pin.set_low();
            }
        }
    }
}
