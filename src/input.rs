// WakeWatch — Button Input Manager
//
// Three physical buttons (select, up, down), each debounced, all mapped to
// the same dismiss action — which one fired does not matter. Polled at
// ~100 Hz from the UI task.

use std::sync::mpsc::Sender;
use std::time::Instant;

use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver};

use wakewatch::config::DEBOUNCE_MS;
use wakewatch::events::AppEvent;

struct ButtonState {
    pin: PinDriver<'static, AnyIOPin, Input>,

    // Debounce state
    last_raw: bool,
    last_debounce: Instant,
    down: bool,
}

impl ButtonState {
    fn new(pin: PinDriver<'static, AnyIOPin, Input>) -> Self {
        Self {
            pin,
            last_raw: true, // pull-up → idle HIGH
            last_debounce: Instant::now(),
            down: false,
        }
    }

    /// Returns true on a debounced press edge.
    fn pressed_edge(&mut self, now: Instant) -> bool {
        let current = self.pin.is_high(); // true = released (pull-up)

        // ---- debounce filter ----
        if current != self.last_raw {
            self.last_debounce = now;
        }
        self.last_raw = current;

        let stable_ms = now.duration_since(self.last_debounce).as_millis() as u64;
        if stable_ms < DEBOUNCE_MS {
            // Signal still bouncing — wait.
            return false;
        }

        let pressed = !current; // active LOW
        let edge = pressed && !self.down;
        self.down = pressed;
        edge
    }
}

pub struct InputManager {
    buttons: [ButtonState; 3],
    app_tx: Sender<AppEvent>,
}

impl InputManager {
    pub fn new(
        pins: [PinDriver<'static, AnyIOPin, Input>; 3],
        app_tx: Sender<AppEvent>,
    ) -> Self {
        Self {
            buttons: pins.map(ButtonState::new),
            app_tx,
        }
    }

    /// Call every ~10 ms from the UI task loop.
    pub fn update(&mut self) {
        let now = Instant::now();
        for button in &mut self.buttons {
            if button.pressed_edge(now) {
                let _ = self.app_tx.send(AppEvent::Dismiss);
            }
        }
    }
}
