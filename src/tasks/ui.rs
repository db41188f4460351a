// WakeWatch — UI Task
//
// Owns the OLED display, haptic motor, and button input manager.
// Polls the buttons at ~100 Hz, steps the vibration pattern, and redraws
// the watch face when the displayed minute or status changes.

use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Duration;

use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver};

use crate::drivers::display::{OledDisplay, SharedBus};
use crate::drivers::haptic::HapticDriver;
use crate::input::InputManager;
use wakewatch::config::{UI_POLL_INTERVAL_MS, WAKE_PATTERN_MS};
use wakewatch::events::{AppEvent, DisplayState, UiEvent};

pub fn ui_task(
    bus: SharedBus,
    button_pins: [PinDriver<'static, AnyIOPin, Input>; 3],
    haptic_pin: PinDriver<'static, AnyOutputPin, Output>,
    ui_rx: Receiver<UiEvent>,
    app_tx: Sender<AppEvent>,
) {
    log::info!("UI task started");

    let mut display = OledDisplay::new(bus);
    let mut haptic = HapticDriver::new(haptic_pin);
    let mut input = InputManager::new(button_pins, app_tx);

    if let Err(e) = display.init() {
        log::error!("Display init failed: {}", e);
    }

    let mut hours: u8 = 0;
    let mut minutes: u8 = 0;
    let mut status = DisplayState::default();
    // No reply yet — show the loading face until the first one lands.
    let mut have_status = false;

    if let Err(e) = display.show_loading(hours, minutes) {
        log::error!("Display error: {}", e);
    }

    let poll_interval = Duration::from_millis(UI_POLL_INTERVAL_MS);

    loop {
        // 1. Poll the buttons (debounce handled internally).
        input.update();

        // 2. Step the vibration pattern.
        haptic.update(crate::now_ms());

        // 3. Drain all pending UI events (non-blocking).
        let mut redraw = false;
        while let Ok(event) = ui_rx.try_recv() {
            match event {
                UiEvent::UpdateTime {
                    hours: h,
                    minutes: m,
                } => {
                    if (h, m) != (hours, minutes) {
                        hours = h;
                        minutes = m;
                        redraw = true;
                    }
                }

                UiEvent::UpdateStatus(state) => {
                    if !have_status || state != status {
                        redraw = true;
                    }
                    have_status = true;
                    status = state;
                }

                UiEvent::StartWake => {
                    haptic.start(WAKE_PATTERN_MS, crate::now_ms());
                }

                UiEvent::CancelWake => {
                    haptic.cancel();
                }
            }
        }

        if redraw {
            let result = if have_status {
                display.show_status(hours, minutes, status)
            } else {
                display.show_loading(hours, minutes)
            };
            if let Err(e) = result {
                log::error!("Display error: {}", e);
            }
        }

        thread::sleep(poll_interval);
    }
}
