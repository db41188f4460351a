// WakeWatch — App Task
//
// The single event-delivery context: every tick, reply, button press, and
// sample window lands here, one at a time. Handlers on the decision core
// run to completion; this loop carries out their side effects (outbound
// sends, UI and haptic updates) and never blocks on a reply.

use std::sync::mpsc::{Receiver, Sender};

use super::link::LinkSender;
use wakewatch::events::{AppEvent, DisplayState, UiEvent};
use wakewatch::nod;
use wakewatch::poller::{PresencePoller, WakeAction};

/// Returns false once the UI task is gone, so the loop can shut down.
fn forward(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    if ui_tx.send(event).is_err() {
        log::warn!("UI channel closed — exiting app task");
        return false;
    }
    true
}

pub fn app_task(app_rx: Receiver<AppEvent>, ui_tx: Sender<UiEvent>, mut link: LinkSender) {
    log::info!("App task started");

    let mut poller = PresencePoller::new();

    loop {
        let event = match app_rx.recv() {
            Ok(e) => e,
            Err(_) => {
                log::warn!("Event channel closed — exiting app task");
                return;
            }
        };

        match event {
            AppEvent::Tick {
                hours,
                minutes,
                seconds,
            } => {
                if !forward(&ui_tx, UiEvent::UpdateTime { hours, minutes }) {
                    return;
                }
                if let Some(query) = poller.on_tick(seconds) {
                    link.send(query);
                    log::debug!("Number of total queries: {}", poller.num_queries());
                }
            }

            AppEvent::Reply { asleep } => {
                log::info!("Sleep status reply: asleep = {}", asleep);
                match poller.on_reply(asleep) {
                    WakeAction::Start => {
                        if !forward(&ui_tx, UiEvent::UpdateStatus(DisplayState::Alert))
                            || !forward(&ui_tx, UiEvent::StartWake)
                        {
                            return;
                        }
                    }
                    WakeAction::Clear => {
                        if !forward(&ui_tx, UiEvent::UpdateStatus(DisplayState::Normal)) {
                            return;
                        }
                    }
                }
            }

            AppEvent::Dismiss => {
                // Cancel first so the wrist goes quiet immediately, then
                // confirm upstream.
                if !forward(&ui_tx, UiEvent::CancelWake) {
                    return;
                }
                link.send(poller.on_dismiss());
            }

            AppEvent::SampleWindow(window) => {
                if nod::detect_nod(&window) {
                    log::info!("Nod detected ({} samples)", window.len());
                    link.send(nod::confirm_message());
                }
            }
        }
    }
}
