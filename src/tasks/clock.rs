// WakeWatch — Clock Task
//
// Delivers one tick per second with the current time of day. The poller
// only cares about the second-of-minute; the UI renders hours and minutes.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use wakewatch::config::UTC_OFFSET_MINUTES;
use wakewatch::events::AppEvent;

pub fn clock_task(app_tx: Sender<AppEvent>) {
    log::info!("Clock task started");

    loop {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();

        let local_secs = now.as_secs() as i64 + UTC_OFFSET_MINUTES * 60;
        let day_secs = local_secs.rem_euclid(86_400);

        let tick = AppEvent::Tick {
            hours: (day_secs / 3600) as u8,
            minutes: ((day_secs / 60) % 60) as u8,
            seconds: (day_secs % 60) as u8,
        };
        if app_tx.send(tick).is_err() {
            log::warn!("App channel closed — exiting clock task");
            return;
        }

        // Sleep to the next whole-second boundary.
        let remainder_ms = 1000 - u64::from(now.subsec_millis());
        thread::sleep(Duration::from_millis(remainder_ms));
    }
}
