// WakeWatch — Sensor Task
//
// Reads the accelerometer at 10 Hz and hands the app task one full sample
// window at a time. The nod detector sizes its threshold from the window it
// receives, so SAMPLE_WINDOW_SIZE is this task's decision alone.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

use crate::drivers::imu::{Mpu6050, SharedBus};
use wakewatch::config::{SAMPLE_WINDOW_SIZE, SENSOR_SAMPLE_INTERVAL_MS};
use wakewatch::events::{AppEvent, MotionSample};

pub fn sensor_task(bus: SharedBus, app_tx: Sender<AppEvent>) {
    log::info!("Sensor task started");

    let imu = Mpu6050::new(bus);
    if let Err(e) = imu.init() {
        log::error!("MPU6050 init failed in sensor task: {}", e);
        return;
    }

    let interval = Duration::from_millis(SENSOR_SAMPLE_INTERVAL_MS);
    let mut window: Vec<MotionSample> = Vec::with_capacity(SAMPLE_WINDOW_SIZE);

    loop {
        let tick_start = Instant::now();

        match imu.read_sample() {
            Ok(sample) => {
                window.push(sample);
                if window.len() == SAMPLE_WINDOW_SIZE {
                    let full = std::mem::replace(
                        &mut window,
                        Vec::with_capacity(SAMPLE_WINDOW_SIZE),
                    );
                    if app_tx.send(AppEvent::SampleWindow(full)).is_err() {
                        log::warn!("App channel closed — exiting sensor task");
                        return;
                    }
                }
            }
            Err(e) => {
                log::warn!("IMU read error: {}", e);
            }
        }

        // Sleep for the remainder of the sampling interval to hold 10 Hz.
        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
