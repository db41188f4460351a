// WakeWatch — Firmware Entry Point
//
// Boot sequence:
//   1. Initialise logging and take the peripherals.
//   2. Bring up the shared I2C bus (OLED + MPU6050) and the companion UART.
//   3. Spawn the clock, sensor, link, app, and UI tasks.
//
// All decisions (when to poll the companion, what a reply means, what counts
// as a nod) live in the wakewatch library crate; this binary only wires
// hardware and channels around it.

#[cfg(target_os = "espidf")]
mod drivers;
#[cfg(target_os = "espidf")]
mod input;
#[cfg(target_os = "espidf")]
mod tasks;

// ---------------------------------------------------------------------------
// Utility: milliseconds since boot (wraps at ~49 days — fine for timeouts)
// ---------------------------------------------------------------------------
#[cfg(target_os = "espidf")]
pub fn now_ms() -> u32 {
    unsafe { (esp_idf_sys::esp_timer_get_time() / 1000) as u32 }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    use std::sync::mpsc;
    use std::sync::Mutex;
    use std::thread;
    use std::time::Duration;

    use esp_idf_hal::gpio::{IOPin, OutputPin, PinDriver, Pull};
    use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
    use esp_idf_hal::prelude::*;
    use esp_idf_hal::uart::{config::Config as UartConfig, UartDriver};
    use esp_idf_hal::units::Hertz;

    use crate::tasks::link::LinkSender;
    use wakewatch::config::*;

    // Link esp-idf-sys runtime patches and initialise logging.
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();
    log::info!("WakeWatch firmware starting…");

    // ---- Peripherals ------------------------------------------------------
    let peripherals = Peripherals::take()?;

    // ---- I2C bus (shared between OLED and MPU6050) ------------------------
    let i2c_config = I2cConfig::new().baudrate(400u32.kHz().into());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio6, // SDA
        peripherals.pins.gpio7, // SCL
        &i2c_config,
    )?;
    // The bus outlives every task — embedded firmware never exits.
    let i2c_bus: &'static Mutex<I2cDriver<'static>> = Box::leak(Box::new(Mutex::new(i2c)));

    // ---- Companion UART ---------------------------------------------------
    let uart_config = UartConfig::new().baudrate(Hertz(LINK_BAUD_RATE));
    let uart = UartDriver::new(
        peripherals.uart1,
        peripherals.pins.gpio21, // TX
        peripherals.pins.gpio20, // RX
        Option::<esp_idf_hal::gpio::AnyIOPin>::None,
        Option::<esp_idf_hal::gpio::AnyIOPin>::None,
        &uart_config,
    )?;
    let uart: &'static UartDriver<'static> = Box::leak(Box::new(uart));
    let (uart_tx, uart_rx) = uart.split();

    // ---- Component self-test ----------------------------------------------
    let oled_ok = drivers::display::OledDisplay::new(i2c_bus).is_connected();
    let imu_ok = drivers::imu::Mpu6050::new(i2c_bus).is_connected();
    if !oled_ok || !imu_ok {
        log::error!("Boot check FAILED — OLED:{} IMU:{}", oled_ok, imu_ok);
        // Continue anyway so we can still debug via serial.
    }

    // ---- Buttons (pull-up, active LOW) — all three dismiss ----------------
    let mut select = PinDriver::input(peripherals.pins.gpio3.downgrade())?;
    select.set_pull(Pull::Up)?;
    let mut up = PinDriver::input(peripherals.pins.gpio5.downgrade())?;
    up.set_pull(Pull::Up)?;
    let mut down = PinDriver::input(peripherals.pins.gpio9.downgrade())?;
    down.set_pull(Pull::Up)?;
    let button_pins = [select, up, down];

    // ---- Haptic motor -----------------------------------------------------
    let haptic_pin = PinDriver::output(peripherals.pins.gpio4.downgrade_output())?;

    // ---- Channels ---------------------------------------------------------
    let (app_tx, app_rx) = mpsc::channel();
    let (ui_tx, ui_rx) = mpsc::channel();

    // ---- Spawn tasks (map to FreeRTOS tasks via std::thread) ---------------

    // Clock task — one tick per second for the watch face and the poller.
    let clock_app_tx = app_tx.clone();
    thread::Builder::new()
        .name("clock".into())
        .stack_size(STACK_CLOCK)
        .spawn(move || {
            tasks::clock::clock_task(clock_app_tx);
        })?;

    // Sensor task — 10 Hz accelerometer windows for the nod detector.
    let sensor_bus = i2c_bus;
    let sensor_app_tx = app_tx.clone();
    thread::Builder::new()
        .name("sensor".into())
        .stack_size(STACK_SENSOR)
        .spawn(move || {
            tasks::sensor::sensor_task(sensor_bus, sensor_app_tx);
        })?;

    // Link task — inbound companion messages.
    let link_app_tx = app_tx.clone();
    thread::Builder::new()
        .name("link".into())
        .stack_size(STACK_LINK)
        .spawn(move || {
            tasks::link::link_task(uart_rx, link_app_tx);
        })?;

    // App task — the decision core's single event-delivery context.
    thread::Builder::new()
        .name("app".into())
        .stack_size(STACK_APP)
        .spawn(move || {
            tasks::app::app_task(app_rx, ui_tx, LinkSender::new(uart_tx));
        })?;

    // UI task (display + buttons + haptic)
    thread::Builder::new()
        .name("ui".into())
        .stack_size(STACK_UI)
        .spawn(move || {
            tasks::ui::ui_task(i2c_bus, button_pins, haptic_pin, ui_rx, app_tx);
        })?;

    log::info!("Boot complete — entering normal operation");

    // Main thread has nothing left to do — park it forever.
    // (All work happens in the spawned FreeRTOS tasks.)
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    // Host builds exist for the decision-core tests in the library crate.
    eprintln!("wakewatch is firmware for the esp32-c3; build with an espidf target");
}
