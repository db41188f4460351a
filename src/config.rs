// WakeWatch — Hardware & System Configuration
// Target: Seeed Studio Xiao ESP32-C3 (RISC-V)

// ---------------------------------------------------------------------------
// GPIO Pin Definitions (Xiao ESP32-C3 pinout)
// ---------------------------------------------------------------------------
pub const PIN_BUTTON_SELECT: i32 = 3; // D1/A1 — Select button (INPUT_PULLUP, active LOW)
pub const PIN_BUTTON_UP: i32 = 5;     // D3    — Up button
pub const PIN_BUTTON_DOWN: i32 = 9;   // D9    — Down button
pub const PIN_HAPTIC: i32 = 4;        // D2/A2 — Haptic motor control
pub const PIN_I2C_SDA: i32 = 6;       // D4    — I2C data line
pub const PIN_I2C_SCL: i32 = 7;       // D5    — I2C clock line
pub const PIN_UART_TX: i32 = 21;      // D6    — Companion link TX
pub const PIN_UART_RX: i32 = 20;      // D7    — Companion link RX

// ---------------------------------------------------------------------------
// I2C Bus
// ---------------------------------------------------------------------------
pub const I2C_ADDR_MPU6050: u8 = 0x68;
pub const I2C_ADDR_OLED: u8 = 0x3C;
pub const I2C_TIMEOUT_TICKS: u32 = 1000; // FreeRTOS ticks

// ---------------------------------------------------------------------------
// Companion link (UART)
// ---------------------------------------------------------------------------
pub const LINK_BAUD_RATE: u32 = 115_200;
pub const LINK_LINE_MAX: usize = 32; // longest well-formed message line

// ---------------------------------------------------------------------------
// Display (SSD1306 OLED)
// ---------------------------------------------------------------------------
pub const SCREEN_WIDTH: u32 = 128;
pub const SCREEN_HEIGHT: u32 = 64;
pub const DISPLAY_BUFFER_SIZE: usize = (SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize) / 8; // 1024

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_CLOCK: usize = 4096;
pub const STACK_SENSOR: usize = 4096;
pub const STACK_LINK: usize = 4096;
pub const STACK_APP: usize = 4096;
pub const STACK_UI: usize = 8192;

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const SENSOR_SAMPLE_INTERVAL_MS: u64 = 100; // 10 Hz accelerometer sampling
pub const UI_POLL_INTERVAL_MS: u64 = 10;        // 100 Hz input poll / refresh
pub const DEBOUNCE_MS: u64 = 50;

// ---------------------------------------------------------------------------
// Presence polling
// ---------------------------------------------------------------------------
/// Status queries go out on seconds that are multiples of this.
pub const POLL_INTERVAL_SECONDS: u8 = 10;
/// Magic value the companion expects on queries and confirmations.
pub const REQUEST_VALUE: u8 = 5;
/// Displayed clock offset from UTC, in minutes.
pub const UTC_OFFSET_MINUTES: i64 = 0;

// ---------------------------------------------------------------------------
// Nod detection
// ---------------------------------------------------------------------------
/// Samples per gesture window (2 s at 10 Hz).
pub const SAMPLE_WINDOW_SIZE: usize = 20;

// ---------------------------------------------------------------------------
// Wake vibration: alternating ON/OFF segment durations in ms, starting ON.
// ---------------------------------------------------------------------------
pub const WAKE_PATTERN_MS: &[u32] = &[1000, 800, 1000, 800, 1000, 800, 1000];
