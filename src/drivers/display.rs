// WakeWatch — SSD1306 OLED Driver
//
// Framebuffer-backed driver over the shared I2C bus. Implements
// embedded-graphics' `DrawTarget` so the watch face is plain text drawing;
// `flush()` pushes the whole 1 KiB buffer in one transaction.

use std::convert::Infallible;
use std::sync::Mutex;

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Alignment, Text},
};
use esp_idf_hal::i2c::I2cDriver;

use wakewatch::config::{
    DISPLAY_BUFFER_SIZE, I2C_ADDR_OLED, I2C_TIMEOUT_TICKS, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use wakewatch::events::DisplayState;

/// Thread-safe handle to a shared I2C bus.
pub type SharedBus = &'static Mutex<I2cDriver<'static>>;

const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

// Power-up sequence for a 128x64 panel in horizontal addressing mode.
const INIT_SEQUENCE: &[u8] = &[
    0xAE, // display off
    0xD5, 0x80, // clock divide
    0xA8, 0x3F, // multiplex 64
    0xD3, 0x00, // no display offset
    0x40, // start line 0
    0x8D, 0x14, // charge pump on
    0x20, 0x00, // horizontal addressing
    0xA1, // segment remap
    0xC8, // COM scan direction
    0xDA, 0x12, // COM pins
    0x81, 0xCF, // contrast
    0xD9, 0xF1, // precharge
    0xDB, 0x40, // VCOM detect
    0xA4, // resume from RAM
    0xA6, // normal (non-inverted)
    0xAF, // display on
];

pub struct OledDisplay {
    bus: SharedBus,
    buffer: [u8; DISPLAY_BUFFER_SIZE],
}

impl OledDisplay {
    pub fn new(bus: SharedBus) -> Self {
        Self {
            bus,
            buffer: [0; DISPLAY_BUFFER_SIZE],
        }
    }

    /// Probe the panel with a harmless command write.
    pub fn is_connected(&self) -> bool {
        let mut bus = self.bus.lock().unwrap();
        bus.write(I2C_ADDR_OLED, &[CONTROL_COMMAND, 0xE3], I2C_TIMEOUT_TICKS)
            .is_ok()
    }

    pub fn init(&mut self) -> anyhow::Result<()> {
        for cmd in INIT_SEQUENCE {
            self.command(&[*cmd])?;
        }
        self.buffer.fill(0);
        self.flush()?;
        log::info!("SSD1306 initialised ({}x{})", SCREEN_WIDTH, SCREEN_HEIGHT);
        Ok(())
    }

    /// Draw the watch face: HH:MM on top, status line underneath.
    pub fn show_watchface(
        &mut self,
        hours: u8,
        minutes: u8,
        status: &str,
    ) -> anyhow::Result<()> {
        self.buffer.fill(0);

        let time_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
        let status_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let center_x = SCREEN_WIDTH as i32 / 2;

        let time_text = format!("{:02}:{:02}", hours, minutes);
        let _ = Text::with_alignment(
            &time_text,
            Point::new(center_x, 34),
            time_style,
            Alignment::Center,
        )
        .draw(self);
        let _ = Text::with_alignment(
            status,
            Point::new(center_x, 58),
            status_style,
            Alignment::Center,
        )
        .draw(self);

        self.flush()
    }

    /// Watch face before the first reply arrives.
    pub fn show_loading(&mut self, hours: u8, minutes: u8) -> anyhow::Result<()> {
        self.show_watchface(hours, minutes, "loading...")
    }

    pub fn show_status(
        &mut self,
        hours: u8,
        minutes: u8,
        state: DisplayState,
    ) -> anyhow::Result<()> {
        self.show_watchface(hours, minutes, state.status_label())
    }

    fn command(&self, bytes: &[u8]) -> anyhow::Result<()> {
        let mut payload = [0u8; 4];
        payload[0] = CONTROL_COMMAND;
        payload[1..1 + bytes.len()].copy_from_slice(bytes);

        let mut bus = self.bus.lock().unwrap();
        bus.write(I2C_ADDR_OLED, &payload[..1 + bytes.len()], I2C_TIMEOUT_TICKS)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        // Reset the addressing window, then stream the framebuffer.
        self.command(&[0x21, 0x00, (SCREEN_WIDTH - 1) as u8])?;
        self.command(&[0x22, 0x00, (SCREEN_HEIGHT / 8 - 1) as u8])?;

        let mut payload = [0u8; DISPLAY_BUFFER_SIZE + 1];
        payload[0] = CONTROL_DATA;
        payload[1..].copy_from_slice(&self.buffer);

        let mut bus = self.bus.lock().unwrap();
        bus.write(I2C_ADDR_OLED, &payload, I2C_TIMEOUT_TICKS)?;
        Ok(())
    }
}

impl OriginDimensions for OledDisplay {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for OledDisplay {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= SCREEN_WIDTH as i32
                || point.y >= SCREEN_HEIGHT as i32
            {
                continue;
            }
            let (x, y) = (point.x as usize, point.y as usize);
            let ix = x + (y / 8) * SCREEN_WIDTH as usize;
            let bit = 1u8 << (y % 8);
            match color {
                BinaryColor::On => self.buffer[ix] |= bit,
                BinaryColor::Off => self.buffer[ix] &= !bit,
            }
        }
        Ok(())
    }
}
