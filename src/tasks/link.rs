// WakeWatch — Companion Link Task
//
// One line on the UART is one message (see wakewatch::link). The receive
// loop turns recognized inbound messages into app events; everything
// malformed or unknown is logged and discarded. Outbound sends go through
// `LinkSender`, also fire-and-forget.

use std::sync::mpsc::Sender;

use esp_idf_hal::delay::BLOCK;
use esp_idf_hal::uart::{UartRxDriver, UartTxDriver};

use wakewatch::config::LINK_LINE_MAX;
use wakewatch::events::{AppEvent, Message, MessageKey};
use wakewatch::link::{self, LinkError};

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

pub struct LinkSender {
    tx: UartTxDriver<'static>,
}

impl LinkSender {
    pub fn new(tx: UartTxDriver<'static>) -> Self {
        Self { tx }
    }

    /// Fire-and-forget send. Failures are logged, never retried.
    pub fn send(&mut self, msg: Message) {
        let line = link::encode(msg);
        let mut bytes = line.as_bytes();
        while !bytes.is_empty() {
            match self.tx.write(bytes) {
                Ok(0) | Err(_) => {
                    log::error!("{} ({:?})", LinkError::SendFailed, msg.key);
                    return;
                }
                Ok(n) => bytes = &bytes[n..],
            }
        }
        log::debug!("Sent {:?} = {}", msg.key, msg.value);
    }
}

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

pub fn link_task(rx: UartRxDriver<'static>, app_tx: Sender<AppEvent>) {
    log::info!("Link task started");

    let mut line = String::new();
    let mut overflowed = false;
    let mut byte = [0u8; 1];

    loop {
        match rx.read(&mut byte, BLOCK) {
            Ok(1) if byte[0] == b'\n' => {
                let event = if overflowed {
                    // Overlong garbage: the whole line is discarded.
                    log::error!("{}", LinkError::Dropped);
                    None
                } else {
                    handle_line(&line)
                };
                line.clear();
                overflowed = false;
                if let Some(event) = event {
                    if app_tx.send(event).is_err() {
                        log::warn!("App channel closed — exiting link task");
                        return;
                    }
                }
            }
            Ok(1) => {
                if line.len() < LINK_LINE_MAX {
                    line.push(byte[0] as char);
                } else {
                    overflowed = true;
                }
            }
            Ok(_) => {}
            Err(e) => {
                log::warn!("UART read error: {}", e);
            }
        }
    }
}

/// Decode one inbound line. Only sleep status replies become app events.
fn handle_line(line: &str) -> Option<AppEvent> {
    if line.trim().is_empty() {
        return None;
    }
    match link::decode(line) {
        Ok(Message {
            key: MessageKey::Asleep,
            value,
        }) => Some(AppEvent::Reply { asleep: value != 0 }),
        Ok(msg) => {
            // Confirmations are outbound-only; inbound copies are noise.
            log::error!("{}", LinkError::UnrecognizedKey(msg.key.code()));
            None
        }
        Err(e) => {
            log::error!("{}", e);
            None
        }
    }
}
