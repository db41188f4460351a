// WakeWatch — Companion Link Codec
//
// The companion link carries one message per line: ASCII "<key> <value>\n"
// with both fields small unsigned integers. Framing, delivery, and retries
// are the transport's problem; every failure here is non-fatal and handled
// by logging at the call site.

use std::fmt;

use crate::events::{Message, MessageKey};

/// Flat error taxonomy for the link. Nothing here is fatal and nothing
/// triggers a retry — the next 10 s poll self-heals any gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// Inbound line was malformed and had to be discarded.
    Dropped,
    /// Outbound write did not complete.
    SendFailed,
    /// Inbound key is not one we know.
    UnrecognizedKey(u8),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dropped => write!(f, "inbound message dropped"),
            Self::SendFailed => write!(f, "outbound send failed"),
            Self::UnrecognizedKey(code) => write!(f, "key {} not recognized", code),
        }
    }
}

impl std::error::Error for LinkError {}

/// Render a message as one wire line, trailing newline included.
pub fn encode(msg: Message) -> String {
    format!("{} {}\n", msg.key.code(), msg.value)
}

/// Parse one wire line (newline optional) into a message.
pub fn decode(line: &str) -> Result<Message, LinkError> {
    let mut fields = line.trim().split_ascii_whitespace();
    let key_code: u8 = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or(LinkError::Dropped)?;
    let value: u8 = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or(LinkError::Dropped)?;
    if fields.next().is_some() {
        return Err(LinkError::Dropped);
    }

    let key = MessageKey::from_code(key_code).ok_or(LinkError::UnrecognizedKey(key_code))?;
    Ok(Message { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_key_and_value() {
        let msg = Message {
            key: MessageKey::Asleep,
            value: 5,
        };
        assert_eq!(encode(msg), "0 5\n");
    }

    #[test]
    fn decodes_what_it_encodes() {
        for key in [MessageKey::Asleep, MessageKey::ButtonPressed, MessageKey::NodConfirmed] {
            let msg = Message { key, value: 1 };
            assert_eq!(decode(&encode(msg)), Ok(msg));
        }
    }

    #[test]
    fn decodes_sleep_reply_values() {
        assert_eq!(
            decode("0 0"),
            Ok(Message {
                key: MessageKey::Asleep,
                value: 0
            })
        );
        assert_eq!(
            decode("0 1\r\n"),
            Ok(Message {
                key: MessageKey::Asleep,
                value: 1
            })
        );
    }

    #[test]
    fn unknown_key_is_reported_with_its_code() {
        assert_eq!(decode("9 5"), Err(LinkError::UnrecognizedKey(9)));
    }

    #[test]
    fn malformed_lines_are_dropped() {
        for line in ["", "   ", "0", "x y", "0 nope", "0 5 extra", "-1 5", "300 5"] {
            assert_eq!(decode(line), Err(LinkError::Dropped), "line: {:?}", line);
        }
    }
}
