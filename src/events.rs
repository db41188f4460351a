// WakeWatch — System Events & Data Types

// ---------------------------------------------------------------------------
// Motion Data (accelerometer reading from MPU6050, raw counts)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

// ---------------------------------------------------------------------------
// Display State — last known sleep status, as shown on the watch face
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    #[default]
    Normal,
    Alert,
}

impl DisplayState {
    /// Status line shown under the clock.
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Normal => "awake",
            Self::Alert => "WAKE UP!",
        }
    }
}

// ---------------------------------------------------------------------------
// Companion link messages — key-value pairs, both directions
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    /// Sleep status: outbound = query, inbound = reply (0 awake, nonzero asleep).
    Asleep,
    /// One-shot dismiss confirmation after a button press.
    ButtonPressed,
    /// One-shot confirmation after a detected head nod.
    NodConfirmed,
}

impl MessageKey {
    pub fn code(self) -> u8 {
        match self {
            Self::Asleep => 0,
            Self::ButtonPressed => 1,
            Self::NodConfirmed => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Asleep),
            1 => Some(Self::ButtonPressed),
            2 => Some(Self::NodConfirmed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub key: MessageKey,
    pub value: u8,
}

// ---------------------------------------------------------------------------
// App Events — everything the decision task reacts to, one channel
// ---------------------------------------------------------------------------
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Per-second clock tick with the current time of day.
    Tick { hours: u8, minutes: u8, seconds: u8 },
    /// Sleep status reply from the companion.
    Reply { asleep: bool },
    /// Any button was pressed.
    Dismiss,
    /// A full accelerometer sample window is ready.
    SampleWindow(Vec<MotionSample>),
}

// ---------------------------------------------------------------------------
// UI Events — sent to the UI task via channel
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy)]
pub enum UiEvent {
    /// Redraw the clock.
    UpdateTime { hours: u8, minutes: u8 },
    /// Sleep status changed.
    UpdateStatus(DisplayState),
    /// Start the wake vibration pattern.
    StartWake,
    /// Stop any in-progress wake vibration.
    CancelWake,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_key_codes_round_trip() {
        for key in [MessageKey::Asleep, MessageKey::ButtonPressed, MessageKey::NodConfirmed] {
            assert_eq!(MessageKey::from_code(key.code()), Some(key));
        }
        assert_eq!(MessageKey::from_code(3), None);
        assert_eq!(MessageKey::from_code(255), None);
    }
}
