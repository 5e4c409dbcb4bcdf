use super::constants::{STATUS_BUTTON, STATUS_CONTROL, STATUS_NOTE, STATUS_NOTE_OFF};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MidiCategory {
    Note,
    Button,
    NoteOff,
    Control,
    Other(u8),
}

impl MidiCategory {
    #[inline]
    pub fn from_status(status: u8) -> Self {
        match status {
            STATUS_NOTE => MidiCategory::Note,
            STATUS_BUTTON => MidiCategory::Button,
            STATUS_NOTE_OFF => MidiCategory::NoteOff,
            STATUS_CONTROL => MidiCategory::Control,
            other => MidiCategory::Other(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MidiMessage {
    pub category: MidiCategory,
    pub code: u8,
    pub value: u8,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MidiError {
    #[error("empty MIDI message")]
    Empty,
    #[error("MIDI message with status {status} needs {expected} bytes, got {got}")]
    Truncated {
        status: u8,
        expected: usize,
        got: usize,
    },
}

impl MidiMessage {
    /// Decode a raw `[status, data1, data2]` message.
    ///
    /// Button presses only need the code byte; control values need all three.
    /// Ignored categories decode with whatever bytes are present.
    pub fn parse(bytes: &[u8]) -> Result<Self, MidiError> {
        let status = *bytes.first().ok_or(MidiError::Empty)?;
        let category = MidiCategory::from_status(status);
        let expected = match category {
            MidiCategory::Button => 2,
            MidiCategory::Control => 3,
            _ => 1,
        };
        if bytes.len() < expected {
            return Err(MidiError::Truncated {
                status,
                expected,
                got: bytes.len(),
            });
        }
        Ok(Self {
            category,
            code: bytes.get(1).copied().unwrap_or(0),
            value: bytes.get(2).copied().unwrap_or(0),
        })
    }
}
