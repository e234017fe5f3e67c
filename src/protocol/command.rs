//! Command definitions
//!
//! The validated fixed-width command frame and the parsed command set.

use std::fmt;

use crate::error::{CmdLinkError, Result};

/// Width of a command frame in bytes. The fixed width is the framing
/// mechanism; command frames carry no length prefix.
pub const COMMAND_LEN: usize = 4;

/// A validated 4-byte command frame, folded to uppercase ASCII.
///
/// Construction is the only place frame width is enforced: user input goes
/// through [`CommandFrame::from_input`] before any network I/O, and bytes off
/// the wire go through [`CommandFrame::from_wire`] after an exact-length read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame([u8; COMMAND_LEN]);

impl CommandFrame {
    /// Build a frame from local user input.
    ///
    /// Rejects input whose length is not exactly 4 characters; the caller
    /// recovers locally (re-prompt) and the input never reaches the network.
    pub fn from_input(input: &str) -> Result<Self> {
        let trimmed = input.trim_end_matches(['\r', '\n']);
        let bytes = trimmed.as_bytes();
        if bytes.len() != COMMAND_LEN {
            return Err(CmdLinkError::InvalidCommand(format!(
                "command must be {} characters long, got {}",
                COMMAND_LEN,
                bytes.len()
            )));
        }

        let mut frame = [0u8; COMMAND_LEN];
        frame.copy_from_slice(bytes);
        frame.make_ascii_uppercase();
        Ok(Self(frame))
    }

    /// Build a frame from exactly 4 bytes received off the wire,
    /// normalizing to uppercase on receipt.
    pub fn from_wire(mut bytes: [u8; COMMAND_LEN]) -> Self {
        bytes.make_ascii_uppercase();
        Self(bytes)
    }

    /// The canonical uppercase bytes of the frame
    pub fn as_bytes(&self) -> &[u8; COMMAND_LEN] {
        &self.0
    }
}

impl fmt::Display for CommandFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// A parsed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request the server's configured name
    Name,

    /// Request the current time (HH:MM:SS)
    Time,

    /// Request a uniform random integer in [1,10]
    Rand,

    /// End the session; the server sends no response frame
    Exit,

    /// Any other well-formed 4-byte frame
    Unknown(CommandFrame),
}

impl From<CommandFrame> for Command {
    fn from(frame: CommandFrame) -> Self {
        match frame.as_bytes() {
            b"NAME" => Command::Name,
            b"TIME" => Command::Time,
            b"RAND" => Command::Rand,
            b"EXIT" => Command::Exit,
            _ => Command::Unknown(frame),
        }
    }
}

impl Command {
    /// Whether this command ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }
}
