//! Protocol codec
//!
//! Framing helpers for the wire protocol. Both directions guarantee
//! exact-length delivery despite the partial reads and writes inherent to
//! stream sockets: writes loop until every byte is out (`write_all`), reads
//! loop until the promised byte count is in (`read_exact`).
//!
//! ## Wire Format
//!
//! ### Command Frame (client -> server)
//! ```text
//! ┌────────────────────────┐
//! │   Command (4 ASCII)    │
//! └────────────────────────┘
//! ```
//!
//! ### Response Frame (server -> client)
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (2)  │         Payload             │
//! └──────────┴─────────────────────────────┘
//! ```
//!
//! ## Disconnect handling
//!
//! A peer that closes the stream before delivering a full frame is
//! indistinguishable from a clean disconnect, so the read helpers return
//! `Ok(None)` for both. Callers never see a partial frame: the result is
//! either the complete frame or `None`/error.

use std::io::{ErrorKind, Read, Write};

use crate::error::{CmdLinkError, Result};
use super::{Command, CommandFrame, COMMAND_LEN};

/// Size of the response length prefix: unsigned 16-bit big-endian
pub const LEN_PREFIX_LEN: usize = 2;

/// Maximum response payload size the 16-bit prefix can describe
pub const MAX_RESPONSE_LEN: usize = u16::MAX as usize;

// =============================================================================
// Command Frames (fixed width, no prefix)
// =============================================================================

/// Write a command frame to a stream
///
/// The 4 raw bytes are the whole frame. Any error during the write fails
/// the send as a whole.
pub fn write_command<W: Write>(writer: &mut W, frame: &CommandFrame) -> Result<()> {
    writer.write_all(frame.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Read a command frame from a stream
///
/// Blocks until exactly 4 bytes arrive, assembling from partial reads.
/// Returns `Ok(None)` if the peer closes before a full frame is delivered,
/// and folds the frame to uppercase on receipt.
pub fn read_command<R: Read>(reader: &mut R) -> Result<Option<Command>> {
    let mut buf = [0u8; COMMAND_LEN];
    if read_full(reader, &mut buf)? {
        Ok(Some(Command::from(CommandFrame::from_wire(buf))))
    } else {
        Ok(None)
    }
}

// =============================================================================
// Response Frames (u16 big-endian prefix + payload)
// =============================================================================

/// Encode a response payload to bytes
///
/// Format: payload_len (2, big-endian) + payload. Fails if the payload
/// exceeds what the 16-bit prefix can describe.
pub fn encode_response(text: &str) -> Result<Vec<u8>> {
    let payload = text.as_bytes();
    if payload.len() > MAX_RESPONSE_LEN {
        return Err(CmdLinkError::Protocol(format!(
            "response payload too large: {} bytes (max {})",
            payload.len(),
            MAX_RESPONSE_LEN
        )));
    }

    let mut message = Vec::with_capacity(LEN_PREFIX_LEN + payload.len());
    message.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    message.extend_from_slice(payload);
    Ok(message)
}

/// Decode a response from bytes
///
/// The buffer must hold the complete frame: prefix plus exactly the
/// promised payload length.
pub fn decode_response(bytes: &[u8]) -> Result<String> {
    if bytes.len() < LEN_PREFIX_LEN {
        return Err(CmdLinkError::Protocol(format!(
            "incomplete response prefix: expected {} bytes, got {}",
            LEN_PREFIX_LEN,
            bytes.len()
        )));
    }

    let payload_len = u16::from_be_bytes([bytes[0], bytes[1]]) as usize;
    let total_len = LEN_PREFIX_LEN + payload_len;
    if bytes.len() < total_len {
        return Err(CmdLinkError::Protocol(format!(
            "incomplete response payload: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }

    String::from_utf8(bytes[LEN_PREFIX_LEN..total_len].to_vec())
        .map_err(|e| CmdLinkError::Protocol(format!("response is not valid UTF-8: {e}")))
}

/// Write a response frame to a stream
///
/// Writes the length prefix in full, then the payload in full. Any error
/// in either phase fails the send as a whole, even if the prefix already
/// went out.
pub fn write_response<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    let bytes = encode_response(text)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Read a response frame from a stream
///
/// Reads exactly 2 prefix bytes, then exactly the promised payload length.
/// Returns `Ok(None)` if the peer closes at any point before the frame is
/// complete.
pub fn read_response<R: Read>(reader: &mut R) -> Result<Option<String>> {
    let mut prefix = [0u8; LEN_PREFIX_LEN];
    if !read_full(reader, &mut prefix)? {
        return Ok(None);
    }

    let payload_len = u16::from_be_bytes(prefix) as usize;
    let mut payload = vec![0u8; payload_len];
    if !read_full(reader, &mut payload)? {
        return Ok(None);
    }

    String::from_utf8(payload)
        .map(Some)
        .map_err(|e| CmdLinkError::Protocol(format!("response is not valid UTF-8: {e}")))
}

// =============================================================================
// Exact-length read helper
// =============================================================================

/// Fill `buf` completely from the stream.
///
/// Returns `Ok(false)` if the peer closed before `buf` was filled (a short
/// frame is treated the same as a clean disconnect) and propagates every
/// other socket error.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<bool> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(true),
        Err(ref e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}
