//! Codec Tests
//!
//! Tests for command-frame and response-frame encoding/decoding and the
//! exact-length stream helpers.

use std::io::Cursor;

use cmdlink::error::CmdLinkError;
use cmdlink::protocol::{
    decode_response, encode_response, read_command, read_response, write_command,
    write_response, Command, CommandFrame, COMMAND_LEN, LEN_PREFIX_LEN, MAX_RESPONSE_LEN,
};

// =============================================================================
// Command Frame Tests
// =============================================================================

#[test]
fn test_command_frame_from_input_uppercases() {
    let frame = CommandFrame::from_input("name").unwrap();
    assert_eq!(frame.as_bytes(), b"NAME");
}

#[test]
fn test_command_frame_from_input_trims_line_ending() {
    let frame = CommandFrame::from_input("time\r\n").unwrap();
    assert_eq!(frame.as_bytes(), b"TIME");
}

#[test]
fn test_command_frame_rejects_short_input() {
    let err = CommandFrame::from_input("abc").unwrap_err();
    assert!(matches!(err, CmdLinkError::InvalidCommand(_)));
}

#[test]
fn test_command_frame_rejects_long_input() {
    let err = CommandFrame::from_input("hello").unwrap_err();
    assert!(matches!(err, CmdLinkError::InvalidCommand(_)));
}

#[test]
fn test_command_frame_from_wire_normalizes_case() {
    let frame = CommandFrame::from_wire(*b"rAnD");
    assert_eq!(frame.as_bytes(), b"RAND");
}

#[test]
fn test_command_parsing_covers_fixed_set() {
    assert_eq!(Command::from(CommandFrame::from_wire(*b"NAME")), Command::Name);
    assert_eq!(Command::from(CommandFrame::from_wire(*b"TIME")), Command::Time);
    assert_eq!(Command::from(CommandFrame::from_wire(*b"RAND")), Command::Rand);
    assert_eq!(Command::from(CommandFrame::from_wire(*b"EXIT")), Command::Exit);

    let frame = CommandFrame::from_wire(*b"FOOO");
    assert_eq!(Command::from(frame), Command::Unknown(frame));
}

#[test]
fn test_write_command_emits_exactly_four_bytes_no_prefix() {
    let frame = CommandFrame::from_input("NAME").unwrap();
    let mut buf = Vec::new();
    write_command(&mut buf, &frame).unwrap();
    assert_eq!(buf, b"NAME");
    assert_eq!(buf.len(), COMMAND_LEN);
}

#[test]
fn test_read_command_complete_frame() {
    let mut stream = Cursor::new(b"exit".to_vec());
    let cmd = read_command(&mut stream).unwrap();
    assert_eq!(cmd, Some(Command::Exit));
}

#[test]
fn test_read_command_short_frame_reports_no_message() {
    // Peer closed after 2 of the expected 4 bytes: indistinguishable from
    // a clean disconnect, never a partial frame.
    let mut stream = Cursor::new(b"NA".to_vec());
    assert_eq!(read_command(&mut stream).unwrap(), None);
}

#[test]
fn test_read_command_immediate_close() {
    let mut stream = Cursor::new(Vec::new());
    assert_eq!(read_command(&mut stream).unwrap(), None);
}

// =============================================================================
// Response Frame Tests
// =============================================================================

#[test]
fn test_encode_response_layout() {
    let bytes = encode_response("hi").unwrap();
    assert_eq!(bytes, vec![0x00, 0x02, b'h', b'i']);
}

#[test]
fn test_response_round_trip() {
    let text = "Hello, Welcome to My Server.";
    let encoded = encode_response(text).unwrap();
    assert_eq!(decode_response(&encoded).unwrap(), text);
}

#[test]
fn test_response_round_trip_empty_payload() {
    let encoded = encode_response("").unwrap();
    assert_eq!(encoded.len(), LEN_PREFIX_LEN);
    assert_eq!(decode_response(&encoded).unwrap(), "");
}

#[test]
fn test_response_round_trip_max_payload() {
    let text = "x".repeat(MAX_RESPONSE_LEN);
    let encoded = encode_response(&text).unwrap();
    assert_eq!(encoded.len(), LEN_PREFIX_LEN + MAX_RESPONSE_LEN);
    assert_eq!(decode_response(&encoded).unwrap(), text);
}

#[test]
fn test_encode_response_rejects_oversize_payload() {
    let text = "x".repeat(MAX_RESPONSE_LEN + 1);
    let err = encode_response(&text).unwrap_err();
    assert!(matches!(err, CmdLinkError::Protocol(_)));
}

#[test]
fn test_decode_response_rejects_short_prefix() {
    let err = decode_response(&[0x00]).unwrap_err();
    assert!(matches!(err, CmdLinkError::Protocol(_)));
}

#[test]
fn test_decode_response_rejects_truncated_payload() {
    // Prefix promises 5 bytes, only 3 present.
    let err = decode_response(&[0x00, 0x05, b'a', b'b', b'c']).unwrap_err();
    assert!(matches!(err, CmdLinkError::Protocol(_)));
}

#[test]
fn test_write_then_read_response_stream() {
    let mut buf = Vec::new();
    write_response(&mut buf, "12:34:56").unwrap();

    let mut stream = Cursor::new(buf);
    assert_eq!(read_response(&mut stream).unwrap(), Some("12:34:56".to_string()));
}

#[test]
fn test_read_response_closed_before_prefix() {
    let mut stream = Cursor::new(vec![0x00]);
    assert_eq!(read_response(&mut stream).unwrap(), None);
}

#[test]
fn test_read_response_closed_mid_payload() {
    // Prefix promises 4 bytes, peer closes after 2.
    let mut stream = Cursor::new(vec![0x00, 0x04, b'h', b'i']);
    assert_eq!(read_response(&mut stream).unwrap(), None);
}

#[test]
fn test_read_response_back_to_back_frames() {
    let mut buf = Vec::new();
    write_response(&mut buf, "first").unwrap();
    write_response(&mut buf, "second").unwrap();

    let mut stream = Cursor::new(buf);
    assert_eq!(read_response(&mut stream).unwrap(), Some("first".to_string()));
    assert_eq!(read_response(&mut stream).unwrap(), Some("second".to_string()));
    assert_eq!(read_response(&mut stream).unwrap(), None);
}
