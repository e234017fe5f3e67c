//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! Two frame types coexist, one per direction, and they deliberately use
//! different delimiting strategies. Neither side ever applies the other
//! side's framing.
//!
//! ## Command Frame (client -> server)
//!
//! Fixed width, no length prefix. The constant size is the delimiter.
//! ```text
//! ┌────────────────────────┐
//! │   Command (4 ASCII)    │
//! └────────────────────────┘
//! ```
//! Commands are case-insensitive on the wire; the receiver folds them to
//! uppercase before matching.
//!
//! ### Commands
//! - NAME - server returns its configured name string
//! - TIME - server returns the current time as HH:MM:SS
//! - RAND - server returns a uniform random integer in [1,10]
//! - EXIT - server closes the session; no response frame is sent
//! - any other 4 characters - server returns a fixed error message
//!
//! ## Response Frame (server -> client)
//!
//! Length-prefixed ASCII text.
//! ```text
//! ┌──────────┬─────────────────────────────┐
//! │ Len (2)  │         Payload             │
//! └──────────┴─────────────────────────────┘
//! ```
//! The prefix is an unsigned 16-bit big-endian integer equal to the exact
//! byte length of the payload (protocol ceiling: 65535 bytes).

mod command;
mod codec;

pub use command::{Command, CommandFrame, COMMAND_LEN};
pub use codec::{
    encode_response, decode_response,
    read_command, write_command,
    read_response, write_response,
    LEN_PREFIX_LEN, MAX_RESPONSE_LEN,
};
