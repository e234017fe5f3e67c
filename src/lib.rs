//! # CmdLink
//!
//! A minimal TCP command server and interactive client:
//! - Fixed-width 4-byte command frames (client -> server)
//! - Length-prefixed text response frames (server -> client)
//! - Partial-read/partial-write safe framing over stream sockets
//! - Serial, single-peer session handling
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Interactive Client                        │
//! │            (stdin commands / stdout responses)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  4-byte command frame
//!                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Framed Transport                          │
//! │       (exact-length send/receive over TCP stream)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Command Dispatcher                          │
//! │            (NAME / TIME / RAND / EXIT / other)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  u16-prefixed response frame
//!                       ▼
//!                 back to the client
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod dispatch;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CmdLinkError, Result};
pub use config::Config;
pub use dispatch::{Dispatcher, Outcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of CmdLink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
