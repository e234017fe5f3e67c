//! Error types for CmdLink
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CmdLinkError
pub type Result<T> = std::result::Result<T, CmdLinkError>;

/// Unified error type for CmdLink operations
#[derive(Debug, Error)]
pub enum CmdLinkError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Local input that is not a valid command frame. Recovered on the
    /// client by re-prompting; never transmitted.
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
