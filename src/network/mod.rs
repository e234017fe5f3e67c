//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single-threaded, blocking I/O on both sides
//! - Serial session handling: one accepted peer at a time
//! - Commands routed through the Dispatcher

mod server;
mod connection;
mod client;

pub use server::Server;
pub use connection::Connection;
pub use client::{run_interactive, Client};
