//! Connection Handler
//!
//! Handles one client session: receive a command frame, dispatch it, send
//! the response, repeat until the peer disconnects or asks to exit. The
//! socket closes on every exit path when the handler is dropped.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;

use crate::dispatch::{Dispatcher, Outcome};
use crate::error::Result;
use crate::protocol::{read_command, write_response};

/// Handles a single client session
pub struct Connection<'a> {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Command executor
    dispatcher: &'a Dispatcher,

    /// Peer address, used only for logging
    peer_addr: String,
}

impl<'a> Connection<'a> {
    /// Create a new session handler over an accepted stream
    pub fn new(stream: TcpStream, dispatcher: &'a Dispatcher) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            dispatcher,
            peer_addr,
        })
    }

    /// Handle the session (blocking until it ends)
    ///
    /// Returns when the peer disconnects, sends EXIT, or an I/O error
    /// occurs. A peer that closes mid-frame ends the session exactly like
    /// a clean disconnect.
    pub fn handle(&mut self) -> Result<()> {
        loop {
            let command = match read_command(&mut self.reader) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => {
                    tracing::debug!("client {} disconnected", self.peer_addr);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("error reading from {}: {e}", self.peer_addr);
                    return Err(e);
                }
            };

            tracing::info!("client {} entered: {:?}", self.peer_addr, command);

            match self.dispatcher.execute(command) {
                Outcome::Reply(text) => {
                    tracing::debug!("sending {}: {text}", self.peer_addr);
                    if let Err(e) = write_response(&mut self.writer, &text) {
                        tracing::warn!("error writing to {}: {e}", self.peer_addr);
                        return Err(e);
                    }
                }
                Outcome::Disconnect => {
                    // EXIT: no response frame is sent.
                    tracing::info!("client {} wants to disconnect", self.peer_addr);
                    return Ok(());
                }
            }
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
