//! Client connection and interactive loop
//!
//! Connects to the server, sends fixed-width command frames, and receives
//! length-prefixed responses. The interactive loop validates input length
//! locally before any network I/O and re-prompts on bad input.

use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::TcpStream;

use crate::error::{CmdLinkError, Result};
use crate::protocol::{read_response, write_command, Command, CommandFrame};

/// Client side of a command session
pub struct Client {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,
}

impl Client {
    /// Connect to the server at the given address
    pub fn connect(addr: &str) -> Result<Self> {
        tracing::info!("trying to connect to server at {addr}");
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        tracing::info!("established connection with server");

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
        })
    }

    /// Send one command frame
    pub fn send(&mut self, frame: &CommandFrame) -> Result<()> {
        write_command(&mut self.writer, frame)
    }

    /// Receive one response frame; `None` means the server closed the
    /// connection (or a frame arrived short, which is treated the same)
    pub fn receive(&mut self) -> Result<Option<String>> {
        read_response(&mut self.reader)
    }

    /// Send a command and wait for its response
    pub fn request(&mut self, frame: &CommandFrame) -> Result<Option<String>> {
        self.send(frame)?;
        self.receive()
    }
}

/// Run the interactive loop: read commands from `input`, write responses
/// to `output`, until EXIT, end of input, or a connection failure.
///
/// Input that is not exactly 4 characters is rejected locally and never
/// touches the network. After sending EXIT no response frame is expected;
/// the loop terminates cleanly. On end of input, one best-effort EXIT
/// notification is sent before terminating.
pub fn run_interactive<I, O>(client: &mut Client, mut input: I, mut output: O) -> Result<()>
where
    I: BufRead,
    O: Write,
{
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input: best-effort EXIT so the server can end the
            // session promptly rather than waiting on a dead peer.
            let _ = client.send(&CommandFrame::from_wire(*b"EXIT"));
            tracing::info!("input closed, terminating client");
            return Ok(());
        }

        let frame = match CommandFrame::from_input(&line) {
            Ok(frame) => frame,
            Err(CmdLinkError::InvalidCommand(reason)) => {
                tracing::debug!("rejected local input: {reason}");
                writeln!(output, "Command must be 4 characters long!")?;
                continue;
            }
            Err(e) => return Err(e),
        };

        tracing::debug!("user entered: {frame}");

        if let Err(e) = client.send(&frame) {
            writeln!(output, "error! couldn't send data to server!")?;
            return Err(e);
        }

        if Command::from(frame).is_exit() {
            // The server sends no response frame for EXIT.
            tracing::info!("user requested disconnect");
            return Ok(());
        }

        match client.receive() {
            Ok(Some(response)) => {
                tracing::debug!("the server responded with {response}");
                writeln!(output, "{response}")?;
                output.flush()?;
            }
            Ok(None) => {
                writeln!(output, "error while receiving response from server!")?;
                return Ok(());
            }
            Err(e) => {
                writeln!(output, "error while receiving response from server!")?;
                return Err(e);
            }
        }
    }
}
