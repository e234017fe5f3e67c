//! Command dispatcher
//!
//! Interprets a delivered command frame and yields the response text.
//! Dispatch is synchronous and holds no state across invocations; only
//! TIME's clock read and RAND's draw are non-pure.

use chrono::Local;
use rand::Rng;

use crate::protocol::Command;

/// Fixed error message returned for unrecognized commands
pub const UNRECOGNIZED_MSG: &str =
    "Error! Please enter a valid command: |NAME|TIME|RAND|EXIT|";

/// What the session loop should do after executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Send this text back as a response frame
    Reply(String),

    /// End the session. No response frame is sent.
    Disconnect,
}

/// Executes commands against the fixed command set
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Name string returned for NAME
    server_name: String,
}

impl Dispatcher {
    /// Create a dispatcher with the given server name
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
        }
    }

    /// Execute one command and return the outcome.
    ///
    /// The transport guarantees the frame is well-formed 4-byte input, so
    /// every frame maps to exactly one arm here.
    pub fn execute(&self, command: Command) -> Outcome {
        match command {
            Command::Name => Outcome::Reply(self.server_name.clone()),
            Command::Time => Outcome::Reply(current_time()),
            Command::Rand => Outcome::Reply(random_int().to_string()),
            Command::Exit => Outcome::Disconnect,
            Command::Unknown(frame) => {
                tracing::info!("command {} is not recognised", frame);
                Outcome::Reply(UNRECOGNIZED_MSG.to_string())
            }
        }
    }
}

/// Current wall-clock time as HH:MM:SS (24-hour, zero-padded)
fn current_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// One uniform draw from [1,10] inclusive
fn random_int() -> u32 {
    rand::thread_rng().gen_range(1..=10)
}
