//! Configuration for CmdLink
//!
//! Centralized configuration with sensible defaults. The defaults reproduce
//! the fixed endpoints the protocol documents: the server listens on
//! 0.0.0.0:17207 and the client connects to 127.0.0.1:17207.

/// Default port for the command protocol
pub const DEFAULT_PORT: u16 = 17207;

/// Main configuration for a CmdLink process
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address (server side)
    pub listen_addr: String,

    /// Server address to connect to (client side)
    pub server_addr: String,

    /// Accept backlog depth. The session loop serves one peer at a time;
    /// a second peer waits in this OS queue until the current session ends.
    pub accept_backlog: i32,

    // -------------------------------------------------------------------------
    // Dispatcher Configuration
    // -------------------------------------------------------------------------
    /// Name string returned for the NAME command
    pub server_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            server_addr: format!("127.0.0.1:{DEFAULT_PORT}"),
            accept_backlog: 1,
            server_name: "CmdLink Command Server".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the server address to connect to
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the accept backlog depth
    pub fn accept_backlog(mut self, depth: i32) -> Self {
        self.config.accept_backlog = depth;
        self
    }

    /// Set the name string returned for NAME
    pub fn server_name(mut self, name: impl Into<String>) -> Self {
        self.config.server_name = name.into();
        self
    }

    /// Finalize the builder into a Config
    pub fn build(self) -> Config {
        self.config
    }
}
