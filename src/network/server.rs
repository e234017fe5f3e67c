//! TCP Server
//!
//! Owns the listening socket and runs the serial session loop: accept one
//! connection, serve it to completion, return to accept. A second peer
//! waits in the OS accept backlog until the current session ends. The
//! listening socket closes only on process shutdown; no session failure
//! ever affects it.

use std::net::{SocketAddr, TcpListener};

use socket2::{Domain, Protocol, Socket, Type};

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::error::{CmdLinkError, Result};
use crate::network::Connection;

/// TCP server for CmdLink
pub struct Server {
    listener: TcpListener,
    dispatcher: Dispatcher,
}

impl Server {
    /// Bind the listening socket described by the config.
    ///
    /// Built through socket2 so the accept backlog depth is explicit
    /// (std's `TcpListener::bind` hides it).
    pub fn bind(config: Config) -> Result<Self> {
        let addr: SocketAddr = config.listen_addr.parse().map_err(|e| {
            CmdLinkError::Config(format!("invalid listen address {:?}: {e}", config.listen_addr))
        })?;

        let socket = Socket::new(
            match addr {
                SocketAddr::V4(_) => Domain::IPV4,
                SocketAddr::V6(_) => Domain::IPV6,
            },
            Type::STREAM,
            Some(Protocol::TCP),
        )?;
        socket.set_reuse_address(true)?;
        socket.bind(&addr.into())?;
        socket.listen(config.accept_backlog)?;

        let listener: TcpListener = socket.into();
        tracing::debug!("server is listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            dispatcher: Dispatcher::new(config.server_name),
        })
    }

    /// Address the server is actually listening on
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Run the session loop (blocking, never returns under normal operation)
    pub fn run(&self) -> Result<()> {
        loop {
            if let Err(e) = self.accept_one() {
                // One peer's failure never affects the listener or
                // future sessions.
                tracing::warn!("session ended with error: {e}");
            }
        }
    }

    /// Accept a single connection and serve the session to completion
    pub fn accept_one(&self) -> Result<()> {
        let (stream, peer) = self.listener.accept()?;
        tracing::info!("connection established with {peer}");

        let mut connection = Connection::new(stream, &self.dispatcher)?;
        let result = connection.handle();

        tracing::info!("terminated connection with {}", connection.peer_addr());
        result
    }
}
