//! CmdLink Server Binary
//!
//! Starts the TCP command server.

use std::fs::{create_dir_all, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use cmdlink::network::Server;
use cmdlink::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// CmdLink Server
#[derive(Parser, Debug)]
#[command(name = "cmdlink-server")]
#[command(about = "Minimal TCP command server (NAME/TIME/RAND/EXIT)")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:17207")]
    listen: String,

    /// Name string returned for the NAME command
    #[arg(short, long, default_value = "CmdLink Command Server")]
    name: String,

    /// Accept backlog depth (the server serves one peer at a time)
    #[arg(short, long, default_value = "1")]
    backlog: i32,

    /// Diagnostic log file (append-only)
    #[arg(long, default_value = "log/server.log")]
    log_file: PathBuf,

    /// Log to stderr instead of the log file
    #[arg(long)]
    log_stderr: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_file, args.log_stderr) {
        eprintln!("failed to open log file {}: {e}", args.log_file.display());
        std::process::exit(1);
    }

    tracing::info!("CmdLink Server v{}", cmdlink::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let config = Config::builder()
        .listen_addr(&args.listen)
        .server_name(&args.name)
        .accept_backlog(args.backlog)
        .build();

    let server = match Server::bind(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to bind listener: {e}");
            eprintln!("failed to bind listener: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing output: append-only file by default, stderr on demand
fn init_logging(log_file: &Path, to_stderr: bool) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cmdlink=debug"));

    if to_stderr {
        fmt().with_env_filter(filter).with_target(true).init();
        return Ok(());
    }

    if let Some(dir) = log_file.parent() {
        if !dir.as_os_str().is_empty() {
            create_dir_all(dir)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}
