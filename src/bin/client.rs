//! CmdLink Client Binary
//!
//! Interactive client for the command server: reads commands from stdin,
//! prints responses to stdout.

use std::fs::{create_dir_all, OpenOptions};
use std::io::{stdin, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use cmdlink::network::{run_interactive, Client};
use cmdlink::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// CmdLink Client
#[derive(Parser, Debug)]
#[command(name = "cmdlink-client")]
#[command(about = "Interactive client for the CmdLink command server")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:17207")]
    server: String,

    /// Diagnostic log file (append-only)
    #[arg(long, default_value = "log/client.log")]
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

    let config = Config::builder().server_addr(&args.server).build();

    let mut client = match Client::connect(&config.server_addr) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("error in communication with server: {e}");
            eprintln!("couldn't connect to server at {}: {e}", config.server_addr);
            std::process::exit(1);
        }
    };

    let result = run_interactive(&mut client, stdin().lock(), stdout());

    println!("client disconnected");
    tracing::info!("terminated client");

    if let Err(e) = result {
        tracing::error!("error in communication with server: {e}");
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
