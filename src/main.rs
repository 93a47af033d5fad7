mod calc;
mod error;
mod export;
mod import;
mod ipc;
mod model;
mod session;
mod store;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

/// Sidecar that keeps one evaluation session in memory and answers
/// newline-delimited JSON requests on stdin.
#[derive(Debug, Parser)]
#[command(name = "evalbookd", version)]
struct Args {
    /// Tracing filter directive, e.g. `info` or `evalbookd=debug`.
    /// Falls back to RUST_LOG, then `warn`.
    #[arg(long)]
    log_level: Option<String>,

    /// Directory `export.csv` writes evaluations.csv into when a request
    /// gives no explicit path.
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(l) => tracing_subscriber::EnvFilter::new(l),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    };
    // stdout carries IPC frames only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "evalbookd started");

    let mut state = ipc::AppState::new(args.export_dir);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut frame: Vec<u8> = Vec::new();

    loop {
        frame.clear();
        // Raw bytes: a frame with invalid UTF-8 must still get a bad_json reply.
        match input.read_until(b'\n', &mut frame) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::error!(error = %e, "stdin read failed");
                break;
            }
        }
        if frame.iter().all(|b| b.is_ascii_whitespace()) {
            continue;
        }

        let req: ipc::Request = match serde_json::from_slice(&frame) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply without id.
                tracing::warn!(error = %e, "bad request line");
                let resp = serde_json::json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() }
                });
                let _ = writeln!(stdout, "{resp}");
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
    tracing::info!("evalbookd exiting");
}
