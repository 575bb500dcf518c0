// ABOUTME: Entry point for the dockview CLI application.
// ABOUTME: Connects to the local runtime and prints the four report sections.

mod cli;

use clap::Parser;
use cli::Cli;
use dockview::error::{Error, Result};
use dockview::report;
use dockview::runtime;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse();

    // stdout carries the report, so diagnostics go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        if let Error::Runtime(runtime_err) = &e
            && let Some(hint) = runtime_err.hint()
        {
            eprintln!("Hint: {hint}");
        }
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let runtime = runtime::connect_local()?;
    tracing::debug!(runtime = %runtime.runtime_type(), "connected");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = report::render_all(&runtime, &mut out).await;
    // Flush whatever sections made it out before reporting a failure.
    out.flush()?;
    result
}
