//! FILENAME: app/headless/src/main.rs
// PURPOSE: Console entry point for the headless program.

use anyhow::{Context, Result};
use runtime::{emit_banner, logging, AppContext, RunLoop};

#[tokio::main]
async fn main() -> Result<()> {
    match logging::init_log_file(&logging::default_log_path("salute-core")) {
        Ok(path) => {
            eprintln!("[LOG_INIT] SUCCESS - Log file: {:?}", path);
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }

    let ctx = AppContext::headless(env!("CARGO_PKG_VERSION"));
    emit_banner(&ctx);

    // Block here until a quit event is posted or Ctrl-C arrives, then
    // propagate the loop's exit code as the process exit status.
    let run_loop = RunLoop::new();
    let code = run_loop.run().await.context("event loop failed")?;

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
