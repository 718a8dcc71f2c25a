//! FILENAME: app/src-tauri/src/commands.rs
// PURPOSE: Invoke surface for the frontend: greeting, version report, log bridge.

use runtime::{AppContext, VersionInfo};
use tauri::State;

/// Greeting line shown by the frontend.
#[tauri::command]
pub fn greeting(ctx: State<'_, AppContext>) -> String {
    ctx.greeting().to_string()
}

/// App and framework versions for the about view.
#[tauri::command]
pub fn version_info(ctx: State<'_, AppContext>) -> VersionInfo {
    ctx.version_info()
}

/// Write a frontend log message (already formatted with seq)
#[tauri::command]
pub fn log_frontend(message: String) -> Result<(), String> {
    runtime::logging::write_log_raw(&message);
    Ok(())
}

/// Get next sequence number for frontend logging
#[tauri::command]
pub fn get_next_seq() -> u64 {
    runtime::next_seq()
}
