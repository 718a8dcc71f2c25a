//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri bridge) for the windowed program.

use runtime::{emit_banner, logging, AppContext, FrameworkInfo};

pub mod commands;


/// Framework info for the windowed build. Tauri supplies the version
/// string from its own build configuration.
pub fn framework_info() -> FrameworkInfo {
    FrameworkInfo {
        name: "Tauri",
        version: tauri::VERSION,
    }
}

/// Build the windowed application context from the process arguments.
pub fn create_app_context() -> AppContext {
    AppContext::windowed(env!("CARGO_PKG_VERSION"), framework_info())
}

pub fn run() {
    match logging::init_log_file(&logging::default_log_path("salute-gui")) {
        Ok(path) => {
            eprintln!("[LOG_INIT] SUCCESS - Log file: {:?}", path);
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }

    let ctx = create_app_context();
    emit_banner(&ctx);

    // Control transfers to the framework's event loop here and does not
    // return; Tauri owns the process exit status from this point.
    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .manage(ctx)
        .invoke_handler(tauri::generate_handler![
            commands::greeting,
            commands::version_info,
            // Logging commands
            commands::log_frontend,
            commands::get_next_seq,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
