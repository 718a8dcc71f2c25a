//! FILENAME: core/runtime/src/lib.rs
//! PURPOSE: Library root for the shared application runtime.
//! CONTEXT: Both Salute programs bootstrap through this crate: the
//! windowed build layers Tauri on top of it, the headless build uses it
//! directly. It owns the application context, the unified logging
//! facility, and the headless run loop.

pub mod context;
pub mod lifecycle;
pub mod logging;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use context::{emit_banner, AppContext, FrameworkInfo, Variant, VersionInfo};
pub use lifecycle::{QuitHandle, RunLoop};
pub use logging::{default_log_path, init_log_file, next_seq, write_log};

/// Version of the runtime crate itself. The headless program reports this
/// as its framework version, since this crate is the framework layer a
/// console build runs on.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
