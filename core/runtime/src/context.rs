//! FILENAME: core/runtime/src/context.rs
// PURPOSE: Application context shared by the windowed and headless programs.

use serde::Serialize;

/// Which build of the application object this process is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Full windowed build (webview shell).
    Windowed,
    /// Console/service build without windowing subsystems.
    Headless,
}

/// Name and version of the framework layer a program is built on.
/// The version string comes from that framework's own build configuration.
#[derive(Debug, Clone, Serialize)]
pub struct FrameworkInfo {
    pub name: &'static str,
    pub version: &'static str,
}

/// Version report handed to the frontend by the `version_info` command.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub app_version: &'static str,
    pub framework: FrameworkInfo,
}

/// One running instance of the program.
///
/// Owns the argument vector exactly as the OS delivered it. Arguments are
/// captured for the framework layer and never inspected, validated, or
/// rejected here.
#[derive(Debug, Clone)]
pub struct AppContext {
    variant: Variant,
    app_version: &'static str,
    framework: FrameworkInfo,
    args: Vec<String>,
}

impl AppContext {
    /// Construct the windowed context from the process argument vector.
    pub fn windowed(app_version: &'static str, framework: FrameworkInfo) -> Self {
        Self::from_args(
            Variant::Windowed,
            app_version,
            framework,
            std::env::args().collect(),
        )
    }

    /// Construct the headless context from the process argument vector.
    /// The framework layer of a console build is the runtime crate itself.
    pub fn headless(app_version: &'static str) -> Self {
        Self::from_args(
            Variant::Headless,
            app_version,
            FrameworkInfo {
                name: "Salute runtime",
                version: crate::VERSION,
            },
            std::env::args().collect(),
        )
    }

    /// Construct from an explicit argument vector.
    pub fn from_args(
        variant: Variant,
        app_version: &'static str,
        framework: FrameworkInfo,
        args: Vec<String>,
    ) -> Self {
        AppContext {
            variant,
            app_version,
            framework,
            args,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn framework(&self) -> &FrameworkInfo {
        &self.framework
    }

    /// The argument vector as delivered by the OS, untouched.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The hardcoded greeting line for this build variant.
    pub fn greeting(&self) -> &'static str {
        match self.variant {
            Variant::Windowed => "Hello, World from Salute GUI!",
            Variant::Headless => "Hello, World from Salute core!",
        }
    }

    /// The framework version line, e.g. `Tauri version: 2.1.0`.
    pub fn version_line(&self) -> String {
        format!("{} version: {}", self.framework.name, self.framework.version)
    }

    pub fn version_info(&self) -> VersionInfo {
        VersionInfo {
            app_version: self.app_version,
            framework: self.framework.clone(),
        }
    }
}

/// Write the two startup banner lines through the unified logging
/// facility: the greeting first, then the framework version line.
pub fn emit_banner(ctx: &AppContext) {
    crate::log_info!("SYS", "{}", ctx.greeting());
    crate::log_info!("SYS", "{}", ctx.version_line());
}
