//! FILENAME: app/src-tauri/src/main.rs
// PURPOSE: Desktop entry point for the windowed program.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    app_lib::run();
}
