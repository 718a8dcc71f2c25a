//! FILENAME: core/runtime/src/tests.rs
//! PURPOSE: Consolidated unit tests for the runtime crate.

use crate::context::{AppContext, FrameworkInfo, Variant};
use crate::lifecycle::RunLoop;
use crate::logging::next_seq;

fn test_framework() -> FrameworkInfo {
    FrameworkInfo {
        name: "Tauri",
        version: "2.1.0",
    }
}

fn windowed_context(args: Vec<String>) -> AppContext {
    AppContext::from_args(Variant::Windowed, "0.1.0", test_framework(), args)
}

// ========================================
// CONTEXT TESTS
// ========================================

#[test]
fn greeting_matches_variant() {
    let windowed = windowed_context(vec!["salute".to_string()]);
    let headless = AppContext::headless("0.1.0");

    assert_eq!(windowed.greeting(), "Hello, World from Salute GUI!");
    assert_eq!(headless.greeting(), "Hello, World from Salute core!");
    assert_ne!(windowed.greeting(), headless.greeting());
}

#[test]
fn version_line_names_framework_and_version() {
    let ctx = windowed_context(vec!["salute".to_string()]);
    assert_eq!(ctx.version_line(), "Tauri version: 2.1.0");
}

#[test]
fn headless_framework_is_the_runtime_crate() {
    let ctx = AppContext::headless("0.1.0");
    assert_eq!(ctx.variant(), Variant::Headless);
    assert_eq!(ctx.framework().name, "Salute runtime");
    assert_eq!(ctx.framework().version, crate::VERSION);
    assert!(ctx.version_line().contains(crate::VERSION));
}

#[test]
fn unrecognized_arguments_are_kept_untouched() {
    let args = vec![
        "salute".to_string(),
        "--no-such-flag".to_string(),
        "-x".to_string(),
        "positional junk".to_string(),
    ];
    let ctx = windowed_context(args.clone());
    // Construction must accept anything; the vector passes through as-is.
    assert_eq!(ctx.args(), args.as_slice());
}

#[test]
fn version_info_reports_app_and_framework() {
    let ctx = windowed_context(vec!["salute".to_string()]);
    let info = ctx.version_info();
    assert_eq!(info.app_version, "0.1.0");
    assert_eq!(info.framework.name, "Tauri");
    assert_eq!(info.framework.version, "2.1.0");
}

// ========================================
// LOGGING TESTS
// ========================================

#[test]
fn sequence_numbers_are_strictly_increasing() {
    let first = next_seq();
    let second = next_seq();
    let third = next_seq();
    assert!(first < second);
    assert!(second < third);
}

// ========================================
// RUN LOOP TESTS
// ========================================

#[tokio::test]
async fn quit_posted_before_run_terminates_with_code_zero() {
    let run_loop = RunLoop::new();
    run_loop.quit_handle().quit(0);
    let code = run_loop.run().await.unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn quit_carries_nonzero_exit_code() {
    let run_loop = RunLoop::new();
    run_loop.quit_handle().quit(7);
    let code = run_loop.run().await.unwrap();
    assert_eq!(code, 7);
}

#[tokio::test]
async fn first_quit_event_wins() {
    let run_loop = RunLoop::new();
    let handle = run_loop.quit_handle();
    let clone = handle.clone();
    handle.quit(3);
    clone.quit(9);
    let code = run_loop.run().await.unwrap();
    assert_eq!(code, 3);
}
