//! Tests for the rendergen tracing setup.

use std::sync::Mutex;

use rendergen_core::tracing::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_rendergen_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("RENDERGEN_LOG", "debug");
    init_tracing();
    std::env::remove_var("RENDERGEN_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("RENDERGEN_LOG", "not=a=valid=filter=[");
    init_tracing();
    std::env::remove_var("RENDERGEN_LOG");
}
