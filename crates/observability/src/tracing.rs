//! Tracing/logging initialization.
//!
//! Native builds (tests, tooling) emit JSON lines filtered by `RUST_LOG`.
//! In the browser there is no environment and no clock the fmt layer can use,
//! so logs go to the devtools console at the default level, without
//! timestamps.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unavailable.
pub const DEFAULT_FILTER: &str = "info";

/// JSON subscriber for native builds, e.g.
/// `{"level":"INFO","fields":{"message":"contact inquiry handed to mail client","route":"Primary"}}`.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(crate::console::ConsoleWriter::default)
        .try_init();
}
