//! `gajanand-observability`
//!
//! Log setup for the site and its native test runs. Events across the
//! workspace carry structured fields such as `product`, `route`, `errors` (a
//! count) and `error`; contact-form values never appear in a log line, only
//! the field name.

/// Install the subscriber for this process: JSON lines natively, the browser
/// console on wasm32.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, output format).
pub mod tracing;

#[cfg(target_arch = "wasm32")]
mod console;
