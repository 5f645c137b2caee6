//! Structured logging setup using **tracing**.
//!
//! The library itself only emits `tracing` events (snapshot capture sizes,
//! best-chain replacements); binaries opt into collecting them by calling
//! [`init_structured_logging`] once at startup.

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the application's
/// runtime. It configures structured JSON output to stderr, keeping stdout
/// clean for report output.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=friendnet_core=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
