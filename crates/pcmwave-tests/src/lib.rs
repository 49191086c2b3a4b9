//! pcmwave Integration Test Infrastructure
//!
//! This crate provides the tooling the integration tests under `tests/`
//! share:
//!
//! - [`format_validators`]: an independent RIFF/WAVE header parser, so encoder
//!   output is checked against code that does not share its arithmetic
//! - [`determinism`]: byte-identical comparison of repeated renders
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pcmwave-tests
//! ```

pub mod determinism;
pub mod format_validators;

/// Installs a test-mode logger once per process.
///
/// Set `RUST_LOG=pcmwave=debug` to see encoder output while tests run.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
