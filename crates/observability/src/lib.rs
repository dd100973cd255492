//! Tracing/logging setup shared by wedplan binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide logging from `RUST_LOG`, text output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(None, LogFormat::Text);
}

/// Initialize logging with an explicit filter directive and format.
pub fn init_with(filter: &str, format: LogFormat) {
    tracing::init(Some(filter), format);
}
