//! Tracing/logging setup shared by binaries, benches and tests.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide tracing with the default `info` filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Like [`init`], but with a caller-chosen fallback filter for when
/// `RUST_LOG` is unset (e.g. `"gildedrose_inventory=trace"`).
pub fn init_with_default_filter(directives: &str) {
    tracing::init(directives);
}
