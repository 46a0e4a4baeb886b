//! Command-line front end for implementor fragments.
//!
//! Reads implementor tables in their JSON wire form, emits registration
//! scripts into a documentation tree, and simulates page-load handoff.

pub mod commands;
mod error;

pub use error::{CommandError, Result};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RDX_LOG=debug` or finer filters such as `RDX_LOG=rdx_registrar=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RDX_LOG is set
        if let Ok(directives) = std::env::var("RDX_LOG") {
            tracing_subscriber::registry()
                .with(EnvFilter::new(directives))
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}
