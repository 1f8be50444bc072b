//! Tracing subscriber initialization.
//!
//! Output is off unless `RUST_LOG` is set. `LOX_LOG_TREE` switches from the
//! flat formatter to an indented span tree.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call once at startup. Respects `RUST_LOG` environment variable.
/// Example: `RUST_LOG=lox_lexer=trace lox script.lox`
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        if std::env::var_os("LOX_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
