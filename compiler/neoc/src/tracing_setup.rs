//! Log subscriber installation for the `neo` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup; later calls do nothing. Logging is off unless
/// `RUST_LOG` is set, e.g. `RUST_LOG=neo_parse=trace`. With `NEO_LOG_TREE`
/// set, events are printed as an indented span tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }

        let tree = std::env::var_os("NEO_LOG_TREE").is_some();
        let hierarchical = tree.then(|| HierarchicalLayer::new(2).with_targets(true));
        let flat = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(hierarchical)
            .with(flat)
            .with(EnvFilter::from_default_env())
            .init();
    });
}
