//! Process-wide tracing subscriber.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber once per process.
///
/// Nothing is installed unless `RUST_LOG` is set, so library logging costs
/// nothing by default. Events go to stderr, keeping `ku lex` and `ku parse`
/// output clean. With `KU_LOG_TREE` also set, spans are rendered as an
/// indented tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        if std::env::var_os("KU_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
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
