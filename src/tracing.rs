//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times; only the first call has an effect.
///
/// Progress lines are the tool's primary output, so they go to stdout.
/// `verbose` lowers the default level to DEBUG; `RUST_LOG` still takes precedence.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(
            if verbose {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .with_writer(std::io::stdout)
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
