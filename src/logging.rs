//! logging.rs
//! tracing subscriber setup (compact fmt + EnvFilter).

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// RUST_LOG wins if set; otherwise info (or debug with --verbose) for this crate.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "the_contest=debug,warn"
    } else {
        "the_contest=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
