use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr logger.
///
/// `RUST_LOG` takes precedence. Records emitted through the `log` facade by
/// the engine are forwarded to the same subscriber. Call once, from `main`.
pub fn init_cli_logger(verbose: bool) {
    let default_directives = if verbose {
        "token_scan=debug,token_scan_cli=debug,token_scan_engine=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
