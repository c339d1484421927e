use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins, then `NOTER_LOG`, then `--debug`, else warnings only.
fn log_filter(debug: bool) -> EnvFilter {
    let level = if let Ok(v) = std::env::var("RUST_LOG") {
        v
    } else if let Ok(v) = std::env::var("NOTER_LOG") {
        v
    } else if debug {
        "debug".to_string()
    } else {
        "warn".to_string()
    };

    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the stderr subscriber. Prompts and confirmations stay on stdout.
pub(crate) fn init(debug: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
