use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins unless `verbose` is
/// set, which turns on debug output for both crates.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("kana_core=debug,kana_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kana_core=info"))
    };

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .try_init();
}
