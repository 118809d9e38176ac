use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber on stderr so report output on stdout stays
/// machine-readable. The filter comes from the CLI flag alone; the
/// environment is not consulted.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
