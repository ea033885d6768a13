// Tracing subscriber setup for the CLI

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset, empty or unparseable
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the log filter from `RUST_LOG`-style directives.
pub fn filter(directives: Option<&str>) -> EnvFilter {
    match directives.map(str::trim) {
        Some(d) if !d.is_empty() => EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
        _ => EnvFilter::new(DEFAULT_LEVEL),
    }
}

/// Install the global subscriber, writing to stderr so stdout stays the rendered page.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}
