use dns_proxy_domain::Config;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn init_logging(config: &Config) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(&config.logging.level, rust_log.as_deref());

    // stdout carries command output
    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
}

/// `RUST_LOG` directives win over the configured level; an unparsable
/// level falls back to `info`.
fn log_filter(level: &str, rust_log: Option<&str>) -> EnvFilter {
    let level = level.parse().unwrap_or(tracing::Level::INFO);

    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| {
            EnvFilter::default().add_directive(LevelFilter::from_level(level).into())
        })
}
