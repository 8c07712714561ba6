use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ICU_PRINT_LOG";

/// Installs a stderr subscriber; `ICU_PRINT_LOG` overrides the configured filter.
pub fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
