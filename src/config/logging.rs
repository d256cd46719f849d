use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Diagnostics stay quiet by default
/// because progress is already printed to stdout.
const DEFAULT_LOG_FILTER: &str = "warn";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_valid() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
