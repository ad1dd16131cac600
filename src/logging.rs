//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_FILTER: &str = "warn";

/// Builds the filter: `RUST_LOG` first, then the configured directive, then
/// [`DEFAULT_FILTER`].
fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a stderr fmt subscriber as the global default.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(configured: Option<&str>) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn configured_filter_is_used() {
        // RUST_LOG takes precedence when set.
        if std::env::var_os("RUST_LOG").is_none() {
            let filter = build_filter(Some("debug"));
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        }
    }

    #[test]
    fn defaults_to_warn() {
        if std::env::var_os("RUST_LOG").is_none() {
            let filter = build_filter(None);
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
        }
    }
}
