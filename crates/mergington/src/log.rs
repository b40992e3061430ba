pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Filter used when `RUST_LOG` is unset: backend at debug, request traces from `tower_http`.
pub const DEFAULT_FILTER: &str = "tracing=info,tower_http=debug,mergington_backend=debug";

fn set_default_env(key: &str, value: &str) {
    if std::env::var(key).is_err() {
        unsafe { std::env::set_var(key, value) }
    }
}

/// Setup the logging system for the backend.
///
/// Installs [`color_eyre`] for error reports and a [`tracing_subscriber`]
/// fmt subscriber filtered by `RUST_LOG`. `RUST_LIB_BACKTRACE` defaults to `1`
/// and `RUST_LOG` to [`DEFAULT_FILTER`].
///
/// Fails if either component was already installed.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    set_default_env("RUST_LIB_BACKTRACE", "1");
    color_eyre::install().map_err(LogError::ColorEyre)?;

    set_default_env("RUST_LOG", DEFAULT_FILTER);
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
