use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the active filter.
///
/// An explicit `level` wins over `RUST_LOG`. Accepts a bare level ("debug") or
/// any full `EnvFilter` directive. An unparsable directive falls back to
/// [`DEFAULT_FILTER`].
pub fn make_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(directive) => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Initializes logging. Call once at startup.
///
/// Everything goes to stderr so stdout stays clean for CSV output. Colored when
/// stderr is a terminal. Calling it twice is harmless.
pub fn init_logging(level: Option<&str>) {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(make_filter(level))
        .with(stderr_layer)
        .try_init();
}
