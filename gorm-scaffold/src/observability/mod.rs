//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`; the list of generated files
//! stays on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins when set. Otherwise the level follows `verbosity`
/// (`0` = warn, `1` = info, `2` = debug, `3+` = trace).
///
/// # Example
///
/// ```rust,no_run
/// gorm_scaffold::observability::init(1);
/// tracing::info!("generator started");
/// ```
pub fn init(verbosity: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Filter directive for a verbosity level
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,gorm_scaffold=info",
        2 => "debug,sqlx=warn",
        _ => "trace",
    }
}
