use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr) // stdout is reserved for the summary
        .try_init();
}

/// Log a fatal error once and map it to a failing exit status.
pub fn fatal(err: &anyhow::Error) -> ExitCode {
    error!("{:#}", err);
    ExitCode::FAILURE
}
