//! Tracing subscriber bootstrap.
//!
//! Logs are written to stderr so that stdout stays reserved for the
//! interactive session.

use anyhow::{anyhow, Context};
use shelf_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

/// Build the log filter, preferring `RUST_LOG` over the configured directive.
pub fn env_filter(settings: &TelemetrySettings) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .with_context(|| format!("invalid log filter '{}'", settings.filter))
}

/// Install the global tracing subscriber.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = env_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.with_target(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::debug!(
        target: "shelf-telemetry",
        format = ?settings.log_format,
        "telemetry initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        let settings = TelemetrySettings::default();
        assert!(env_filter(&settings).is_ok());
    }

    #[test]
    fn directive_filters_parse() {
        let settings = TelemetrySettings {
            filter: "shelf_catalog=debug,warn".to_string(),
            ..TelemetrySettings::default()
        };
        assert!(env_filter(&settings).is_ok());
    }
}
