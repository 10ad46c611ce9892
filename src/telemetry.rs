use crate::config::TelemetryConfig;
use tracing::debug;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Where the active log filter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOrigin {
    Environment,
    Config,
}

impl FilterOrigin {
    const fn label(self) -> &'static str {
        match self {
            Self::Environment => EnvFilter::DEFAULT_ENV,
            Self::Config => "APP_LOG_LEVEL",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{directive}' from {origin}")]
    Filter {
        origin: &'static str,
        directive: String,
        #[source]
        source: ParseError,
    },
    #[error("could not install log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Picks the filter directive: a non-blank `RUST_LOG` wins over the configured level.
pub fn select_directive<'a>(
    env_directive: Option<&'a str>,
    configured: &'a str,
) -> (FilterOrigin, &'a str) {
    match env_directive.map(str::trim).filter(|value| !value.is_empty()) {
        Some(directive) => (FilterOrigin::Environment, directive),
        None => (FilterOrigin::Config, configured.trim()),
    }
}

fn build_filter(origin: FilterOrigin, directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::Filter {
        origin: origin.label(),
        directive: directive.to_string(),
        source,
    })
}

/// Installs the global subscriber, writing compact lines to stderr so stdout only
/// carries the report.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (origin, directive) = select_directive(env_directive.as_deref(), &config.log_level);
    let filter = build_filter(origin, directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)?;

    debug!(origin = origin.label(), directive, "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_directive_overrides_config() {
        assert_eq!(
            select_directive(Some("rent_roll=trace"), "info"),
            (FilterOrigin::Environment, "rent_roll=trace")
        );
    }

    #[test]
    fn blank_environment_falls_back_to_config() {
        assert_eq!(select_directive(Some("  "), " warn "), (FilterOrigin::Config, "warn"));
        assert_eq!(select_directive(None, "info"), (FilterOrigin::Config, "info"));
    }

    #[test]
    fn filter_accepts_directives() {
        assert!(build_filter(FilterOrigin::Config, "info").is_ok());
        assert!(build_filter(FilterOrigin::Config, "rent_roll=debug,warn").is_ok());
    }

    #[test]
    fn invalid_filter_names_its_origin() {
        let error = build_filter(FilterOrigin::Environment, "rent_roll=verbose")
            .expect_err("unknown level rejected");
        let message = error.to_string();
        assert!(message.contains("rent_roll=verbose"));
        assert!(message.contains("RUST_LOG"));

        let error = build_filter(FilterOrigin::Config, "rent_roll=verbose").expect_err("rejected");
        assert!(error.to_string().contains("APP_LOG_LEVEL"));
    }
}
