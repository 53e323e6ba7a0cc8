//! Tracing setup and request spans

use backoffice_core::{BackofficeError, LoggingConfig, Result};
use tracing::field::Empty;
use tracing::Span;
use tracing_subscriber::EnvFilter;

use crate::api::RequestContext;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Calling this when a
/// subscriber is already installed leaves the existing one in place.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            BackofficeError::invalid(format!("invalid log level {:?}: {e}", config.level))
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(err) = installed {
        tracing::debug!(error = %err, "Tracing subscriber already installed");
    }
    Ok(())
}

/// Span wrapping one dashboard request.
///
/// `session_id` and `user_id` start empty and are filled in by the
/// authorization guard.
pub fn request_span(method: &'static str, ctx: &RequestContext) -> Span {
    tracing::info_span!(
        "dashboard_request",
        service = "Dashboard",
        method,
        remote_addr = ctx.remote_addr.as_deref().unwrap_or("-"),
        session_id = Empty,
        user_id = Empty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_ok());
    }

    #[test]
    fn test_rejects_malformed_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "backoffice_dashboard=verbose".to_string(),
            json: false,
        };
        assert!(init_tracing(&config).is_err());
    }
}
