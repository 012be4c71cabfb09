use std::borrow::Cow;

use sentry::integrations::tracing::EventFilter;
use sentry::{ClientInitGuard, ClientOptions};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::prelude::*;

const LOG_ENV: &str = "HOUSE_PRICE_ESTIMATOR_LOG";
const DEFAULT_LOG: &str = "house_price_estimator=info,poem=info";

const SENTRY_LOG_ENV: &str = "HOUSE_PRICE_ESTIMATOR_SENTRY_LOG";
const DEFAULT_SENTRY_LOG: &str = "house_price_estimator=debug";

/// Initialises tracing and the Sentry client.
///
/// Without a DSN the Sentry client is disabled.
pub fn init(sentry_dsn: Option<String>, traces_sample_rate: f32) -> Result<ClientInitGuard> {
    let guard = sentry::init((
        sentry_dsn,
        ClientOptions {
            release: Some(Cow::Borrowed(env!("CARGO_PKG_VERSION"))),
            environment: Some(Cow::Borrowed(if cfg!(debug_assertions) {
                "development"
            } else {
                "production"
            })),
            traces_sample_rate,
            ..Default::default()
        },
    ));

    // Rejected submissions are logged at `info` and only belong in breadcrumbs.
    let sentry_layer = sentry::integrations::tracing::layer()
        .event_filter(|metadata| match *metadata.level() {
            Level::ERROR | Level::WARN => EventFilter::Event,
            _ => EventFilter::Breadcrumb,
        })
        .span_filter(|metadata| *metadata.level() <= Level::INFO)
        .with_filter(env_filter(SENTRY_LOG_ENV, DEFAULT_SENTRY_LOG)?);

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(env_filter(LOG_ENV, DEFAULT_LOG)?);

    tracing_subscriber::Registry::default()
        .with(sentry_layer)
        .with(format_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(guard)
}

/// Tags Sentry events with the model that produced the estimates.
pub fn set_model_tags(path: &std::path::Path, n_coefficients: usize) {
    sentry::configure_scope(|scope| {
        scope.set_tag("model.path", path.display());
        scope.set_tag("model.n_coefficients", n_coefficients);
    });
}

fn env_filter(variable: &str, default: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(variable)
        .or_else(|_| EnvFilter::try_new(default))
        .with_context(|| format!("invalid log filter in `{}`", variable))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_default_ok() -> Result {
        let filter = env_filter("HOUSE_PRICE_ESTIMATOR_UNSET_LOG", DEFAULT_SENTRY_LOG)?;
        assert!(filter.to_string().contains("house_price_estimator=debug"));
        Ok(())
    }
}
