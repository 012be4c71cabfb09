use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

use crate::model::Regressor;
use crate::opts::WebOpts;
use crate::prelude::*;
use crate::web::middleware::{ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware};

mod middleware;
mod partials;
#[cfg(test)]
mod test;
mod views;

const SHUTDOWN_TIMEOUT: StdDuration = StdDuration::from_secs(5);

#[instrument(skip_all, level = "info", fields(host = opts.host.as_str(), port = opts.port))]
pub async fn run(opts: &WebOpts, model: Arc<Regressor>) -> Result {
    let app = create_app(model);
    info!("listening…");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run_with_graceful_shutdown(
            app,
            async {
                if let Err(error) = tokio::signal::ctrl_c().await {
                    error!("failed to listen for Ctrl+C: {:#}", error);
                }
                info!("shutting down…");
            },
            Some(SHUTDOWN_TIMEOUT),
        )
        .await?;
    Ok(())
}

pub fn create_app(model: Arc<Regressor>) -> impl Endpoint {
    Route::new()
        .at("/", get(views::index::get))
        .at("/predict", post(views::predict::post))
        .at("/health", get(views::health::get))
        .data(model)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}
