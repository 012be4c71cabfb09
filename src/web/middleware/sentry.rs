use std::collections::BTreeMap;

use poem::http::header;
use poem::{Endpoint, Middleware, Request, Result};
use sentry::protocol::Context;
use serde_json::Value;

/// Tags the Sentry scope with the request, so that reported errors point at it.
pub struct SentryMiddleware;

impl<E: Endpoint> Middleware<E> for SentryMiddleware {
    type Output = SentryMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        SentryMiddlewareImpl { ep }
    }
}

pub struct SentryMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint> Endpoint for SentryMiddlewareImpl<E> {
    type Output = E::Output;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        sentry::configure_scope(|scope| {
            scope.set_tag("request.method", request.method());
            scope.set_tag("request.path", request.uri().path());
            scope.set_tag("request.remote_addr", request.remote_addr());
            scope.set_context("submission", Context::Other(describe_submission(&request)));
        });
        self.ep.call(request).await
    }
}

/// Describes the request body without recording the submitted values.
fn describe_submission(request: &Request) -> BTreeMap<String, Value> {
    let mut context = BTreeMap::new();
    context.insert("content_type".to_string(), request.content_type().into());
    let content_length = request
        .header(header::CONTENT_LENGTH)
        .and_then(|value| value.parse::<u64>().ok());
    context.insert("content_length".to_string(), content_length.into());
    context
}
