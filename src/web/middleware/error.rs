use poem::error::{MethodNotAllowedError, NotFoundError, ParseFormError, ParseQueryError};
use poem::http::StatusCode;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

use crate::prelude::*;

/// Turns errors that escape the handlers into bare status codes and logs them.
pub struct ErrorMiddleware;

impl<E: Endpoint<Output = Response>> Middleware<E> for ErrorMiddleware {
    type Output = ErrorMiddlewareImpl<E>;

    fn transform(&self, ep: E) -> Self::Output {
        ErrorMiddlewareImpl { ep }
    }
}

pub struct ErrorMiddlewareImpl<E> {
    ep: E,
}

#[poem::async_trait]
impl<E: Endpoint<Output = Response>> Endpoint for ErrorMiddlewareImpl<E> {
    type Output = Response;

    async fn call(&self, request: Request) -> Result<Self::Output> {
        let method = request.method().clone();
        let uri = request.uri().clone();
        let error = match self.ep.call(request).await {
            Ok(response) => return Ok(response),
            Err(error) => error,
        };
        let status = if error.is::<NotFoundError>() {
            StatusCode::NOT_FOUND
        } else if error.is::<MethodNotAllowedError>() {
            StatusCode::METHOD_NOT_ALLOWED
        } else if error.is::<ParseFormError>() || error.is::<ParseQueryError>() {
            StatusCode::BAD_REQUEST
        } else {
            error!(?method, ?uri, "{:#}", error);
            return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
        };
        info!(?method, ?uri, %status, "{:#}", error);
        Ok(status.into_response())
    }
}
