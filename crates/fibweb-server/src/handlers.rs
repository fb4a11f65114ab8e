//! Request handlers.
//!
//! Every response is plain text ending in a newline. Failures are recognizable
//! by the `ERROR:` prefix of the body; their status is 200 unless the app was
//! built with strict status codes.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use fibweb_core::Count;
use serde::Deserialize;
use std::fmt::Display;
use std::sync::Arc;

use crate::logging::{RequestEvent, RequestLogger};

/// Errors raised by routing rather than by input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("Path not recognized. Use /fib.")]
    UnknownPath,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub logger: Arc<dyn RequestLogger>,
    /// Map failures to 4xx instead of 200.
    pub strict_status: bool,
}

impl AppState {
    /// Status for a failed request: `strict` when strict mode is on, else 200.
    fn failure_status(&self, strict: StatusCode) -> StatusCode {
        if self.strict_status {
            strict
        } else {
            StatusCode::OK
        }
    }
}

/// Query parameters for the /fib endpoint, in request order.
///
/// Kept as raw pairs so a repeated key resolves to its first value and bad
/// input can be reported in the body.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct FibParams(Vec<(String, String)>);

impl FibParams {
    /// First value given for `COUNT`, if any.
    pub fn count(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == "COUNT")
            .map(|(_, value)| value.as_str())
    }
}

/// A plain-text, newline-terminated response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    fn ok(body: impl Display) -> Self {
        Reply {
            status: StatusCode::OK,
            body: format!("{}\n", body),
        }
    }

    fn error(status: StatusCode, error: impl Display) -> Self {
        Reply {
            status,
            body: format!("ERROR: {}\n", error),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (self.status, self.body).into_response()
    }
}

/// Handler for the Fibonacci sequence.
///
/// Route: `/fib?COUNT=<integer>`
pub async fn get_fib(
    State(state): State<AppState>,
    params: Result<Query<FibParams>, QueryRejection>,
) -> Reply {
    // A query that does not deserialize is reported like a missing COUNT.
    let params = params.map(|Query(params)| params).unwrap_or_default();

    match Count::parse(params.count()) {
        Ok(count) => {
            let sequence = count.sequence();
            state.logger.log(&RequestEvent::Served { count: count.get() });
            Reply::ok(sequence)
        }
        Err(error) => {
            let reply = Reply::error(state.failure_status(StatusCode::BAD_REQUEST), &error);
            state.logger.log(&RequestEvent::Rejected { error });
            reply
        }
    }
}

/// Fallback for every path other than `/fib`.
pub async fn unknown_path(State(state): State<AppState>, uri: Uri) -> Reply {
    state.logger.log(&RequestEvent::UnknownPath {
        path: uri.path().to_string(),
    });
    Reply::error(
        state.failure_status(StatusCode::NOT_FOUND),
        RouteError::UnknownPath,
    )
}
