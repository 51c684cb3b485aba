use crate::climatology::error::ClimatologyError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;
use std::net::SocketAddr;
use thiserror::Error;

/// Message returned to callers when the climatology source fails; details stay in the log.
const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch climatology data";

/// Errors that end a request, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] ClimatologyError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::Upstream(e) => {
                error!("{}", error_chain(e));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPSTREAM_FAILURE_MESSAGE.to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn error_chain(e: &dyn std::error::Error) -> String {
    let mut chain = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind listener on {0}")]
    Bind(SocketAddr, #[source] std::io::Error),

    #[error("HTTP server terminated unexpectedly")]
    Serve(#[source] std::io::Error),
}
