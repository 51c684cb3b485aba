//! HTTP handlers.
//!
//! - `GET /api/probabilities?lat=<latitude>&lon=<longitude>&date=<ISO-8601 date>`
//! - `GET /health`

use crate::estimator::probability::{estimate, ProbabilityResult};
use crate::server::error::ApiError;
use crate::server::AppState;
use crate::types::location::Coordinates;
use crate::types::month::{month_from_iso, Month};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use log::debug;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Raw query string of `/api/probabilities`. Every field is optional here so that
/// missing parameters can be reported together as a JSON error.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProbabilityQuery {
    lat: Option<String>,
    lon: Option<String>,
    date: Option<String>,
}

/// A validated `/api/probabilities` request. Coordinates stay as the caller wrote them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProbabilityRequest {
    pub location: Coordinates,
    pub month: Month,
}

impl ProbabilityQuery {
    pub(crate) fn validate(self) -> Result<ProbabilityRequest, ApiError> {
        let mut missing = Vec::new();
        let mut require = |name: &'static str, value: Option<String>| {
            let value = value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value
        };
        let lat = require("lat", self.lat);
        let lon = require("lon", self.lon);
        let date = require("date", self.date);

        let (Some(lat), Some(lon), Some(date)) = (lat, lon, date) else {
            return Err(ApiError::BadRequest(format!(
                "Missing required query parameter(s): {}",
                missing.join(", ")
            )));
        };

        Ok(ProbabilityRequest {
            location: Coordinates::new(lat, lon),
            month: month_from_iso(&date),
        })
    }
}

pub(crate) async fn get_probabilities(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ProbabilityQuery>, QueryRejection>,
) -> Result<Json<ProbabilityResult>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let request = query.validate()?;
    debug!(
        "Estimating probabilities for {} in month {}",
        request.location, request.month
    );

    let record = state.fetcher.fetch(request.location).await?;
    Ok(Json(estimate(
        request.month,
        record.as_ref(),
        &state.thresholds,
    )))
}

pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
