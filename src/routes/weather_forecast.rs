//! Weather forecast endpoint.
//!
//! The endpoint reads no input and always answers `200 OK` with a fixed
//! message. `handle` is the plain function; `get` is the axum handler
//! registered on the router.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

/// Body returned by every successful forecast request.
pub const FORECAST_FETCHED_MESSAGE: &str = "Weather forecast fetched successfully.";

/// Result of a forecast request: a status code and a text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastResult {
    pub status: StatusCode,
    pub body: &'static str,
}

impl ForecastResult {
    fn ok(body: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl IntoResponse for ForecastResult {
    fn into_response(self) -> Response {
        (self.status, self.body).into_response()
    }
}

/// Produce the forecast result.
pub fn handle() -> ForecastResult {
    ForecastResult::ok(FORECAST_FETCHED_MESSAGE)
}

/// `GET /weatherforecast`
#[instrument(name = "weather_forecast::get")]
pub async fn get() -> ForecastResult {
    let result = handle();
    tracing::debug!(status = result.status.as_u16(), "Weather forecast fetched");
    result
}
