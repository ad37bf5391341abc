//! HTTP routes and handlers

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::debug;
use ziptemp_core::{LookupError, TemperatureResult};

use crate::{error::ApiError, state::AppState};

/// Build the application router around an already constructed service.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/{postal_code}", get(get_temperature))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Current temperature for a postal code.
///
/// A segment that does not decode to UTF-8 cannot be a valid code and is
/// answered like any other malformed code.
pub async fn get_temperature(
    State(state): State<AppState>,
    postal_code: Result<Path<String>, PathRejection>,
) -> Result<Json<TemperatureResult>, ApiError> {
    let Path(postal_code) = postal_code.map_err(|rejection| {
        debug!(%rejection, "Rejected postal code path segment");
        ApiError(LookupError::InvalidPostalCode)
    })?;

    let result = state.service.lookup(&postal_code).await?;
    Ok(Json(result))
}
