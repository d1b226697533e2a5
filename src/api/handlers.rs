use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, warn};

use crate::api::AppState;
use crate::domain::model::{CountryDetail, CountrySummary};

// GET /api/countries
pub async fn list_countries(
    State(state): State<AppState>,
) -> Result<Json<Vec<CountrySummary>>, StatusCode> {
    match state.service.list_all().await {
        Ok(countries) => Ok(Json(countries)),
        Err(e) => {
            warn!("Failed to list countries: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// GET /api/countries/:country_name
pub async fn get_country(
    country_name: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<CountryDetail>, StatusCode> {
    // 無法解碼的名稱 (例如非 UTF-8) 不可能對應到任何國家
    let Path(country_name) = country_name.map_err(|rejection| {
        debug!("Undecodable country name in path: {}", rejection);
        StatusCode::NOT_FOUND
    })?;

    match state.service.get_details(&country_name).await {
        Ok(Some(detail)) => Ok(Json(detail)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            warn!("Failed to look up country '{}': {}", country_name, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
