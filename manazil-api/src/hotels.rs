use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use manazil_catalog::Hotel;
use serde::Deserialize;
use crate::error::AppError;
use crate::extract::{AppPath, AppQuery};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HotelSearchQuery {
    pub q: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/hotels", get(search_hotels))
        .route("/v1/hotels/{hotel_id}", get(get_hotel))
}

/// GET /v1/hotels?q=makkah
async fn search_hotels(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<HotelSearchQuery>,
) -> Json<Vec<Hotel>> {
    match query.q {
        Some(q) => Json(state.catalog.search(&q).into_iter().cloned().collect()),
        None => Json(state.catalog.all().to_vec()),
    }
}

/// GET /v1/hotels/:hotel_id
async fn get_hotel(
    State(state): State<AppState>,
    AppPath(hotel_id): AppPath<String>,
) -> Result<Json<Hotel>, AppError> {
    Ok(Json(state.catalog.get(&hotel_id)?.clone()))
}
