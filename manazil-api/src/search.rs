use axum::{
    extract::State,
    response::Response,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use manazil_core::QuickSearch;
use uuid::Uuid;
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::navigation::{navigation_response, run_navigation};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions/{id}/quick-search", post(quick_search))
        .route("/v1/sessions/{id}/featured/{hotel_id}", post(pick_featured_hotel))
}

/// POST /v1/sessions/:id/quick-search
/// Landing page search widget; lands on the step the search leads to
async fn quick_search(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(search): AppJson<QuickSearch>,
) -> Result<Response, AppError> {
    let today = Utc::now().date_naive();
    let (navigation, view) =
        run_navigation(&state, id, |session| session.quick_search(&search, today)).await?;
    Ok(navigation_response(id, navigation, view))
}

/// POST /v1/sessions/:id/featured/:hotel_id
/// "Book now" on a featured hotel card
async fn pick_featured_hotel(
    State(state): State<AppState>,
    AppPath((id, hotel_id)): AppPath<(Uuid, String)>,
) -> Result<Response, AppError> {
    let today = Utc::now().date_naive();
    let catalog = state.catalog.clone();
    let (navigation, view) = run_navigation(&state, id, |session| {
        session.pick_featured_hotel(&catalog, &hotel_id, today)
    })
    .await?;
    Ok(navigation_response(id, navigation, view))
}
