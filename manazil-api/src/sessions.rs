use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use manazil_core::{BookingSelections, Navigation, SeatsInput, Step};
use serde::Serialize;
use uuid::Uuid;
use crate::error::AppError;
use crate::extract::AppPath;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub current_step: Step,
    pub selections: BookingSelections,
    pub seats_input: SeatsInput,
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub session_id: Uuid,
    pub navigation: Navigation,
    pub path: &'static str,
    pub selections: BookingSelections,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions", post(open_session))
        .route("/v1/sessions/{id}", get(get_session).delete(close_session))
        .route("/v1/sessions/{id}/selections", get(get_selections))
        .route("/v1/sessions/{id}/reset", post(reset_session))
        .route("/v1/sessions/{id}/reauthenticate", post(reauthenticate))
}

/// Current state of a session, as returned by most session endpoints
pub(crate) async fn describe(state: &AppState, id: Uuid) -> Result<SessionResponse, AppError> {
    let response = state
        .sessions
        .with_session(id, |session| {
            session.selections().map(|selections| SessionResponse {
                session_id: id,
                current_step: session.current_step(),
                selections: selections.as_ref().clone(),
                seats_input: session.seats_input().clone(),
            })
        })
        .await??;
    Ok(response)
}

/// POST /v1/sessions
/// Start a booking session with the initial selections
async fn open_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let (session_id, _) = state.sessions.open().await?;
    let response = describe(&state, session_id).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /v1/sessions/:id
async fn get_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    Ok(Json(describe(&state, id).await?))
}

/// DELETE /v1/sessions/:id
/// Abandon the booking and end the session
async fn close_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.close(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/sessions/:id/selections
async fn get_selections(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<BookingSelections>, AppError> {
    let snapshot = state.sessions.snapshot(id).await?;
    Ok(Json(snapshot.as_ref().clone()))
}

/// POST /v1/sessions/:id/reset
async fn reset_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    state.sessions.with_session(id, |session| session.reset()).await??;
    Ok(Json(describe(&state, id).await?))
}

/// POST /v1/sessions/:id/reauthenticate
/// Sign-in from the landing page: drop the booking and start at service selection
async fn reauthenticate(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<NavigationResponse>, AppError> {
    let (navigation, selections) = state
        .sessions
        .with_session(id, |session| {
            let navigation = session.reauthenticate()?;
            Ok::<_, manazil_core::CoreError>((navigation, session.selections()?))
        })
        .await??;

    Ok(Json(NavigationResponse {
        session_id: id,
        navigation,
        path: navigation.destination().path(),
        selections: selections.as_ref().clone(),
    }))
}
