use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};
use manazil_catalog::Hotel;
use manazil_core::steps::hotel_selection;
use manazil_core::{BookingSelections, BookingSession, BookingSummary, CoreResult, SeatsInput, Step};
use manazil_shared::{Airport, ServiceKind, TripDuration};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::navigation::StepView;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ServiceRequest {
    pub checked: bool,
}

/// Dropdown values from the flight details form. A missing field is left as is,
/// an empty string (or a zero duration) clears the field.
#[derive(Debug, Default, Deserialize)]
pub struct FlightDetailsRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub duration: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct SeatsRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub session_id: Uuid,
    pub selections: BookingSelections,
    pub view: StepView,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions/{id}/services/{kind}", put(set_service))
        .route("/v1/sessions/{id}/services/{kind}/toggle", post(toggle_service))
        .route("/v1/sessions/{id}/flight", put(set_flight_details))
        .route("/v1/sessions/{id}/hotels", get(list_hotels))
        .route("/v1/sessions/{id}/hotel/{hotel_id}", post(select_hotel))
        .route("/v1/sessions/{id}/seats", put(set_seats))
        .route("/v1/sessions/{id}/summary", get(get_summary))
}

/// Apply `edit` to a session and render `step` from the result
async fn edit_step<T, F>(
    state: &AppState,
    id: Uuid,
    step: Step,
    edit: F,
) -> Result<(T, StepResponse), AppError>
where
    F: FnOnce(&mut BookingSession) -> CoreResult<T>,
{
    let catalog = state.catalog.clone();
    let result = state
        .sessions
        .with_session(id, |session| -> CoreResult<(T, StepResponse)> {
            let output = edit(session)?;
            let selections = session.selections()?;
            let view = StepView::build(step, &selections, session.seats_input(), &catalog);
            Ok((
                output,
                StepResponse {
                    session_id: id,
                    selections: selections.as_ref().clone(),
                    view,
                },
            ))
        })
        .await??;
    Ok(result)
}

fn parse_airport(raw: &str) -> Result<Option<Airport>, AppError> {
    match raw.trim() {
        "" => Ok(None),
        code => Ok(Some(code.parse()?)),
    }
}

fn parse_duration(days: u8) -> Result<Option<TripDuration>, AppError> {
    match days {
        0 => Ok(None),
        days => Ok(Some(TripDuration::try_from(days)?)),
    }
}

/// PUT /v1/sessions/:id/services/:kind
async fn set_service(
    State(state): State<AppState>,
    AppPath((id, kind)): AppPath<(Uuid, String)>,
    AppJson(payload): AppJson<ServiceRequest>,
) -> Result<Json<StepResponse>, AppError> {
    let kind: ServiceKind = kind.parse()?;
    let (_, response) = edit_step(&state, id, Step::ServiceSelection, |session| {
        session.service_selection()?.set(kind, payload.checked);
        Ok(())
    })
    .await?;
    Ok(Json(response))
}

/// POST /v1/sessions/:id/services/:kind/toggle
async fn toggle_service(
    State(state): State<AppState>,
    AppPath((id, kind)): AppPath<(Uuid, String)>,
) -> Result<Json<StepResponse>, AppError> {
    let kind: ServiceKind = kind.parse()?;
    let (checked, response) = edit_step(&state, id, Step::ServiceSelection, |session| {
        Ok(session.service_selection()?.toggle(kind))
    })
    .await?;
    debug!("Session {} toggled {}: {}", id, kind.label(), checked);
    Ok(Json(response))
}

/// PUT /v1/sessions/:id/flight
async fn set_flight_details(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<FlightDetailsRequest>,
) -> Result<Json<StepResponse>, AppError> {
    // Validate everything before touching the store
    let origin = payload.origin.as_deref().map(parse_airport).transpose()?;
    let destination = payload.destination.as_deref().map(parse_airport).transpose()?;
    let duration = payload.duration.map(parse_duration).transpose()?;

    let (_, response) = edit_step(&state, id, Step::FlightDetails, |session| {
        let mut step = session.flight_details()?;
        if let Some(origin) = origin {
            step.set_origin(origin);
        }
        if let Some(destination) = destination {
            step.set_destination(destination);
        }
        if let Some(duration) = duration {
            step.set_duration(duration);
        }
        Ok(())
    })
    .await?;
    Ok(Json(response))
}

/// GET /v1/sessions/:id/hotels
/// Hotels listed for the session's search criteria
async fn list_hotels(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<Vec<Hotel>>, AppError> {
    let selections = state.sessions.snapshot(id).await?;
    let hotels = hotel_selection::visible_hotels(&selections, &state.catalog)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(hotels))
}

/// POST /v1/sessions/:id/hotel/:hotel_id
/// Select a hotel card; picking the selected card again clears it
async fn select_hotel(
    State(state): State<AppState>,
    AppPath((id, hotel_id)): AppPath<(Uuid, String)>,
) -> Result<Json<StepResponse>, AppError> {
    state.catalog.get(&hotel_id)?;
    let (selected, response) = edit_step(&state, id, Step::HotelSelection, |session| {
        Ok(session.hotel_selection()?.select(&hotel_id))
    })
    .await?;
    info!("Session {} hotel selection: {:?}", id, selected);
    Ok(Json(response))
}

/// PUT /v1/sessions/:id/seats
/// Free-form traveler count from the confirmation screen
async fn set_seats(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<SeatsRequest>,
) -> Result<Json<StepResponse>, AppError> {
    let (input, response) = edit_step(&state, id, Step::Confirmation, |session| {
        Ok(session.confirmation()?.set_seats(&payload.input))
    })
    .await?;

    if let Some(message) = input.message() {
        return Err(AppError::ValidationError(message));
    }
    Ok(Json(response))
}

/// GET /v1/sessions/:id/summary
async fn get_summary(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SummaryResponse>, AppError> {
    let catalog = state.catalog.clone();
    let response = state
        .sessions
        .with_session(id, |session| -> CoreResult<SummaryResponse> {
            let confirmation = session.confirmation()?;
            Ok(SummaryResponse {
                summary: confirmation.summary(&catalog),
                seats_input: confirmation.seats_input().clone(),
                can_submit: confirmation.can_submit(),
            })
        })
        .await??;
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: BookingSummary,
    pub seats_input: SeatsInput,
    pub can_submit: bool,
}
