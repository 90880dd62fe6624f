use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use manazil_catalog::{Hotel, HotelCatalog};
use manazil_core::steps::{confirmation, flight_details, hotel_selection, service_selection};
use manazil_core::{
    BookingSelections, BookingSummary, CoreResult, FlightDetails, HotelSearchCriteria, Navigation,
    SeatsInput, Services, Step,
};
use manazil_shared::{Airport, TripDuration};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use crate::error::AppError;
use crate::extract::{AppPath, AppQuery};
use crate::state::AppState;

const FEATURED_HOTELS: usize = 6;

#[derive(Debug, Deserialize)]
pub struct NavigateQuery {
    pub path: String,
}

/// What a step renders from the current selections
#[derive(Debug, Serialize)]
#[serde(tag = "step", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepView {
    Landing {
        featured_hotels: Vec<Hotel>,
    },
    ServiceSelection {
        services: Services,
        can_proceed: bool,
        next_step: Option<Step>,
    },
    FlightDetails {
        flight_details: Option<FlightDetails>,
        origins: Vec<Airport>,
        durations: Vec<TripDuration>,
        can_proceed: bool,
        next_step: Option<Step>,
    },
    HotelSelection {
        criteria: Option<HotelSearchCriteria>,
        hotels: Vec<Hotel>,
        selected_hotel_id: Option<String>,
        can_proceed: bool,
        next_step: Option<Step>,
    },
    Confirmation {
        summary: BookingSummary,
        seats_input: SeatsInput,
        seats_message: Option<String>,
        can_submit: bool,
    },
}

impl StepView {
    pub fn build(
        step: Step,
        selections: &BookingSelections,
        seats_input: &SeatsInput,
        catalog: &HotelCatalog,
    ) -> Self {
        match step {
            Step::Landing => StepView::Landing {
                featured_hotels: catalog.featured(FEATURED_HOTELS).to_vec(),
            },
            Step::ServiceSelection => StepView::ServiceSelection {
                services: selections.services,
                can_proceed: service_selection::can_proceed(selections),
                next_step: service_selection::next_step(selections),
            },
            Step::FlightDetails => StepView::FlightDetails {
                flight_details: selections.flight_details,
                origins: vec![Airport::Cgk, Airport::Sby],
                durations: vec![TripDuration::Nine, TripDuration::Twelve],
                can_proceed: flight_details::can_proceed(selections),
                next_step: flight_details::next_step(selections),
            },
            Step::HotelSelection => StepView::HotelSelection {
                criteria: selections.hotel_search_criteria.clone(),
                hotels: hotel_selection::visible_hotels(selections, catalog)
                    .into_iter()
                    .cloned()
                    .collect(),
                selected_hotel_id: selections.selected_hotel_id.clone(),
                can_proceed: hotel_selection::can_proceed(selections),
                next_step: hotel_selection::next_step(selections),
            },
            Step::Confirmation => StepView::Confirmation {
                summary: BookingSummary::build(selections, catalog),
                seats_input: seats_input.clone(),
                seats_message: seats_input.message(),
                can_submit: confirmation::can_submit(selections, seats_input),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub session_id: Uuid,
    pub navigation: Navigation,
    pub path: &'static str,
    pub view: StepView,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions/{id}/navigate", get(navigate))
        .route("/v1/sessions/{id}/back", post(back))
}

/// Build the response for a finished navigation: the step view when allowed,
/// `303 See Other` pointing at the redirect target otherwise
pub(crate) fn navigation_response(
    session_id: Uuid,
    navigation: Navigation,
    view: StepView,
) -> Response {
    let step = navigation.destination();
    let body = Json(NavigateResponse {
        session_id,
        navigation,
        path: step.path(),
        view,
    });

    match navigation {
        Navigation::Allow(_) => body.into_response(),
        Navigation::Redirect(_) => {
            let location = format!("/v1/sessions/{}/navigate?path={}", session_id, step.path());
            (StatusCode::SEE_OTHER, [(header::LOCATION, location)], body).into_response()
        }
    }
}

/// Run a navigation against a session and render where it lands
pub(crate) async fn run_navigation<F>(
    state: &AppState,
    id: Uuid,
    navigate: F,
) -> Result<(Navigation, StepView), AppError>
where
    F: FnOnce(&mut manazil_core::BookingSession) -> CoreResult<Navigation>,
{
    let catalog = state.catalog.clone();
    let result = state
        .sessions
        .with_session(id, |session| -> CoreResult<(Navigation, StepView)> {
            let navigation = navigate(session)?;
            let selections = session.selections()?;
            let view = StepView::build(navigation.destination(), &selections, session.seats_input(), &catalog);
            Ok((navigation, view))
        })
        .await??;
    Ok(result)
}

/// GET /v1/sessions/:id/navigate?path=/hotel-selection
/// Guarded navigation to a wizard location (forward, history or deep link)
async fn navigate(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppQuery(query): AppQuery<NavigateQuery>,
) -> Result<Response, AppError> {
    let (navigation, view) = run_navigation(&state, id, |session| session.navigate_path(&query.path)).await?;
    debug!("Session {} navigated to {}: {:?}", id, query.path, navigation);
    Ok(navigation_response(id, navigation, view))
}

/// POST /v1/sessions/:id/back
/// Browser back; the previous step is guarded again
async fn back(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Response, AppError> {
    let (navigation, view) = run_navigation(&state, id, |session| {
        // At the start of history "back" stays put
        match session.back()? {
            Some(navigation) => Ok(navigation),
            None => Ok(Navigation::Allow(session.current_step())),
        }
    })
    .await?;
    Ok(navigation_response(id, navigation, view))
}
