use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use manazil_core::{CoreResult, SubmitOutcome};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;
use crate::error::AppError;
use crate::extract::AppPath;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct SubmissionResponse {
    submission_id: Uuid,
    session_id: Uuid,
    submitted_at: i64,
    /// Where the wizard went after the hand-off
    path: &'static str,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/sessions/{id}/submit", post(submit_booking))
}

/// POST /v1/sessions/:id/submit
/// Hand the selections off, then reset the session back to the landing page
async fn submit_booking(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<(StatusCode, Json<SubmissionResponse>), AppError> {
    let sink = state.sink.clone();
    let (outcome, step) = state
        .sessions
        .with_session(id, |session| -> CoreResult<_> {
            let outcome = session.submit(sink.as_ref())?;
            Ok((outcome, session.current_step()))
        })
        .await??;

    match outcome {
        SubmitOutcome::Submitted(event) => {
            info!("Session {} submitted booking {}", id, event.submission_id);
            Ok((
                StatusCode::ACCEPTED,
                Json(SubmissionResponse {
                    submission_id: event.submission_id,
                    session_id: id,
                    submitted_at: event.submitted_at,
                    path: step.path(),
                }),
            ))
        }
        SubmitOutcome::Blocked { reason } => {
            warn!("Session {} submit blocked: {}", id, reason);
            Err(AppError::ValidationError(reason))
        }
    }
}
