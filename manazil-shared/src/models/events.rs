use uuid::Uuid;

/// Snapshot of a completed wizard handed to the submission sink.
///
/// `selections` carries the serialized selections exactly as they stood at submit time.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingSubmittedEvent {
    pub submission_id: Uuid,
    pub session_id: Option<Uuid>,
    pub selections: serde_json::Value,
    pub submitted_at: i64,
}

impl BookingSubmittedEvent {
    pub fn new(session_id: Option<Uuid>, selections: serde_json::Value) -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            session_id,
            selections,
            submitted_at: chrono::Utc::now().timestamp(),
        }
    }
}
