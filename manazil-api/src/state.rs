use std::sync::Arc;
use manazil_catalog::HotelCatalog;
use manazil_core::{LoggingSink, SubmissionSink};
use manazil_store::SessionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub catalog: Arc<HotelCatalog>,
    pub sink: Arc<dyn SubmissionSink>,
}

impl AppState {
    /// State with the built-in catalog and the logging submission sink
    pub fn new(sessions: SessionRegistry) -> Self {
        Self::with_sink(sessions, Arc::new(LoggingSink))
    }

    pub fn with_sink(sessions: SessionRegistry, sink: Arc<dyn SubmissionSink>) -> Self {
        Self {
            sessions: Arc::new(sessions),
            catalog: Arc::new(HotelCatalog::builtin()),
            sink,
        }
    }
}
