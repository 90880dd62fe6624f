use manazil_core::{BookingSelections, BookingSession};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

struct SessionEntry {
    session: BookingSession,
    last_seen: Instant,
}

/// In-memory registry of open booking sessions, keyed by session id.
///
/// Sessions nobody has touched for `idle_ttl` are dropped by `sweep_idle`, and
/// `open` sweeps before giving up on a full registry.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    max_active: usize,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(max_active: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_active,
            idle_ttl: DEFAULT_IDLE_TTL,
        }
    }

    pub fn with_idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.idle_ttl = idle_ttl;
        self
    }

    /// Start a new session with the initial selections
    pub async fn open(&self) -> Result<(Uuid, Arc<BookingSelections>), StoreError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.max_active {
            Self::evict_idle(&mut sessions, self.idle_ttl);
        }
        if sessions.len() >= self.max_active {
            return Err(StoreError::CapacityReached(self.max_active));
        }

        let mut session = BookingSession::new();
        let snapshot = session.start();
        let id = session.id();
        sessions.insert(id, SessionEntry { session, last_seen: Instant::now() });
        info!("Session opened: {} ({} active)", id, sessions.len());
        Ok((id, snapshot))
    }

    /// End a session and forget it. Returns its last selections.
    pub async fn close(&self, id: Uuid) -> Result<Option<Arc<BookingSelections>>, StoreError> {
        let mut entry = self.sessions.write().await
            .remove(&id)
            .ok_or(StoreError::SessionNotFound(id))?;
        info!("Session closed: {}", id);
        Ok(entry.session.end())
    }

    /// Run `f` against one session under the write lock. Counts as activity.
    pub async fn with_session<T, F>(&self, id: Uuid, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut BookingSession) -> T,
    {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id).ok_or(StoreError::SessionNotFound(id))?;
        entry.last_seen = Instant::now();
        Ok(f(&mut entry.session))
    }

    /// Read-only snapshot of a session's selections
    pub async fn snapshot(&self, id: Uuid) -> Result<Arc<BookingSelections>, StoreError> {
        let sessions = self.sessions.read().await;
        let entry = sessions.get(&id).ok_or(StoreError::SessionNotFound(id))?;
        entry.session.selections().map_err(|_| StoreError::SessionNotFound(id))
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop sessions idle for longer than the TTL. Returns how many went.
    pub async fn sweep_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        Self::evict_idle(&mut sessions, self.idle_ttl)
    }

    fn evict_idle(sessions: &mut HashMap<Uuid, SessionEntry>, idle_ttl: Duration) -> usize {
        let before = sessions.len();
        sessions.retain(|id, entry| {
            let keep = entry.last_seen.elapsed() < idle_ttl;
            if !keep {
                entry.session.end();
                debug!("Session expired: {}", id);
            }
            keep
        });

        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Expired {} idle sessions ({} active)", evicted, sessions.len());
        }
        evicted
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No active booking session: {0}")]
    SessionNotFound(Uuid),

    #[error("Session limit reached ({0} active)")]
    CapacityReached(usize),
}
