use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{entities::Session, ports::SessionRepository},
};

/// Process-local session store. Sessions idle longer than `idle_ttl` are purged on save.
#[derive(Debug, Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_ttl: Duration,
}

impl InMemorySessionRepository {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Session>, CoreError> {
        let sessions = self.sessions.read().await;
        let now = Utc::now();

        Ok(sessions
            .get(&id)
            .filter(|session| !session.is_idle(now, self.idle_ttl))
            .cloned())
    }

    async fn save(&self, session: Session) -> Result<Session, CoreError> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();

        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_idle(now, self.idle_ttl));
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::debug!(purged, "Purged idle sessions");
        }

        sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.sessions.write().await.remove(&id);
        Ok(())
    }
}
