use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;
use verity_core::{SessionId, SessionRecord, SessionStore, SessionStoreError};

use crate::config::prod;

struct StoredRecord {
    record: SessionRecord,
    expires_at: Instant,
}

/// In-memory session store. Records expire `ttl` after their last save;
/// expired records are dropped on load and swept on every save.
#[derive(Clone)]
pub struct HashMapSessionStore {
    records: Arc<DashMap<SessionId, StoredRecord>>,
    ttl: Duration,
}

impl Default for HashMapSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(prod::SESSION_TTL_IN_SECONDS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            records: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sweep(&self, now: Instant) {
        self.records.retain(|_, stored| stored.expires_at > now);
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        let now = Instant::now();
        let expired = match self.records.get(id) {
            Some(stored) if stored.expires_at > now => return Ok(Some(stored.record.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.records.remove_if(id, |_, stored| stored.expires_at <= now);
        }
        Ok(None)
    }

    async fn save(&self, id: &SessionId, record: SessionRecord) -> Result<(), SessionStoreError> {
        let now = Instant::now();
        self.sweep(now);
        self.records.insert(
            *id,
            StoredRecord {
                record,
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.records.remove(id);
        Ok(())
    }
}
