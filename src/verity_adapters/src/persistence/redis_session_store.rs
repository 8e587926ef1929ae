use std::sync::Arc;

use redis::{Commands, Connection};
use tokio::sync::RwLock;
use verity_core::{SessionId, SessionRecord, SessionStore, SessionStoreError};

/// Session records stored as JSON with a sliding expiry.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: Arc<RwLock<Connection>>,
    session_ttl: u64,
}

impl RedisSessionStore {
    pub fn new(conn: Arc<RwLock<Connection>>, session_ttl: u64) -> Self {
        Self { conn, session_ttl }
    }
}

#[async_trait::async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        let key = get_key(id);
        let mut conn = self.conn.write().await;

        let json: Option<String> = conn
            .get(&key)
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))?;

        json.map(|json| {
            serde_json::from_str(&json).map_err(|e| SessionStoreError::Corrupt(e.to_string()))
        })
        .transpose()
    }

    async fn save(&self, id: &SessionId, record: SessionRecord) -> Result<(), SessionStoreError> {
        let key = get_key(id);
        let json =
            serde_json::to_string(&record).map_err(|e| SessionStoreError::Corrupt(e.to_string()))?;

        let mut conn = self.conn.write().await;
        conn.set_ex(key, json, self.session_ttl)
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let key = get_key(id);
        let mut conn = self.conn.write().await;
        conn.del(key)
            .map_err(|e| SessionStoreError::Unavailable(e.to_string()))
    }
}

const SESSION_KEY_PREFIX: &str = "session:";

fn get_key(id: &SessionId) -> String {
    format!("{}{}", SESSION_KEY_PREFIX, id)
}
