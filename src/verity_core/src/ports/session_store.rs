use async_trait::async_trait;
use thiserror::Error;

use crate::session::{SessionId, SessionRecord};

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
    #[error("Corrupt session record: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns `None` for unknown or expired ids.
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError>;
    async fn save(&self, id: &SessionId, record: SessionRecord) -> Result<(), SessionStoreError>;
    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError>;
}
