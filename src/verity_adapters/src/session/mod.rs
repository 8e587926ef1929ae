//! Loads the session of a request and writes it back once the request is done.

use verity_core::{
    FlashMessages, RequestContext, Session, SessionId, SessionRecord, SessionStore,
    SessionStoreError,
};

/// Session state of one in-flight request.
#[derive(Debug)]
pub struct ActiveSession {
    id: SessionId,
    persisted: bool,
    session: Session,
    flash: FlashMessages,
}

impl ActiveSession {
    fn fresh() -> Self {
        Self {
            id: SessionId::new(),
            persisted: false,
            session: Session::default(),
            flash: FlashMessages::default(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn context(&mut self) -> RequestContext<'_> {
        RequestContext::new(&mut self.session, &mut self.flash)
    }
}

/// What [`SessionManager::commit`] did with a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    /// The record was written; the browser must keep this id.
    Persisted(SessionId),
    /// Nothing was left to keep; the cookie can be dropped.
    Discarded,
}

#[derive(Clone)]
pub struct SessionManager<S>
where
    S: SessionStore,
{
    store: S,
    cookie_name: String,
}

impl<S> SessionManager<S>
where
    S: SessionStore,
{
    pub fn new(store: S, cookie_name: impl Into<String>) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resumes the session named by the cookie, or starts a new one when the
    /// cookie is missing, malformed or unknown to the store.
    #[tracing::instrument(name = "SessionManager::open", skip_all)]
    pub async fn open(&self, cookie_value: Option<&str>) -> Result<ActiveSession, SessionStoreError> {
        let Some(id) = cookie_value.and_then(|value| SessionId::parse(value).ok()) else {
            return Ok(ActiveSession::fresh());
        };

        match self.store.load(&id).await? {
            Some(record) => Ok(ActiveSession {
                id,
                persisted: true,
                session: record.values,
                flash: FlashMessages::from_previous(record.flash),
            }),
            None => Ok(ActiveSession::fresh()),
        }
    }

    /// Persists the session together with the values flashed for the next
    /// request, or removes it when both are empty.
    #[tracing::instrument(name = "SessionManager::commit", skip_all)]
    pub async fn commit(&self, active: ActiveSession) -> Result<Committed, SessionStoreError> {
        let record = SessionRecord {
            values: active.session,
            flash: active.flash.into_pending(),
        };

        if record.is_empty() {
            if active.persisted {
                self.store.delete(&active.id).await?;
            }
            return Ok(Committed::Discarded);
        }

        self.store.save(&active.id, record).await?;
        Ok(Committed::Persisted(active.id))
    }
}
