//! The session cookie. It only ever carries the opaque session id.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use verity_adapters::{ActiveSession, Committed, SessionManager};
use verity_core::SessionStore;

use crate::routes::FlowError;

pub fn create_session_cookie(cookie_name: &str, value: String) -> Cookie<'static> {
    Cookie::build((cookie_name.to_string(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn create_removal_cookie(cookie_name: &str) -> Cookie<'static> {
    let mut cookie = create_session_cookie(cookie_name, String::new());
    cookie.make_removal();
    cookie
}

/// Loads the session named by the request's cookie.
pub async fn open_session<S>(
    sessions: &SessionManager<S>,
    jar: &CookieJar,
) -> Result<ActiveSession, FlowError>
where
    S: SessionStore,
{
    let cookie_value = jar.get(sessions.cookie_name()).map(|cookie| cookie.value());
    Ok(sessions.open(cookie_value).await?)
}

/// Persists the session and points the cookie at it, or drops the cookie
/// when nothing was kept.
pub async fn commit_session<S>(
    sessions: &SessionManager<S>,
    jar: CookieJar,
    active: ActiveSession,
) -> Result<CookieJar, FlowError>
where
    S: SessionStore,
{
    let cookie_name = sessions.cookie_name();
    let had_cookie = jar.get(cookie_name).is_some();

    match sessions.commit(active).await? {
        Committed::Persisted(id) => Ok(jar.add(create_session_cookie(cookie_name, id.to_string()))),
        Committed::Discarded if had_cookie => Ok(jar.add(create_removal_cookie(cookie_name))),
        Committed::Discarded => Ok(jar),
    }
}
