//! Per-session state carried between the two steps of the verification flow.
//!
//! A [`Session`] is a plain string map that lives as long as the session
//! cookie. [`FlashMessages`] are one-shot values: whatever is flashed during
//! one request is readable during the next request only, and each value can be
//! read at most once.
//!
//! Both are persisted together as a [`SessionRecord`] by a
//! [`SessionStore`](crate::SessionStore) implementation.

use std::collections::BTreeMap;
use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::phone_number::PhoneNumber;

/// Well-known session and flash keys.
pub mod keys {
    /// Session key holding the number a code was sent to.
    pub const PHONE_NUMBER: &str = "phone-number";

    pub const FORM_ERROR: &str = "form-error";
    pub const FORM_ERRORS: &str = "form-errors";
    pub const FORM_DATA: &str = "form-data";
    pub const MESSAGE_SUCCESS: &str = "message-success";
}

#[derive(Debug, Error)]
#[error("Invalid session id")]
pub struct SessionIdError;

/// Opaque identifier stored in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(id: &str) -> Result<Self, SessionIdError> {
        Uuid::parse_str(id).map(Self).map_err(|_| SessionIdError)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Server-side key/value storage for one browser session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    values: BTreeMap<String, String>,
}

impl Session {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The number a code was sent to, if a verification is in progress.
    ///
    /// Empty or malformed values count as absent.
    pub fn bound_phone_number(&self) -> Option<PhoneNumber> {
        self.get(keys::PHONE_NUMBER)
            .filter(|number| !number.is_empty())
            .and_then(|number| PhoneNumber::try_from(number.to_string()).ok())
    }

    pub fn bind_phone_number(&mut self, number: &PhoneNumber) {
        self.set(keys::PHONE_NUMBER, number.as_str());
    }
}

/// A flashed value: either a single message or a field-to-text mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlashValue {
    Text(String),
    Fields(BTreeMap<String, String>),
}

impl FlashValue {
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Fields(_) => None,
        }
    }

    pub fn into_fields(self) -> Option<BTreeMap<String, String>> {
        match self {
            Self::Fields(fields) => Some(fields),
            Self::Text(_) => None,
        }
    }
}

impl From<String> for FlashValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FlashValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<BTreeMap<String, String>> for FlashValue {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self::Fields(fields)
    }
}

/// Flash messages of the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashMessages {
    current: BTreeMap<String, FlashValue>,
    next: BTreeMap<String, FlashValue>,
}

impl FlashMessages {
    /// Starts a request with the values flashed by the previous one.
    pub fn from_previous(current: BTreeMap<String, FlashValue>) -> Self {
        Self {
            current,
            next: BTreeMap::new(),
        }
    }

    /// Queues a value for the next request.
    pub fn flash(&mut self, key: impl Into<String>, value: impl Into<FlashValue>) {
        self.next.insert(key.into(), value.into());
    }

    /// Reads and consumes a value flashed by the previous request.
    pub fn get_flash(&mut self, key: &str) -> Option<FlashValue> {
        self.current.remove(key)
    }

    /// Carries every unread value over to the next request.
    ///
    /// Values flashed during this request take precedence.
    pub fn prolong(&mut self) {
        for (key, value) in mem::take(&mut self.current) {
            self.next.entry(key).or_insert(value);
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.next.is_empty()
    }

    /// Values to hand to the next request. Unread current values are dropped.
    pub fn into_pending(self) -> BTreeMap<String, FlashValue> {
        self.next
    }
}

/// What a [`SessionStore`](crate::SessionStore) persists for one session id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub values: Session,
    #[serde(default)]
    pub flash: BTreeMap<String, FlashValue>,
}

impl SessionRecord {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.flash.is_empty()
    }
}

/// Session and flash storage available to a single request.
///
/// Either may be missing, e.g. when the session middleware is not installed;
/// every use case has to cope with that.
#[derive(Debug)]
pub struct RequestContext<'a> {
    pub session: Option<&'a mut Session>,
    pub flash: Option<&'a mut FlashMessages>,
}

impl<'a> RequestContext<'a> {
    pub fn new(session: &'a mut Session, flash: &'a mut FlashMessages) -> Self {
        Self {
            session: Some(session),
            flash: Some(flash),
        }
    }

    pub fn empty() -> Self {
        Self {
            session: None,
            flash: None,
        }
    }

    pub fn flash(&mut self, key: &str, value: impl Into<FlashValue>) {
        if let Some(flash) = self.flash.as_deref_mut() {
            flash.flash(key, value);
        }
    }

    pub fn get_flash(&mut self, key: &str) -> Option<FlashValue> {
        self.flash.as_deref_mut()?.get_flash(key)
    }

    pub fn bound_phone_number(&self) -> Option<PhoneNumber> {
        self.session.as_deref()?.bound_phone_number()
    }
}
