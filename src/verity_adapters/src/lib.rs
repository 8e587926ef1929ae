pub mod config;
pub mod handlers;
pub mod persistence;
pub mod provider;
pub mod session;
pub mod templates;

pub use persistence::{HashMapSessionStore, RedisSessionStore};
pub use provider::{MockVerificationProvider, ProviderCall, TwilioVerifyClient};
pub use session::{ActiveSession, Committed, SessionManager};
