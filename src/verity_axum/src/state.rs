use verity_adapters::SessionManager;
use verity_core::{SessionStore, VerificationProvider};

/// State shared by the verification routes.
#[derive(Clone)]
pub struct FlowState<P, S>
where
    P: VerificationProvider + Clone,
    S: SessionStore + Clone,
{
    pub provider: P,
    pub sessions: SessionManager<S>,
}

impl<P, S> FlowState<P, S>
where
    P: VerificationProvider + Clone,
    S: SessionStore + Clone,
{
    pub fn new(provider: P, sessions: SessionManager<S>) -> Self {
        Self { provider, sessions }
    }
}
