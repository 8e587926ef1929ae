use std::sync::Arc;

use tokio::sync::RwLock;
use verity_core::{
    Channel, PhoneNumber, ProviderError, VerificationCode, VerificationProvider,
    VerificationStatus,
};

/// A call received by [`MockVerificationProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    Start { to: String, channel: Channel },
    Check { to: String, code: String },
}

#[derive(Debug)]
struct MockState {
    start_outcome: Result<(), ProviderError>,
    check_outcome: Result<VerificationStatus, ProviderError>,
    calls: Vec<ProviderCall>,
}

/// In-process provider that accepts every send and approves every code
/// unless told otherwise. Clones share state.
#[derive(Debug, Clone)]
pub struct MockVerificationProvider {
    state: Arc<RwLock<MockState>>,
}

impl Default for MockVerificationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockVerificationProvider {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockState {
                start_outcome: Ok(()),
                check_outcome: Ok(VerificationStatus::Approved),
                calls: Vec::new(),
            })),
        }
    }

    pub async fn fail_start(&self, message: impl Into<String>) {
        self.state.write().await.start_outcome = Err(ProviderError::new(message));
    }

    pub async fn answer_check(&self, status: VerificationStatus) {
        self.state.write().await.check_outcome = Ok(status);
    }

    pub async fn fail_check(&self, message: impl Into<String>) {
        self.state.write().await.check_outcome = Err(ProviderError::new(message));
    }

    pub async fn calls(&self) -> Vec<ProviderCall> {
        self.state.read().await.calls.clone()
    }
}

#[async_trait::async_trait]
impl VerificationProvider for MockVerificationProvider {
    async fn start_verification(
        &self,
        phone_number: &PhoneNumber,
        channel: Channel,
    ) -> Result<(), ProviderError> {
        let mut state = self.state.write().await;
        state.calls.push(ProviderCall::Start {
            to: phone_number.to_string(),
            channel,
        });
        state.start_outcome.clone()
    }

    async fn check_verification(
        &self,
        code: &VerificationCode,
        phone_number: &PhoneNumber,
    ) -> Result<VerificationStatus, ProviderError> {
        let mut state = self.state.write().await;
        state.calls.push(ProviderCall::Check {
            to: phone_number.to_string(),
            code: code.as_str().to_string(),
        });
        state.check_outcome.clone()
    }
}
