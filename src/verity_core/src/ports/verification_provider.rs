use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    channel::Channel, phone_number::PhoneNumber, verification_code::VerificationCode,
    verification_status::VerificationStatus,
};

/// Failure reported by the verification provider (network, authentication or
/// a rejected request). The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Third-party service that sends one-time codes and checks them.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Sends a new one-time code to `phone_number` over `channel`.
    async fn start_verification(
        &self,
        phone_number: &PhoneNumber,
        channel: Channel,
    ) -> Result<(), ProviderError>;

    /// Checks `code` against the pending verification for `phone_number`.
    async fn check_verification(
        &self,
        code: &VerificationCode,
        phone_number: &PhoneNumber,
    ) -> Result<VerificationStatus, ProviderError>;
}
