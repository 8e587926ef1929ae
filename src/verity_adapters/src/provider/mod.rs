pub mod mock_provider;
pub mod twilio_verify_client;

pub use mock_provider::{MockVerificationProvider, ProviderCall};
pub use twilio_verify_client::TwilioVerifyClient;
