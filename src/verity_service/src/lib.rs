pub mod helpers;
pub mod tracing;
pub mod verification_service;

pub use verification_service::VerificationService;
