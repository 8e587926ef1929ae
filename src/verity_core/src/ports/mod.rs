pub mod session_store;
pub mod verification_provider;
