//! # Verity - Two-step phone verification
//!
//! Facade crate that re-exports the public APIs of the verity components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! verity = { path = "../verity" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `PhoneNumber`, `VerificationCode`, `Session`, etc.
//! - **Ports**: `VerificationProvider`, `SessionStore`
//! - **Use cases**: `RequestCodeUseCase`, `CheckCodeUseCase` and the form views
//! - **Adapters**: `TwilioVerifyClient`, `RedisSessionStore`, `SessionManager`, etc.
//! - **Service**: `VerificationService` - the web application

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use verity_core::*;
}

pub use verity_core::{
    Channel, CodeRequestInput, FlashMessages, FlashValue, PhoneNumber, RequestContext, Route,
    Session, SessionId, SessionRecord, VerificationCode, VerificationStatus,
};

// ============================================================================
// Ports
// ============================================================================

pub use verity_core::{ProviderError, SessionStore, SessionStoreError, VerificationProvider};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use verity_application::*;
}

pub use verity_application::{
    CheckCodeUseCase, CodeRequestFormUseCase, CodeVerificationFormUseCase, RequestCodeUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic handlers
    pub mod handlers {
        pub use verity_adapters::handlers::*;
    }

    /// Session store implementations
    pub mod persistence {
        pub use verity_adapters::persistence::*;
    }

    /// Verification provider clients
    pub mod provider {
        pub use verity_adapters::provider::*;
    }

    /// Configuration
    pub mod config {
        pub use verity_adapters::config::*;
    }

    /// Axum routes
    pub mod axum {
        pub use verity_axum::*;
    }
}

pub use verity_adapters::{
    HashMapSessionStore, MockVerificationProvider, RedisSessionStore, SessionManager,
    TwilioVerifyClient,
};

// ============================================================================
// Verification Service (Main Entry Point)
// ============================================================================

pub use verity_service::{
    VerificationService,
    helpers::{configure_redis, get_redis_client},
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
