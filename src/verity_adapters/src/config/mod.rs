pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    ApplicationSettings, ProviderKind, RedisSettings, SessionSettings, SessionStoreKind,
    SettingsError, TwilioSettings, VerificationSettings, VeritySettings,
};
