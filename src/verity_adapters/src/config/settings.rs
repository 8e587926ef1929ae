use std::time::Duration;

use config::{Config, Environment, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use super::constants::{DEFAULT_SESSION_COOKIE_NAME, SETTINGS_FILE, env, prod};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct VeritySettings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub redis: RedisSettings,
    pub verification: VerificationSettings,
    pub twilio: TwilioSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub assets_dir: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreKind {
    Memory,
    Redis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub ttl_in_seconds: u64,
    pub store: SessionStoreKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisSettings {
    pub host_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Twilio,
    /// Accepts every number and approves every code.
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerificationSettings {
    pub provider: ProviderKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TwilioSettings {
    pub account_sid: String,
    pub auth_token: Secret<String>,
    pub verification_sid: String,
    pub base_url: String,
    pub timeout_in_millis: u64,
}

impl TwilioSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

impl VeritySettings {
    /// Loads defaults, then `config/base.json`, then `VERITY__*` variables and
    /// finally the Twilio credential variables. A `.env` file is read first.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        Self::build(settings_environment(), |name| std::env::var(name).ok())
    }

    fn build(
        environment: Environment,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("application.assets_dir", prod::ASSETS_DIR)?
            .set_default("session.cookie_name", DEFAULT_SESSION_COOKIE_NAME)?
            .set_default("session.ttl_in_seconds", prod::SESSION_TTL_IN_SECONDS as i64)?
            .set_default("session.store", "memory")?
            .set_default("redis.host_name", prod::REDIS_HOST_NAME)?
            .set_default("verification.provider", "twilio")?
            .set_default("twilio.account_sid", "")?
            .set_default("twilio.auth_token", "")?
            .set_default("twilio.verification_sid", "")?
            .set_default("twilio.base_url", prod::twilio::BASE_URL)?
            .set_default(
                "twilio.timeout_in_millis",
                prod::twilio::TIMEOUT_IN_MILLIS as i64,
            )?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(environment)
            .set_override_option(
                "twilio.account_sid",
                lookup(env::TWILIO_ACCOUNT_SID_ENV_VAR),
            )?
            .set_override_option("twilio.auth_token", lookup(env::TWILIO_AUTH_TOKEN_ENV_VAR))?
            .set_override_option(
                "twilio.verification_sid",
                lookup(env::TWILIO_VERIFICATION_SID_ENV_VAR),
            )?
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.verification.provider != ProviderKind::Twilio {
            return Ok(());
        }
        if self.twilio.account_sid.is_empty() {
            return Err(SettingsError::Missing(env::TWILIO_ACCOUNT_SID_ENV_VAR));
        }
        if self.twilio.auth_token.expose_secret().is_empty() {
            return Err(SettingsError::Missing(env::TWILIO_AUTH_TOKEN_ENV_VAR));
        }
        if self.twilio.verification_sid.is_empty() {
            return Err(SettingsError::Missing(env::TWILIO_VERIFICATION_SID_ENV_VAR));
        }
        Ok(())
    }
}

fn settings_environment() -> Environment {
    Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
        .prefix_separator(env::SETTINGS_ENV_SEPARATOR)
        .separator(env::SETTINGS_ENV_SEPARATOR)
        .try_parsing(true)
}
