use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use tokio::sync::RwLock;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use verity::{
    HashMapSessionStore, MockVerificationProvider, RedisSessionStore, SessionManager,
    SessionStore, TwilioVerifyClient, VerificationProvider, VerificationService,
    adapters::config::{ProviderKind, SessionStoreKind, VeritySettings},
    configure_redis,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = VeritySettings::load()?;

    match config.verification.provider {
        ProviderKind::Twilio => {
            let http_client = HttpClient::builder()
                .timeout(config.twilio.timeout())
                .build()?;
            let provider = TwilioVerifyClient::new(
                config.twilio.base_url.clone(),
                config.twilio.account_sid.clone(),
                config.twilio.auth_token.clone(),
                config.twilio.verification_sid.clone(),
                http_client,
            );
            run_with_provider(provider, &config).await
        }
        ProviderKind::Mock => {
            tracing::warn!("Using the mock verification provider, no codes will be sent");
            run_with_provider(MockVerificationProvider::new(), &config).await
        }
    }
}

async fn run_with_provider<P>(provider: P, config: &VeritySettings) -> Result<()>
where
    P: VerificationProvider + Clone + 'static,
{
    match config.session.store {
        SessionStoreKind::Memory => {
            let store = HashMapSessionStore::with_ttl(Duration::from_secs(
                config.session.ttl_in_seconds,
            ));
            run(provider, store, config).await
        }
        SessionStoreKind::Redis => {
            let redis_conn = Arc::new(RwLock::new(configure_redis(&config.redis.host_name)?));
            let store = RedisSessionStore::new(redis_conn, config.session.ttl_in_seconds);
            run(provider, store, config).await
        }
    }
}

async fn run<P, S>(provider: P, store: S, config: &VeritySettings) -> Result<()>
where
    P: VerificationProvider + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let sessions = SessionManager::new(store, config.session.cookie_name.clone());
    let service =
        VerificationService::new(provider, sessions, config.application.assets_dir.clone());

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    tracing::info!("Starting verification service...");

    service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
