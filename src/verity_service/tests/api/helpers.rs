use reqwest::{Client, Response, header::SET_COOKIE};
use secrecy::Secret;
use verity_adapters::{
    HashMapSessionStore, MockVerificationProvider, SessionManager, TwilioVerifyClient,
    config::{DEFAULT_SESSION_COOKIE_NAME, test},
};
use verity_core::{SessionId, SessionRecord, SessionStore, VerificationProvider};
use verity_service::VerificationService;

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub provider: MockVerificationProvider,
    pub session_store: HashMapSessionStore,
}

impl TestApp {
    /// Spawns the service with an in-process provider.
    pub async fn new() -> Self {
        let provider = MockVerificationProvider::new();
        Self::spawn(provider.clone(), provider).await
    }

    /// Spawns the service against a Twilio API served at `base_url`.
    pub async fn with_twilio(base_url: String, verification_sid: &str) -> Self {
        let http_client = Client::builder()
            .timeout(test::twilio::TIMEOUT)
            .build()
            .unwrap();
        let twilio = TwilioVerifyClient::new(
            base_url,
            "AC0123456789".to_string(),
            Secret::new("auth-token".to_string()),
            verification_sid.to_string(),
            http_client,
        );
        Self::spawn(twilio, MockVerificationProvider::new()).await
    }

    async fn spawn<P>(provider: P, mock: MockVerificationProvider) -> Self
    where
        P: VerificationProvider + Clone + 'static,
    {
        let session_store = HashMapSessionStore::new();
        let sessions = SessionManager::new(session_store.clone(), DEFAULT_SESSION_COOKIE_NAME);
        let assets_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets").to_string();

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = VerificationService::new(provider, sessions, assets_dir);
        tokio::spawn(service.run_standalone(listener));

        let http_client = Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            provider: mock,
            session_store,
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Posts `body` as is, with `content_type` when given.
    pub async fn post_raw(&self, path: &str, body: &str, content_type: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}{}", &self.address, path))
            .body(body.to_string());
        if let Some(content_type) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn request_code(&self, username: &str, password: &str, number: &str) -> Response {
        self.post_form(
            "/",
            &[("username", username), ("password", password), ("number", number)],
        )
        .await
    }

    pub async fn check_code(&self, code: &str) -> Response {
        self.post_form("/verify", &[("code", code)]).await
    }

    /// Session record referenced by the `Set-Cookie` header of `response`.
    pub async fn session_of(&self, response: &Response) -> Option<SessionRecord> {
        let id = session_id(response)?;
        self.session_store.load(&id).await.unwrap()
    }
}

pub fn session_id(response: &Response) -> Option<SessionId> {
    let prefix = format!("{DEFAULT_SESSION_COOKIE_NAME}=");
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .filter_map(|rest| rest.split(';').next())
        .find_map(|value| SessionId::parse(value).ok())
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
