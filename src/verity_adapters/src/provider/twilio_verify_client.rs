use reqwest::{Client, Response, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use verity_core::{
    Channel, PhoneNumber, ProviderError, VerificationCode, VerificationProvider,
    VerificationStatus,
};

/// Twilio Verify v2 REST client.
#[derive(Clone)]
pub struct TwilioVerifyClient {
    http_client: Client,
    base_url: String,
    account_sid: String,
    auth_token: Secret<String>,
    verification_sid: String,
}

impl TwilioVerifyClient {
    pub fn new(
        base_url: String,
        account_sid: String,
        auth_token: Secret<String>,
        verification_sid: String,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            account_sid,
            auth_token,
            verification_sid,
        }
    }

    fn service_url(&self, resource: &str) -> Result<Url, ProviderError> {
        let base = Url::parse(&self.base_url).map_err(|e| ProviderError::new(e.to_string()))?;
        base.join(&format!(
            "/v2/Services/{}/{}",
            self.verification_sid, resource
        ))
        .map_err(|e| ProviderError::new(e.to_string()))
    }

    async fn post_form<T: Serialize>(
        &self,
        resource: &str,
        form: &T,
    ) -> Result<Response, ProviderError> {
        let url = self.service_url(resource)?;

        let response = self
            .http_client
            .post(url)
            .basic_auth(&self.account_sid, Some(self.auth_token.expose_secret()))
            .form(form)
            .send()
            .await
            .map_err(|e| ProviderError::new(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let message = response
            .json::<TwilioErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("Unexpected response status {}", status.as_u16()));

        Err(ProviderError::new(message))
    }
}

#[async_trait::async_trait]
impl VerificationProvider for TwilioVerifyClient {
    #[tracing::instrument(name = "Starting verification", skip_all, fields(to = %phone_number.masked(), %channel))]
    async fn start_verification(
        &self,
        phone_number: &PhoneNumber,
        channel: Channel,
    ) -> Result<(), ProviderError> {
        let request_body = StartVerificationRequest {
            to: phone_number.as_str(),
            channel: channel.as_str(),
        };

        self.post_form(VERIFICATIONS_RESOURCE, &request_body)
            .await?;

        Ok(())
    }

    #[tracing::instrument(name = "Checking verification", skip_all, fields(to = %phone_number.masked()))]
    async fn check_verification(
        &self,
        code: &VerificationCode,
        phone_number: &PhoneNumber,
    ) -> Result<VerificationStatus, ProviderError> {
        let request_body = CheckVerificationRequest {
            to: phone_number.as_str(),
            code: code.as_str(),
        };

        let check = self
            .post_form(VERIFICATION_CHECK_RESOURCE, &request_body)
            .await?
            .json::<VerificationCheckResponse>()
            .await
            .map_err(|e| ProviderError::new(e.to_string()))?;

        Ok(VerificationStatus::from(check.status.as_str()))
    }
}

const VERIFICATIONS_RESOURCE: &str = "Verifications";
const VERIFICATION_CHECK_RESOURCE: &str = "VerificationCheck";

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct StartVerificationRequest<'a> {
    to: &'a str,
    channel: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct CheckVerificationRequest<'a> {
    to: &'a str,
    code: &'a str,
}

#[derive(Deserialize, Debug)]
struct VerificationCheckResponse {
    status: String,
}

#[derive(Deserialize, Debug)]
struct TwilioErrorResponse {
    message: Option<String>,
}
