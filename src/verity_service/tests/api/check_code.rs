use verity_adapters::ProviderCall;
use verity_core::{FlashValue, VerificationStatus, keys};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{TestApp, location, session_id};

async fn app_with_code_sent() -> TestApp {
    let app = TestApp::new().await;
    let response = app
        .request_code("validuser", "validpassword", "+611234567890")
        .await;
    assert_eq!(location(&response), Some("/verify"));
    app
}

#[tokio::test]
async fn check_without_request_redirects_to_start() {
    let app = TestApp::new().await;

    let response = app.check_code("123456").await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), Some("/"));
    assert!(session_id(&response).is_none());
    assert!(app.provider.calls().await.is_empty());
}

#[tokio::test]
async fn verification_form_requires_a_sent_code() {
    let app = TestApp::new().await;

    let response = app.get("/verify").await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), Some("/"));
}

#[tokio::test]
async fn verification_form_shows_masked_number() {
    let app = app_with_code_sent().await;

    let response = app.get("/verify").await;

    assert_eq!(response.status().as_u16(), 200);
    let page = response.text().await.unwrap();
    assert!(page.contains("+61********90"));
    assert!(!page.contains("+611234567890"));
}

#[tokio::test]
async fn empty_code_is_rejected_without_calling_provider() {
    let app = app_with_code_sent().await;

    let response = app.check_code("  ").await;

    assert_eq!(location(&response), Some("/verify"));
    let record = app.session_of(&response).await.unwrap();
    assert_eq!(
        record.flash.get(keys::FORM_ERROR),
        Some(&FlashValue::from("Verification check failed: Invalid code."))
    );
    assert_eq!(app.provider.calls().await.len(), 1);

    let page = app.get("/verify").await.text().await.unwrap();
    assert!(page.contains("Verification check failed: Invalid code."));
}

#[tokio::test]
async fn approved_code_clears_session() {
    let app = app_with_code_sent().await;

    let response = app.check_code("123456").await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), Some("/verify"));
    let record = app.session_of(&response).await.unwrap();
    assert!(record.values.is_empty());
    assert_eq!(
        record.flash.get(keys::MESSAGE_SUCCESS),
        Some(&FlashValue::from("Verification check succeeded."))
    );
    assert_eq!(
        app.provider.calls().await.last(),
        Some(&ProviderCall::Check {
            to: "+611234567890".to_string(),
            code: "123456".to_string(),
        })
    );

    // Following the redirect: no number is bound any more, so the success
    // message is carried over to the request form
    let response = app.get("/verify").await;
    assert_eq!(location(&response), Some("/"));

    let page = app.get("/").await.text().await.unwrap();
    assert!(page.contains("Verification check succeeded."));

    let response = app.check_code("123456").await;
    assert_eq!(location(&response), Some("/"));
}

#[tokio::test]
async fn rejected_statuses_keep_number_for_retry() {
    for status in [
        "pending",
        "canceled",
        "max_attempts_reached",
        "deleted",
        "failed",
        "expired",
    ] {
        let app = app_with_code_sent().await;
        app.provider
            .answer_check(VerificationStatus::from(status))
            .await;

        let response = app.check_code("123456").await;

        assert_eq!(location(&response), Some("/verify"));
        let record = app.session_of(&response).await.unwrap();
        assert_eq!(record.values.get(keys::PHONE_NUMBER), Some("+611234567890"));
        assert_eq!(
            record.flash.get(keys::FORM_ERROR),
            Some(&FlashValue::from(format!(
                "Verification check failed. Reason: {status}"
            )))
        );
    }
}

#[tokio::test]
async fn provider_error_is_reported() {
    let app = app_with_code_sent().await;
    app.provider.fail_check("Something went wrong").await;

    let response = app.check_code("123456").await;

    assert_eq!(location(&response), Some("/verify"));
    let record = app.session_of(&response).await.unwrap();
    assert_eq!(record.values.get(keys::PHONE_NUMBER), Some("+611234567890"));
    assert_eq!(
        record.flash.get(keys::FORM_ERROR),
        Some(&FlashValue::from(
            "Verification check failed. Reason: Something went wrong"
        ))
    );
}

#[tokio::test]
async fn full_flow_against_twilio_api() {
    let twilio = MockServer::start().await;
    let service_sid = "VA0123456789";

    Mock::given(path(format!("/v2/Services/{service_sid}/Verifications")))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({ "status": "pending" })),
        )
        .expect(1)
        .mount(&twilio)
        .await;
    Mock::given(path(format!("/v2/Services/{service_sid}/VerificationCheck")))
        .and(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "approved" })),
        )
        .expect(1)
        .mount(&twilio)
        .await;

    let app = TestApp::with_twilio(twilio.uri(), service_sid).await;

    let response = app
        .request_code("validuser", "validpassword", "+611234567890")
        .await;
    assert_eq!(location(&response), Some("/verify"));

    let response = app.check_code("123456").await;
    assert_eq!(location(&response), Some("/verify"));
    let record = app.session_of(&response).await.unwrap();
    assert!(record.values.is_empty());
    assert_eq!(
        record.flash.get(keys::MESSAGE_SUCCESS),
        Some(&FlashValue::from("Verification check succeeded."))
    );
}

#[tokio::test]
async fn unreadable_body_without_request_redirects_to_start() {
    let app = TestApp::new().await;

    let response = app.post_raw("/verify", "code=1", None).await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), Some("/"));
    assert!(app.provider.calls().await.is_empty());
}

#[tokio::test]
async fn unreadable_body_counts_as_missing_code() {
    let app = app_with_code_sent().await;

    let response = app
        .post_raw(
            "/verify",
            "code=1&code=2",
            Some("application/x-www-form-urlencoded"),
        )
        .await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), Some("/verify"));
    assert_eq!(app.provider.calls().await.len(), 1);

    let page = app.get("/verify").await.text().await.unwrap();
    assert!(page.contains("Verification check failed: Invalid code."));
}

#[tokio::test]
async fn code_blank_after_markup_removal_is_rejected() {
    let app = app_with_code_sent().await;

    let response = app.check_code("<b> </b>").await;

    assert_eq!(location(&response), Some("/verify"));
    assert_eq!(app.provider.calls().await.len(), 1);
}
