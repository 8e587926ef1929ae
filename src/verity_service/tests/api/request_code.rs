use verity_adapters::ProviderCall;
use verity_core::{Channel, FlashValue, keys};

use crate::helpers::{TestApp, location};

#[tokio::test]
async fn valid_request_sends_code_and_redirects_to_verify() {
    let app = TestApp::new().await;

    let response = app
        .request_code("validuser", "validpassword", "+611234567890")
        .await;

    assert_eq!(response.status().as_u16(), 302);
    assert_eq!(location(&response), Some("/verify"));

    let record = app.session_of(&response).await.expect("session is stored");
    assert_eq!(record.values.get(keys::PHONE_NUMBER), Some("+611234567890"));
    assert_eq!(
        app.provider.calls().await,
        vec![ProviderCall::Start {
            to: "+611234567890".to_string(),
            channel: Channel::Sms,
        }]
    );
}

#[tokio::test]
async fn invalid_input_redirects_back_without_calling_provider() {
    let test_cases = [
        ("username", "password", "+610409123456"),
        ("user", "password123", "+610409123456"),
        ("username", "password123", "widgets"),
        ("username", "password123", "12345"),
        ("", "", ""),
    ];

    for (username, password, number) in test_cases {
        let app = TestApp::new().await;

        let response = app.request_code(username, password, number).await;

        assert_eq!(response.status().as_u16(), 302);
        assert_eq!(location(&response), Some("/"), "{username}/{number}");

        let record = app.session_of(&response).await.expect("flash is stored");
        assert!(record.values.get(keys::PHONE_NUMBER).is_none());
        assert!(record.flash.contains_key(keys::FORM_ERRORS));
        assert!(record.flash.contains_key(keys::FORM_DATA));
        assert!(app.provider.calls().await.is_empty());
    }
}

#[tokio::test]
async fn missing_fields_are_treated_as_empty() {
    let app = TestApp::new().await;

    let response = app.post_form("/", &[("username", "validuser")]).await;

    assert_eq!(location(&response), Some("/"));
    let record = app.session_of(&response).await.unwrap();
    let errors = record.flash[keys::FORM_ERRORS].clone().into_fields().unwrap();
    assert_eq!(errors["password"], "Value is required and can't be empty");
    assert_eq!(errors["number"], "Value is required and can't be empty");
    assert!(!errors.contains_key("username"));
}

#[tokio::test]
async fn provider_failure_redirects_back_with_error() {
    let app = TestApp::new().await;
    app.provider.fail_start("Unable to create record").await;

    let response = app
        .request_code("validuser", "validpassword", "+611234567890")
        .await;

    assert_eq!(location(&response), Some("/"));
    let record = app.session_of(&response).await.unwrap();
    assert!(record.values.get(keys::PHONE_NUMBER).is_none());
    assert_eq!(
        record.flash.get(keys::FORM_ERROR),
        Some(&FlashValue::from(
            "Verification request failed. Reason: Unable to create record"
        ))
    );

    // The error and the submitted values are shown once on the form
    let page = app.get("/").await.text().await.unwrap();
    assert!(page.contains("Verification request failed. Reason: Unable to create record"));
    assert!(page.contains(r#"value="validuser""#));
    assert!(!page.contains("validpassword"));

    let page = app.get("/").await.text().await.unwrap();
    assert!(!page.contains("Verification request failed"));
}

#[tokio::test]
async fn field_errors_are_rendered_on_the_form() {
    let app = TestApp::new().await;

    app.request_code("user", "password12", "widgets").await;
    let response = app.get("/").await;

    assert_eq!(response.status().as_u16(), 200);
    let page = response.text().await.unwrap();
    assert!(page.contains("The input is less than 5 characters long"));
    assert!(page.contains("The input is not a valid E.164 phone number"));
    assert!(page.contains(r#"value="widgets""#));
}

#[tokio::test]
async fn unreadable_body_counts_as_missing_fields() {
    let test_cases = [
        ("number=1&number=2", Some("application/x-www-form-urlencoded")),
        ("username=validuser&password=validpassword&number=%2B611234567890", None),
    ];

    for (body, content_type) in test_cases {
        let app = TestApp::new().await;

        let response = app.post_raw("/", body, content_type).await;

        assert_eq!(response.status().as_u16(), 302, "{body}");
        assert_eq!(location(&response), Some("/"), "{body}");
        assert!(app.provider.calls().await.is_empty());

        let record = app.session_of(&response).await.expect("flash is stored");
        let errors = record
            .flash
            .get(keys::FORM_ERRORS)
            .cloned()
            .and_then(FlashValue::into_fields)
            .unwrap();
        assert_eq!(errors["number"], "Value is required and can't be empty");
    }
}
