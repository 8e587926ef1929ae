use crate::helpers::{TestApp, session_id};

#[tokio::test]
async fn request_form_renders() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/html; charset=utf-8")
    );
    // Nothing to keep, so no session is started
    assert!(session_id(&response).is_none());

    let page = response.text().await.unwrap();
    assert!(page.contains(r#"name="username""#));
    assert!(page.contains(r#"name="password""#));
    assert!(page.contains(r#"name="number""#));
}

#[tokio::test]
async fn session_cookie_is_http_only_and_lax() {
    let app = TestApp::new().await;

    let response = app
        .request_code("validuser", "validpassword", "+611234567890")
        .await;

    let cookie = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("verity_session="))
        .expect("session cookie is set")
        .to_string();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = TestApp::new().await;

    let response = app.get("/assets/styles.css").await;

    assert_eq!(response.status().as_u16(), 200);
}
