//! Session cookie attributes of the layer built at startup.

use axum::http::{header, StatusCode};
use carregamento::server::{config::Config, router::routes, startup::connect_to_session};
use carregamento_test_utils::prelude::*;
use tower::ServiceExt;

use super::post_form;
use crate::TestContextExt;

async fn login_set_cookie(config: &Config) -> Result<String, TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_employee(TEST_EMPLOYEE_CODE, TEST_EMPLOYEE_PASSWORD)
        .build()
        .await?;
    let session = connect_to_session(config).await.unwrap();
    let app = routes().with_state(test.state()).layer(session);

    let resp = app
        .oneshot(post_form(
            "/login",
            None,
            &format!("functional_code={TEST_EMPLOYEE_CODE}&password={TEST_EMPLOYEE_PASSWORD}"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    Ok(resp.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string())
}

#[tokio::test]
/// Expect an HTTP-only, Lax cookie expiring after an hour of inactivity by default
async fn default_session_cookie_attributes() -> Result<(), TestError> {
    let config = Config::from_lookup(|_| None).unwrap();

    let set_cookie = login_set_cookie(&config).await?;

    assert!(set_cookie.contains("HttpOnly"), "{set_cookie}");
    assert!(set_cookie.contains("SameSite=Lax"), "{set_cookie}");
    assert!(set_cookie.contains("Max-Age=3600"), "{set_cookie}");

    Ok(())
}

#[tokio::test]
/// Expect the inactivity expiry to follow SESSION_INACTIVITY_MINUTES
async fn configured_inactivity_expiry() -> Result<(), TestError> {
    let config = Config::from_lookup(|var| {
        (var == "SESSION_INACTIVITY_MINUTES").then(|| "15".to_string())
    })
    .unwrap();

    let set_cookie = login_set_cookie(&config).await?;

    assert!(set_cookie.contains("Max-Age=900"), "{set_cookie}");

    Ok(())
}
