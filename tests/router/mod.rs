//! End-to-end tests through the full router with an in-memory session layer.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use carregamento::server::router::routes;
use carregamento_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::{util::body_string, TestContextExt};

mod session;

async fn app() -> Result<Router, TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_employee(TEST_EMPLOYEE_CODE, TEST_EMPLOYEE_PASSWORD)
        .with_loading_record("ABC1A23", MOCK_STATUS)
        .build()
        .await?;

    Ok(routes()
        .with_state(test.state())
        .layer(SessionManagerLayer::new(MemoryStore::default()).with_secure(false)))
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Log in through the router and return the session cookie pair
async fn log_in(app: &Router) -> String {
    let resp = app
        .clone()
        .oneshot(post_form(
            "/login",
            None,
            &format!("functional_code={TEST_EMPLOYEE_CODE}&password={TEST_EMPLOYEE_PASSWORD}"),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let set_cookie = resp.headers()[header::SET_COOKIE].to_str().unwrap();

    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
/// Expect protected pages to redirect to login without a session cookie
async fn protected_pages_redirect_to_login() -> Result<(), TestError> {
    let app = app().await?;

    for uri in ["/index", "/add", "/edit/1"] {
        let resp = app.clone().oneshot(get(uri, None)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(resp.headers()[header::LOCATION], "/login", "{uri}");
    }

    let resp = app
        .clone()
        .oneshot(post_form("/delete/1", None, ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
/// Expect the session cookie from login to open the listing
async fn login_cookie_opens_listing() -> Result<(), TestError> {
    let app = app().await?;
    let cookie = log_in(&app).await;

    let resp = app
        .clone()
        .oneshot(get("/index", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("ABC1A23"));
    assert!(body.contains("Logged in successfully."));

    Ok(())
}

#[tokio::test]
/// Expect a form post to create a record visible in the listing
async fn add_form_creates_record() -> Result<(), TestError> {
    let app = app().await?;
    let cookie = log_in(&app).await;

    let resp = app
        .clone()
        .oneshot(post_form(
            "/add",
            Some(&cookie),
            "plate=XYZ9Z99&status=Em+coleta&route=&destination=&finalized=on",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = app
        .clone()
        .oneshot(get("/index", Some(&cookie)))
        .await
        .unwrap();
    let body = body_string(resp).await;
    assert!(body.find("XYZ9Z99").unwrap() < body.find("ABC1A23").unwrap());

    Ok(())
}

#[tokio::test]
/// Expect bad credentials to answer 401 without a session cookie
async fn bad_credentials_are_unauthorized() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .clone()
        .oneshot(post_form(
            "/login",
            None,
            &format!("functional_code={TEST_EMPLOYEE_CODE}&password=nope"),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());

    Ok(())
}

#[tokio::test]
/// Expect unknown paths to answer with the 404 page
async fn unknown_path_is_not_found() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app.oneshot(get("/nope", None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to describe the registered pages
async fn serves_openapi_document() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("/edit/{id}"));
    assert!(body.contains("/delete/{id}"));

    Ok(())
}

#[tokio::test]
/// Expect IDs that cannot name a record to answer 404 rather than a bad request
async fn invalid_record_ids_are_not_found() -> Result<(), TestError> {
    let app = app().await?;
    let cookie = log_in(&app).await;

    for uri in ["/edit/99999999999", "/edit/abc", "/edit/-1"] {
        let resp = app.clone().oneshot(get(uri, Some(&cookie))).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    for uri in ["/delete/99999999999", "/delete/abc", "/delete/-1"] {
        let resp = app
            .clone()
            .oneshot(post_form(uri, Some(&cookie), ""))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let resp = app
        .clone()
        .oneshot(post_form(
            "/edit/99999999999",
            Some(&cookie),
            "plate=ABC1A23&status=Em+coleta",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the session gate to run before the record ID is checked
async fn invalid_record_id_without_session_redirects_to_login() -> Result<(), TestError> {
    let app = app().await?;

    let resp = app.clone().oneshot(get("/edit/abc", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/login");

    let resp = app
        .oneshot(post_form("/delete/99999999999", None, ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/login");

    Ok(())
}
