use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use carregamento::server::{
    controller::auth::{login, login_page, LoginForm},
    model::session::employee::SessionEmployeeCode,
};

use super::*;

fn form(functional_code: &str, password: &str) -> Form<LoginForm> {
    Form(LoginForm {
        functional_code: functional_code.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 303 to the listing and the functional code in session after a valid login
async fn logs_in_with_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_employee(TEST_EMPLOYEE_CODE, TEST_EMPLOYEE_PASSWORD)
        .build()
        .await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        form(TEST_EMPLOYEE_CODE, TEST_EMPLOYEE_PASSWORD),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/index");

    let code = SessionEmployeeCode::get(&test.session).await.unwrap();
    assert_eq!(code.as_deref(), Some(TEST_EMPLOYEE_CODE));

    Ok(())
}

#[tokio::test]
/// Expect surrounding whitespace in the functional code to be ignored
async fn trims_functional_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_employee(TEST_EMPLOYEE_CODE, TEST_EMPLOYEE_PASSWORD)
        .build()
        .await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        form(&format!("  {TEST_EMPLOYEE_CODE} "), TEST_EMPLOYEE_PASSWORD),
    )
    .await;

    assert!(result.is_ok());

    Ok(())
}

#[tokio::test]
/// Expect 401 with the login page and no session after a wrong password
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_employee(TEST_EMPLOYEE_CODE, TEST_EMPLOYEE_PASSWORD)
        .build()
        .await?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        form(TEST_EMPLOYEE_CODE, "wrong"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_string(resp).await;
    assert!(body.contains("Invalid functional code or password"));

    let code = SessionEmployeeCode::get(&test.session).await.unwrap();
    assert!(code.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 for a functional code with no employee
async fn rejects_unknown_employee() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = login(
        State(test.state()),
        test.session.clone(),
        form("000000", TEST_EMPLOYEE_PASSWORD),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect the login form without a session
async fn renders_login_form() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = login_page(test.session).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"name="functional_code""#));

    Ok(())
}

#[tokio::test]
/// Expect a redirect to the listing when already logged in
async fn login_form_redirects_when_logged_in() -> Result<(), TestError> {
    let test = logged_in_setup().await?;

    let resp = login_page(test.session).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/index");

    Ok(())
}
