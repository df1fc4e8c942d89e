use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use carregamento::server::{
    controller::loading::{add, add_page, list},
    model::loading::LoadingForm,
};

use super::*;

#[tokio::test]
/// Expect the creation form with a session
async fn renders_creation_form() -> Result<(), TestError> {
    let test = logged_in_setup().await?;

    let resp = add_page(State(test.state()), test.session)
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"action="/add""#));
    assert!(body.contains("Não chegou para coletar"));

    Ok(())
}

#[tokio::test]
/// Expect 303 to the listing and the new record at the top of it
async fn creates_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_app_tables()
        .with_employee(TEST_EMPLOYEE_CODE, TEST_EMPLOYEE_PASSWORD)
        .with_loading_record("DEF2B34", MOCK_STATUS)
        .build()
        .await?;
    test.log_in(TEST_EMPLOYEE_CODE).await;

    let form = LoadingForm {
        plate: "ABC1A23".to_string(),
        status: Some("Em coleta".to_string()),
        ..Default::default()
    };
    let resp = add(State(test.state()), test.session.clone(), Form(form))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/index");

    let resp = list(State(test.state()), test.session)
        .await
        .unwrap()
        .into_response();
    let body = body_string(resp).await;
    assert!(body.contains("Loading ABC1A23 added."));
    assert!(body.find("ABC1A23").unwrap() < body.find("DEF2B34").unwrap());

    Ok(())
}

#[tokio::test]
/// Expect 422 with the creation form when the plate is blank
async fn rejects_blank_plate() -> Result<(), TestError> {
    let test = logged_in_setup().await?;

    let resp = add(
        State(test.state()),
        test.session,
        Form(form("   ", MOCK_STATUS)),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(resp).await;
    assert!(body.contains("Plate is required."));
    assert!(body.contains(r#"action="/add""#));

    Ok(())
}

#[tokio::test]
/// Expect 422 when the status is not one of the listed ones
async fn rejects_unknown_status() -> Result<(), TestError> {
    let test = logged_in_setup().await?;

    let resp = add(
        State(test.state()),
        test.session,
        Form(form("ABC1A23", "Perdido")),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
/// Expect a redirect to login without a session and nothing written
async fn redirects_without_session() -> Result<(), TestError> {
    let test = test_setup_with_app_tables!()?;

    let result = add(
        State(test.state()),
        test.session,
        Form(form("ABC1A23", MOCK_STATUS)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
/// Expect 422 and nothing stored when the plate exceeds its column length
async fn rejects_overlong_plate() -> Result<(), TestError> {
    let test = logged_in_setup().await?;

    let resp = add(
        State(test.state()),
        test.session.clone(),
        Form(form(&"A".repeat(500), MOCK_STATUS)),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(resp).await;
    assert!(body.contains("Plate must be at most 20 characters."));

    let resp = list(State(test.state()), test.session)
        .await
        .unwrap()
        .into_response();
    let body = body_string(resp).await;
    assert!(body.contains("No loadings yet."));

    Ok(())
}
