use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use carregamento::server::controller::loading::{delete, list};

use super::*;

#[tokio::test]
/// Expect 303 to the listing and the record gone from it
async fn deletes_record() -> Result<(), TestError> {
    let mut test = logged_in_setup().await?;
    let record = test.loading().insert_mock_record("ABC1A23").await?;

    let resp = delete(State(test.state()), test.session.clone(), Ok(Path(record.id)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/index");

    let resp = list(State(test.state()), test.session)
        .await
        .unwrap()
        .into_response();
    let body = body_string(resp).await;
    assert!(!body.contains("ABC1A23"));

    Ok(())
}

#[tokio::test]
/// Expect 404 when deleting the same record twice
async fn second_delete_not_found() -> Result<(), TestError> {
    let mut test = logged_in_setup().await?;
    let record = test.loading().insert_mock_record("ABC1A23").await?;

    delete(State(test.state()), test.session.clone(), Ok(Path(record.id)))
        .await
        .unwrap();
    let result = delete(State(test.state()), test.session, Ok(Path(record.id))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a redirect to login without a session and the record kept
async fn redirects_without_session() -> Result<(), TestError> {
    let mut test = test_setup_with_app_tables!()?;
    let record = test.loading().insert_mock_record("ABC1A23").await?;

    let result = delete(State(test.state()), test.session.clone(), Ok(Path(record.id))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    Ok(())
}
