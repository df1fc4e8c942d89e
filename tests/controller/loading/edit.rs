use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use carregamento::server::controller::loading::{edit, edit_page};

use super::*;

#[tokio::test]
/// Expect the edit form pre-filled with the stored record
async fn renders_prefilled_form() -> Result<(), TestError> {
    let mut test = logged_in_setup().await?;
    let record = test.loading().insert_mock_record("ABC1A23").await?;

    let resp = edit_page(State(test.state()), test.session.clone(), Ok(Path(record.id)))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains(r#"value="ABC1A23""#));
    assert!(body.contains(&format!(r#"action="/edit/{}""#, record.id)));

    Ok(())
}

#[tokio::test]
/// Expect 404 for the edit form of a missing record
async fn edit_form_not_found() -> Result<(), TestError> {
    let test = logged_in_setup().await?;

    let result = edit_page(State(test.state()), test.session, Ok(Path(42))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 303 to the listing after an update
async fn updates_record() -> Result<(), TestError> {
    let mut test = logged_in_setup().await?;
    let record = test.loading().insert_mock_record("ABC1A23").await?;

    let resp = edit(
        State(test.state()),
        test.session.clone(),
        Ok(Path(record.id)),
        Form(form("XYZ9Z99", "Finalizado a coleta")),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/index");

    let resp = edit_page(State(test.state()), test.session, Ok(Path(record.id)))
        .await
        .unwrap()
        .into_response();
    let body = body_string(resp).await;
    assert!(body.contains(r#"value="XYZ9Z99""#));
    assert!(body.contains("Loading XYZ9Z99 updated."));

    Ok(())
}

#[tokio::test]
/// Expect 404 for an update of a missing record, even with an invalid payload
async fn update_not_found_regardless_of_payload() -> Result<(), TestError> {
    let test = logged_in_setup().await?;

    for payload in [form("ABC1A23", MOCK_STATUS), form("", MOCK_STATUS)] {
        let result = edit(
            State(test.state()),
            test.session.clone(),
            Ok(Path(42)),
            Form(payload),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    Ok(())
}

#[tokio::test]
/// Expect 422 with the stored values when the update fails validation
async fn rejects_blank_plate_with_stored_values() -> Result<(), TestError> {
    let mut test = logged_in_setup().await?;
    let record = test.loading().insert_mock_record("ABC1A23").await?;

    let resp = edit(
        State(test.state()),
        test.session,
        Ok(Path(record.id)),
        Form(form("", MOCK_STATUS)),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(resp).await;
    assert!(body.contains("Plate is required."));
    assert!(body.contains(r#"value="ABC1A23""#));

    Ok(())
}
