//! Loading record listing and forms.

use axum::response::Html;

use crate::server::{
    model::{db::LoadingRecordModel, loading::LoadingStatus, session::notice::Notice},
    view::{escape, page::layout},
};

/// Table of all loading records in the order given.
pub fn list_page(
    employee: &str,
    notices: &[Notice],
    records: &[LoadingRecordModel],
) -> Html<String> {
    let rows: String = if records.is_empty() {
        r#"<tr><td colspan="8">No loadings yet.</td></tr>"#.to_string()
    } else {
        records.iter().map(record_row).collect()
    };

    let content = format!(
        r#"<h1>Loadings</h1>
    <p><a href="/add">New loading</a></p>
    <table>
        <thead>
            <tr><th>Plate</th><th>Status</th><th>Route</th><th>Destination</th><th>Finalized</th><th>Updated at</th><th>Updated by</th><th></th></tr>
        </thead>
        <tbody>
            {rows}
        </tbody>
    </table>"#
    );

    layout("Loadings", Some(employee), notices, &content)
}

fn record_row(record: &LoadingRecordModel) -> String {
    format!(
        r#"<tr>
                <td>{plate}</td>
                <td>{status}</td>
                <td>{route}</td>
                <td>{destination}</td>
                <td>{finalized}</td>
                <td>{updated_at}</td>
                <td>{updated_by}</td>
                <td>
                    <a href="/edit/{id}">Edit</a>
                    <form class="inline" method="POST" action="/delete/{id}" onsubmit="return confirm('Delete this loading?');">
                        <button type="submit">Delete</button>
                    </form>
                </td>
            </tr>"#,
        id = record.id,
        plate = escape(&record.plate),
        status = escape(&record.status),
        route = escape(record.route.as_deref().unwrap_or_default()),
        destination = escape(record.destination.as_deref().unwrap_or_default()),
        finalized = if record.finalized { "Yes" } else { "No" },
        updated_at = record.updated_at.format("%d/%m/%Y %H:%M"),
        updated_by = escape(record.updated_by.as_deref().unwrap_or_default()),
    )
}

/// Empty creation form posting to `/add`.
pub fn add_page(employee: &str, notices: &[Notice]) -> Html<String> {
    let form = record_form("/add", None, "Add");
    let content = format!("<h1>New loading</h1>\n    {form}");

    layout("New loading", Some(employee), notices, &content)
}

/// Edit form pre-filled with the stored record, posting to `/edit/{id}`.
pub fn edit_page(employee: &str, notices: &[Notice], record: &LoadingRecordModel) -> Html<String> {
    let form = record_form(&format!("/edit/{}", record.id), Some(record), "Save");
    let content = format!(
        "<h1>Edit loading {}</h1>\n    {form}",
        escape(&record.plate)
    );

    layout("Edit loading", Some(employee), notices, &content)
}

fn record_form(action: &str, record: Option<&LoadingRecordModel>, submit: &str) -> String {
    let value = |field: Option<&str>| escape(field.unwrap_or_default());

    let plate = value(record.map(|r| r.plate.as_str()));
    let route = value(record.and_then(|r| r.route.as_deref()));
    let destination = value(record.and_then(|r| r.destination.as_deref()));
    let checked = if record.is_some_and(|r| r.finalized) {
        " checked"
    } else {
        ""
    };

    let current_status = record.map(|r| r.status.as_str());
    let options: String = LoadingStatus::ALL
        .iter()
        .map(|status| {
            let selected = if current_status == Some(status.label()) {
                " selected"
            } else {
                ""
            };

            format!(
                r#"<option value="{label}"{selected}>{label}</option>"#,
                label = escape(status.label())
            )
        })
        .collect();

    format!(
        r#"<form method="POST" action="{action}">
        <label>
            Plate:
            <input type="text" name="plate" value="{plate}" maxlength="20" required>
        </label>
        <label>
            Status:
            <select name="status">{options}</select>
        </label>
        <label>
            Route:
            <input type="text" name="route" value="{route}" maxlength="100">
        </label>
        <label>
            Destination:
            <input type="text" name="destination" value="{destination}" maxlength="200">
        </label>
        <label>
            <input type="checkbox" name="finalized" value="on"{checked}> Delivery finalized
        </label>
        <button type="submit">{submit}</button>
        <a href="/index">Cancel</a>
    </form>"#,
        action = escape(action),
        submit = escape(submit),
    )
}
