//! Page layout shared by every view, and the generic error page.

use axum::response::Html;

use crate::server::{model::session::notice::Notice, view::escape};

/// Wraps page content with the shared document, navigation bar and pending notices.
///
/// # Arguments
/// - `title` - Page title
/// - `employee` - Functional code of the logged-in employee, shows the navigation when present
/// - `notices` - Notices to display above the content
/// - `content` - Already escaped HTML of the page body
pub fn layout(title: &str, employee: Option<&str>, notices: &[Notice], content: &str) -> Html<String> {
    let nav = match employee {
        Some(functional_code) => format!(
            r#"<nav><a href="/index">Loadings</a> <a href="/add">New loading</a> <span class="who">{}</span> <a href="/logout">Log out</a></nav>"#,
            escape(functional_code)
        ),
        None => String::new(),
    };

    let notices: String = notices
        .iter()
        .map(|notice| {
            format!(
                r#"<div class="notice notice-{}">{}</div>"#,
                notice.level.as_str(),
                escape(&notice.message)
            )
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title} - Carregamentos</title>
    <style>
        body {{ font-family: Arial, sans-serif; max-width: 960px; margin: 40px auto; padding: 0 20px; color: #222; }}
        nav {{ margin-bottom: 20px; padding-bottom: 10px; border-bottom: 1px solid #ccc; }}
        nav a {{ margin-right: 15px; }}
        nav .who {{ color: #666; margin-right: 15px; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ text-align: left; padding: 8px; border-bottom: 1px solid #ddd; }}
        label {{ display: block; margin-top: 10px; }}
        input[type="text"], input[type="password"], select {{ width: 100%; padding: 8px; margin-top: 5px; box-sizing: border-box; }}
        button {{ margin-top: 15px; padding: 8px 16px; cursor: pointer; }}
        form.inline {{ display: inline; }}
        form.inline button {{ margin-top: 0; }}
        .notice {{ padding: 10px; margin-bottom: 10px; border-left: 4px solid; }}
        .notice-success {{ background: #e8f5e9; border-color: #2e7d32; }}
        .notice-info {{ background: #e7f3ff; border-color: #007bff; }}
        .notice-warning {{ background: #fff8e1; border-color: #f9a825; }}
        .notice-danger {{ background: #fdecea; border-color: #c62828; }}
    </style>
</head>
<body>
    {nav}
    {notices}
    {content}
</body>
</html>
"#,
        title = escape(title),
    ))
}

/// Minimal page used for 404, 422 and 500 responses.
pub fn error_page(title: &str, message: &str) -> Html<String> {
    let content = format!(
        r#"<h1>{}</h1><p>{}</p><p><a href="/">Back</a></p>"#,
        escape(title),
        escape(message)
    );

    layout(title, None, &[], &content)
}
