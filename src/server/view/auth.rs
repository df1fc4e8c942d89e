//! Login page.

use axum::response::Html;

use crate::server::{model::session::notice::Notice, view::page::layout};

/// Login form posting the functional code and password to `/login`.
pub fn login_page(notices: &[Notice]) -> Html<String> {
    let content = r#"<h1>Login</h1>
    <form method="POST" action="/login">
        <label>
            Functional code:
            <input type="text" name="functional_code" required autofocus>
        </label>
        <label>
            Password:
            <input type="password" name="password" required>
        </label>
        <button type="submit">Log in</button>
    </form>"#;

    layout("Login", None, notices, content)
}
