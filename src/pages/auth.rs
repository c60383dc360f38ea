use axum::response::Html;

use super::{layout, Flash};

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
        <label>Username <input type="text" name="username" required></label>
        <label>Password <input type="password" name="password" required></label>
        <p><button type="submit">{submit}</button></p>
    </form>"#
    )
}

pub fn signup_page(flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        r#"{}
    <p>Already have an account? <a href="/login">Log in</a>.</p>"#,
        credentials_form("/signup", "Sign up")
    );
    layout("Sign up", false, flash, &body)
}

pub fn login_page(flash: Option<&Flash>) -> Html<String> {
    let body = format!(
        r#"{}
    <p>No account yet? <a href="/signup">Sign up</a>.</p>"#,
        credentials_form("/login", "Log in")
    );
    layout("Login", false, flash, &body)
}
