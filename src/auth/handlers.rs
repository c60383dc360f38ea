use axum::{
    extract::{FromRef, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::{
        dto::{LoginForm, SignupForm},
        extractors::CurrentUser,
        services::{authenticate, register, SessionKeys, SignupOutcome, MAX_USERNAME_CHARS},
    },
    cookies::{clear_flash_cookie, clear_session_cookie, flash_cookie, read_flash, session_cookie},
    error::AppError,
    pages::{login_page, signup_page, Flash},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup_form).post(signup))
        .route("/login", get(login_form).post(login))
        .route("/logout", get(logout))
}

/// Render a page that displays any pending flash, expiring it in the same response.
fn render_consuming_flash(headers: &HeaderMap, render: fn(Option<&Flash>) -> Html<String>) -> Response {
    let flash = read_flash(headers);
    let page = render(flash.as_ref());
    if flash.is_some() {
        (AppendHeaders([(SET_COOKIE, clear_flash_cookie())]), page).into_response()
    } else {
        page.into_response()
    }
}

pub async fn signup_form(headers: HeaderMap) -> Response {
    render_consuming_flash(&headers, signup_page)
}

#[instrument(skip(state, form), fields(username = %form.username))]
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    match register(&state.db, &form.username, &form.password).await? {
        SignupOutcome::UsernameTaken => {
            Ok(signup_page(Some(&Flash::error("Username already exists."))).into_response())
        }
        SignupOutcome::UsernameTooLong => Ok(signup_page(Some(&Flash::error(format!(
            "Username must be at most {MAX_USERNAME_CHARS} characters."
        ))))
        .into_response()),
        SignupOutcome::Created(_) => {
            let flash = Flash::success("Account created. Please login.");
            Ok((
                AppendHeaders([(SET_COOKIE, flash_cookie(&flash))]),
                Redirect::to("/login"),
            )
                .into_response())
        }
    }
}

pub async fn login_form(headers: HeaderMap) -> Response {
    render_consuming_flash(&headers, login_page)
}

#[instrument(skip(state, form), fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let Some(user) = authenticate(&state.db, &form.username, &form.password).await? else {
        return Ok(login_page(Some(&Flash::error("Invalid credentials"))).into_response());
    };

    let keys = SessionKeys::from_ref(&state);
    let token = keys.sign(user.id)?;
    let cookie = session_cookie(&token, keys.ttl().as_secs() as i64);

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Redirect::to("/")).into_response())
}

#[instrument]
pub async fn logout(CurrentUser(user_id): CurrentUser) -> impl IntoResponse {
    info!(user_id, "user logged out");
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Redirect::to("/login"),
    )
}
