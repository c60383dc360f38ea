use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use tracing::instrument;

use super::{
    dto::{GenerateForm, GenerationRequest},
    services,
};
use crate::{
    auth::CurrentUser,
    error::AppError,
    pages::{history_page, index_page},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(generate))
        .route("/history", get(history))
}

#[instrument]
pub async fn index(CurrentUser(_user_id): CurrentUser) -> Html<String> {
    index_page(None)
}

#[instrument(skip(state, form))]
pub async fn generate(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, AppError> {
    let req = GenerationRequest::from(form);
    let generation =
        services::generate_and_store(&state.db, state.generator.as_ref(), user_id, &req).await?;
    Ok(index_page(Some(&generation.output)))
}

#[instrument(skip(state))]
pub async fn history(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Html<String>, AppError> {
    let items = services::history(&state.db, user_id).await?;
    Ok(history_page(&items))
}
