mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;
mod services;

use crate::state::AppState;
use axum::Router;

pub use repo_types::Generation;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
