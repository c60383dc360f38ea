use crate::state::AppState;
use axum::Router;

mod claims;
mod dto;
pub mod extractors;
pub mod handlers;
mod password;
pub mod repo;
pub mod repo_types;
pub mod services;

pub use extractors::CurrentUser;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
