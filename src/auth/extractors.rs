use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use tracing::warn;

use super::services::SessionKeys;
use crate::cookies::{read_cookie, SESSION_COOKIE};

/// ID of the signed-in user, taken from the session cookie.
/// Requests without a valid session are redirected to the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    SessionKeys: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = read_cookie(&parts.headers, SESSION_COOKIE)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Redirect::to("/login"))?;

        let keys = SessionKeys::from_ref(state);
        match keys.verify(&token) {
            Ok(claims) => Ok(CurrentUser(claims.sub)),
            Err(e) => {
                warn!(error = %e, "invalid or expired session");
                Err(Redirect::to("/login"))
            }
        }
    }
}
