use serde::Deserialize;

/// Form body for `POST /signup`.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
}

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
