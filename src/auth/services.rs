use std::time::Duration;

use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sqlx::SqlitePool;
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::auth::{
    claims::Claims,
    password::{hash_password, verify_password},
    repo_types::User,
};
use crate::config::SessionConfig;
use crate::state::AppState;

/// Signs and verifies session tokens.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl SessionKeys {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl: Duration::from_secs((config.ttl_minutes.max(0) as u64) * 60),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn sign(&self, user_id: i64) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id, "session signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = data.claims.sub, "session verified");
        Ok(data.claims)
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        SessionKeys::new(&state.config.session)
    }
}

#[derive(Debug)]
pub enum SignupOutcome {
    Created(User),
    UsernameTaken,
    UsernameTooLong,
}

/// Longest accepted username, in characters. Mirrors the `users.username` CHECK.
pub const MAX_USERNAME_CHARS: usize = 150;

/// Create an account unless the username is already registered.
pub async fn register(db: &SqlitePool, username: &str, password: &str) -> anyhow::Result<SignupOutcome> {
    if username.chars().count() > MAX_USERNAME_CHARS {
        warn!(chars = username.chars().count(), "username too long");
        return Ok(SignupOutcome::UsernameTooLong);
    }

    if User::find_by_username(db, username).await?.is_some() {
        warn!(%username, "username already registered");
        return Ok(SignupOutcome::UsernameTaken);
    }

    let hash = hash_password(password)?;
    match User::create(db, username, &hash).await {
        Ok(user) => {
            info!(user_id = user.id, %username, "user registered");
            Ok(SignupOutcome::Created(user))
        }
        // Lost a race with a concurrent signup for the same name.
        Err(e) if is_unique_violation(&e) => {
            warn!(%username, "username registered concurrently");
            Ok(SignupOutcome::UsernameTaken)
        }
        Err(e) => Err(e),
    }
}

fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}

/// The matching user, or `None` for an unknown name or wrong password.
pub async fn authenticate(db: &SqlitePool, username: &str, password: &str) -> anyhow::Result<Option<User>> {
    let Some(user) = User::find_by_username(db, username).await? else {
        warn!(%username, "login unknown username");
        return Ok(None);
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(%username, user_id = user.id, "login invalid password");
        return Ok(None);
    }

    info!(user_id = user.id, %username, "user logged in");
    Ok(Some(user))
}

#[cfg(test)]
mod session_tests {
    use super::*;

    fn keys(secret: &str, issuer: &str, audience: &str) -> SessionKeys {
        SessionKeys::new(&SessionConfig {
            secret: secret.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            ttl_minutes: 5,
        })
    }

    #[test]
    fn sign_and_verify_session() {
        let keys = keys("dev-secret", "test-issuer", "test-aud");
        let token = keys.sign(42).expect("sign");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.aud, "test-aud");
        assert_eq!(claims.exp - claims.iat, 300);
    }

    #[test]
    fn verify_rejects_wrong_issuer_or_audience() {
        let good = keys("same-secret", "good-iss", "good-aud");
        let bad = keys("same-secret", "bad-iss", "bad-aud");
        let token = good.sign(1).expect("sign");
        assert!(bad.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_foreign_secret_and_tampering() {
        let ours = keys("ours", "iss", "aud");
        let theirs = keys("theirs", "iss", "aud");
        let forged = theirs.sign(1).expect("sign");
        assert!(ours.verify(&forged).is_err());

        let mut token = ours.sign(1).expect("sign");
        token.push('x');
        assert!(ours.verify(&token).is_err());
    }
}

#[cfg(test)]
mod account_tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn register_refuses_taken_username() {
        let db = db::memory().await;
        let first = register(&db, "ann", "pw-one").await.expect("first signup");
        assert!(matches!(first, SignupOutcome::Created(_)));

        let second = register(&db, "ann", "pw-two").await.expect("second signup");
        assert!(matches!(second, SignupOutcome::UsernameTaken));
        assert_eq!(User::count_by_username(&db, "ann").await.expect("count"), 1);
    }

    #[tokio::test]
    async fn register_refuses_names_over_the_length_limit() {
        let db = db::memory().await;
        let too_long = "a".repeat(MAX_USERNAME_CHARS + 1);
        let outcome = register(&db, &too_long, "pw").await.expect("signup");
        assert!(matches!(outcome, SignupOutcome::UsernameTooLong));
        assert_eq!(User::count_by_username(&db, &too_long).await.expect("count"), 0);

        // multi-byte names are measured in characters, not bytes
        let at_limit = "é".repeat(MAX_USERNAME_CHARS);
        let outcome = register(&db, &at_limit, "pw").await.expect("signup");
        assert!(matches!(outcome, SignupOutcome::Created(_)));
    }

    #[tokio::test]
    async fn schema_rejects_overlong_username_inserts() {
        let db = db::memory().await;
        let err = User::create(&db, &"b".repeat(MAX_USERNAME_CHARS + 1), "h").await;
        assert!(err.is_err());
        assert!(User::create(&db, &"b".repeat(MAX_USERNAME_CHARS), "h").await.is_ok());
    }

    #[tokio::test]
    async fn register_stores_hash_not_plaintext() {
        let db = db::memory().await;
        let SignupOutcome::Created(user) = register(&db, "ann", "hunter2").await.expect("signup") else {
            panic!("expected a new user");
        };
        assert_ne!(user.password_hash, "hunter2");
        assert!(verify_password("hunter2", &user.password_hash).expect("verify"));
    }

    #[tokio::test]
    async fn authenticate_checks_password() {
        let db = db::memory().await;
        register(&db, "ann", "right").await.expect("signup");

        let ok = authenticate(&db, "ann", "right").await.expect("login");
        assert_eq!(ok.map(|u| u.username), Some("ann".to_string()));
        assert!(authenticate(&db, "ann", "wrong").await.expect("login").is_none());
        assert!(authenticate(&db, "nobody", "right").await.expect("login").is_none());
    }
}
