use crate::auth::repo_types::User;
use anyhow::Context;
use sqlx::SqlitePool;
use time::OffsetDateTime;

impl User {
    /// Find a user by username.
    pub async fn find_by_username(db: &SqlitePool, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(db)
        .await
        .context("find user by username")?;
        Ok(user)
    }

    /// Create a new user with hashed password.
    pub async fn create(db: &SqlitePool, username: &str, password_hash: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES (?, ?, ?)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await
        .context("insert user")?;
        Ok(user)
    }

    #[cfg(test)]
    pub async fn count_by_username(db: &SqlitePool, username: &str) -> anyhow::Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(db)
            .await
            .context("count users by username")?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn create_then_find() {
        let db = db::memory().await;
        let created = User::create(&db, "ann", "hash").await.expect("create");
        let found = User::find_by_username(&db, "ann")
            .await
            .expect("query")
            .expect("user exists");
        assert_eq!(found.id, created.id);
        assert_eq!(found.password_hash, "hash");
        assert!(User::find_by_username(&db, "bob").await.expect("query").is_none());
    }

    #[tokio::test]
    async fn duplicate_username_violates_unique_constraint() {
        let db = db::memory().await;
        User::create(&db, "ann", "h1").await.expect("first insert");
        let err = User::create(&db, "ann", "h2").await.unwrap_err();
        let sqlx_err = err.downcast_ref::<sqlx::Error>().expect("sqlx error");
        assert!(sqlx_err
            .as_database_error()
            .map(|e| e.is_unique_violation())
            .unwrap_or(false));
        assert_eq!(User::count_by_username(&db, "ann").await.expect("count"), 1);
    }
}
