use anyhow::Context;
use sqlx::SqlitePool;
use time::OffsetDateTime;

use super::repo_types::Generation;
use crate::writer::TaskKind;

pub async fn insert(
    db: &SqlitePool,
    user_id: i64,
    prompt: &str,
    output: &str,
    task: TaskKind,
) -> anyhow::Result<Generation> {
    let row = sqlx::query_as::<_, Generation>(
        r#"
        INSERT INTO generations (user_id, prompt, output, task_type, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, user_id, prompt, output, task_type, created_at
        "#,
    )
    .bind(user_id)
    .bind(prompt)
    .bind(output)
    .bind(task.as_str())
    .bind(OffsetDateTime::now_utc())
    .fetch_one(db)
    .await
    .context("insert generation")?;
    Ok(row)
}

/// All generations owned by `user_id`, newest first.
pub async fn list_by_user(db: &SqlitePool, user_id: i64) -> anyhow::Result<Vec<Generation>> {
    let rows = sqlx::query_as::<_, Generation>(
        r#"
        SELECT id, user_id, prompt, output, task_type, created_at
        FROM generations
        WHERE user_id = ?
        ORDER BY id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list generations by user")?;
    Ok(rows)
}
