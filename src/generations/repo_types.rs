use sqlx::FromRow;
use time::OffsetDateTime;

/// One persisted request and its cleaned model output.
#[derive(Debug, Clone, FromRow)]
pub struct Generation {
    pub id: i64,
    pub user_id: i64,
    pub prompt: String,
    pub output: String,
    pub task_type: String,
    pub created_at: OffsetDateTime,
}
