use sqlx::SqlitePool;
use tracing::info;

use super::{dto::GenerationRequest, repo, repo_types::Generation};
use crate::model::{GenerationParams, TextGenerator};
use crate::writer::{build_prompt, clean_output};

/// Prompt the model for `user_id`, clean the reply and record it.
/// Nothing is stored when the model call fails.
pub async fn generate_and_store(
    db: &SqlitePool,
    generator: &dyn TextGenerator,
    user_id: i64,
    req: &GenerationRequest,
) -> anyhow::Result<Generation> {
    let prompt = build_prompt(&req.topic, req.task, req.style);
    let raw = generator.generate(&prompt, &GenerationParams::fixed()).await?;
    let output = clean_output(&raw);

    let generation = repo::insert(db, user_id, &req.topic, &output, req.task).await?;
    info!(
        user_id,
        generation_id = generation.id,
        task = %req.task,
        raw_chars = raw.len(),
        clean_chars = output.len(),
        "generation stored"
    );
    Ok(generation)
}

pub async fn history(db: &SqlitePool, user_id: i64) -> anyhow::Result<Vec<Generation>> {
    repo::list_by_user(db, user_id).await
}
