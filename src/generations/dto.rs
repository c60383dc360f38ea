use serde::Deserialize;

use crate::writer::{ArticleStyle, TaskKind};

/// Form body for `POST /`.
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub prompt: String,
    pub task: String,
    #[serde(default)]
    pub style: Option<String>,
}

/// Parsed generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub task: TaskKind,
    pub style: ArticleStyle,
}

impl From<GenerateForm> for GenerationRequest {
    fn from(form: GenerateForm) -> Self {
        Self {
            topic: form.prompt.trim().to_string(),
            task: TaskKind::parse(&form.task),
            style: ArticleStyle::parse(form.style.as_deref()),
        }
    }
}
