//! Prompt templating and model output cleanup.

mod dedup;
mod prompt;

pub use dedup::{drop_blank_lines, remove_repetition};
pub use prompt::{build_prompt, ArticleStyle, TaskKind};

/// Text stored and shown for a raw model reply: repeated sentences removed,
/// blank lines stripped.
pub fn clean_output(raw: &str) -> String {
    drop_blank_lines(&remove_repetition(raw.trim()))
}
