use axum::response::Html;

use super::{escape, layout};
use crate::generations::Generation;

const GENERATE_FORM: &str = r#"<form method="post" action="/">
        <label>Topic or task
            <textarea name="prompt" required></textarea>
        </label>
        <label>Type
            <select name="task">
                <option value="email">Email</option>
                <option value="article">Article</option>
            </select>
        </label>
        <label>Article style
            <select name="style">
                <option value="formal">Formal</option>
                <option value="blog">Blog</option>
                <option value="explainer">Explainer</option>
                <option value="narrative">Narrative</option>
            </select>
        </label>
        <p><button type="submit">Generate</button></p>
    </form>"#;

/// Generation form, followed by the cleaned result when there is one.
pub fn index_page(output: Option<&str>) -> Html<String> {
    let result = match output {
        Some(text) if !text.is_empty() => format!(
            r#"<h2>Result</h2>
    <div class="output">{}</div>"#,
            escape(text)
        ),
        _ => String::new(),
    };
    layout("Generate", true, None, &format!("{GENERATE_FORM}\n    {result}"))
}

pub fn history_page(items: &[Generation]) -> Html<String> {
    if items.is_empty() {
        return layout("History", true, None, "<p>No generations yet.</p>");
    }

    let mut body = String::new();
    for item in items {
        body.push_str(&format!(
            r#"<article>
        <h3>{task} &middot; {prompt}</h3>
        <div class="output">{output}</div>
    </article>
    "#,
            task = escape(&item.task_type),
            prompt = escape(&item.prompt),
            output = escape(&item.output),
        ));
    }
    layout("History", true, None, &body)
}
