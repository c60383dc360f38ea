use std::fmt;

/// Which template a generation request uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Email,
    Article,
}

impl TaskKind {
    /// `email` selects the email template; every other value is an article.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "email" => TaskKind::Email,
            _ => TaskKind::Article,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::Email => "email",
            TaskKind::Article => "article",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone selector for articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleStyle {
    #[default]
    Formal,
    Blog,
    Explainer,
    Narrative,
}

impl ArticleStyle {
    /// Unknown or missing tags fall back to [`ArticleStyle::Formal`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("blog") => ArticleStyle::Blog,
            Some("explainer") => ArticleStyle::Explainer,
            Some("narrative") => ArticleStyle::Narrative,
            _ => ArticleStyle::Formal,
        }
    }

    fn tone_clause(self) -> &'static str {
        match self {
            ArticleStyle::Formal => " Use a formal and informative tone.",
            ArticleStyle::Blog => " Write this article in a casual and engaging blog tone.",
            ArticleStyle::Explainer => {
                " Use an educational tone suitable for students or general readers."
            }
            ArticleStyle::Narrative => " Use storytelling to make the content engaging.",
        }
    }
}

/// Wrap a user topic in the instruction sent to the model.
/// `style` only affects articles. The topic is used verbatim.
pub fn build_prompt(topic: &str, task: TaskKind, style: ArticleStyle) -> String {
    match task {
        TaskKind::Email => format!(
            "You are an assistant that writes professional emails. \
             Generate a clear, polite, and concise email on the following topic:\n\n\
             {topic}\n\n\
             Include a greeting, a brief body with important details, and a formal closing."
        ),
        TaskKind::Article => format!(
            "You are a professional writer. Write a full-length article on the topic:\n\n\
             \"{topic}\".\n\n\
             The article should be clear, informative, and avoid vague or generic statements.{tone} \
             Do not describe what each paragraph will be about. Just write the article naturally.",
            tone = style.tone_clause()
        ),
    }
}
