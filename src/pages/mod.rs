//! Server-rendered HTML for the form front end.
//!
//! Every string that originates from a user or from the model goes through
//! [`escape`] before it is interpolated.

mod auth;
mod generations;

pub use auth::{login_page, signup_page};
pub use generations::{history_page, index_page};

use axum::response::Html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Error => "error",
        }
    }
}

/// One-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Cookie-safe `kind:percent-encoded-message` form.
    pub fn encode(&self) -> String {
        format!("{}:{}", self.kind.as_str(), urlencoding::encode(&self.message))
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let (kind, message) = raw.split_once(':')?;
        let kind = match kind {
            "success" => FlashKind::Success,
            "error" => FlashKind::Error,
            _ => return None,
        };
        let message = urlencoding::decode(message).ok()?.into_owned();
        Some(Self { kind, message })
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn nav(signed_in: bool) -> &'static str {
    if signed_in {
        r#"<nav><a href="/">Generate</a> | <a href="/history">History</a> | <a href="/logout">Logout</a></nav>"#
    } else {
        r#"<nav><a href="/login">Login</a> | <a href="/signup">Sign up</a></nav>"#
    }
}

pub(crate) fn layout(title: &str, signed_in: bool, flash: Option<&Flash>, body: &str) -> Html<String> {
    let flash = flash
        .map(|f| {
            format!(
                r#"<div class="flash {}">{}</div>"#,
                f.kind.as_str(),
                escape(&f.message)
            )
        })
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - QuillMind</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #222; }}
        nav {{ margin-bottom: 1.5rem; }}
        .flash {{ padding: 0.6rem 0.8rem; border-radius: 4px; margin-bottom: 1rem; }}
        .flash.success {{ background: #e6f4ea; color: #1e4620; }}
        .flash.error {{ background: #fdecea; color: #611a15; }}
        .output {{ white-space: pre-wrap; background: #f6f8fa; padding: 1rem; border-radius: 4px; }}
        textarea {{ width: 100%; min-height: 8rem; }}
        label {{ display: block; margin-top: 0.8rem; }}
    </style>
</head>
<body>
    {nav}
    <h1>{title}</h1>
    {flash}
    {body}
</body>
</html>"#,
        title = escape(title),
        nav = nav(signed_in),
    ))
}

pub fn error_page() -> Html<String> {
    layout(
        "Something went wrong",
        false,
        None,
        "<p>The server could not complete this request. Please try again later.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn flash_survives_cookie_encoding() {
        let flash = Flash::success("Account created. Please login.");
        let encoded = flash.encode();
        assert!(!encoded.contains(' '));
        assert_eq!(Flash::decode(&encoded), Some(flash));
        assert_eq!(Flash::decode("bogus"), None);
        assert_eq!(Flash::decode("warning:hi"), None);
    }

    #[test]
    fn layout_renders_flash_and_nav() {
        let Html(page) = layout("Login", false, Some(&Flash::error("Invalid credentials")), "");
        assert!(page.contains(r#"<div class="flash error">Invalid credentials</div>"#));
        assert!(page.contains(r#"href="/signup""#));
        assert!(!page.contains(r#"href="/logout""#));
    }
}
