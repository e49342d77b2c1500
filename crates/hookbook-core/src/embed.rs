//! Embed snippets for a user's public booking page.

use hookbook_config::EmbedConfig;

/// Public booking page URL for `username`.
pub fn booking_page_url(base_url: &str, username: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), username)
}

/// Iframe embedding the booking page.
pub fn iframe_snippet(base_url: &str, username: &str) -> String {
    format!(
        r#"<iframe src="{}" frameborder="0" allowfullscreen></iframe>"#,
        escape_html(&booking_page_url(base_url, username))
    )
}

/// Standalone HTML page showing the booking page full screen.
pub fn html_document(base_url: &str, username: &str, title: &str) -> String {
    format!(
        concat!(
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="UTF-8">"#,
            r#"<meta http-equiv="X-UA-Compatible" content="IE=edge">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
            "<title>{title}</title>",
            "<style>body {{margin: 0;}}iframe {{height: calc(100vh - 4px);",
            "width: calc(100vw - 4px);box-sizing: border-box;}}</style>",
            "</head><body>{iframe}</body></html>",
        ),
        title = escape_html(title),
        iframe = iframe_snippet(base_url, username),
    )
}

/// Both snippets for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSnippets {
    pub iframe: String,
    pub html: String,
}

impl EmbedSnippets {
    pub fn new(config: &EmbedConfig, username: &str) -> Self {
        Self {
            iframe: iframe_snippet(&config.public_base_url, username),
            html: html_document(&config.public_base_url, username, &config.page_title),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "embed_tests.rs"]
mod tests;
