//! HTML rendering helpers for chat bubbles.
//!
//! DESIGN
//! ======
//! User text is escaped and nothing else. Assistant text is escaped first and
//! only then gains a fixed set of formatting (`<br>`, `<strong>`, bullet
//! glyphs), so backend output can never carry markup of its own.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Escape every character with meaning in HTML text or attribute context.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render a user bubble body.
pub fn render_user_html(text: &str) -> String {
    escape_html(text)
}

/// Render an assistant bubble body.
///
/// Line-initial `- ` becomes a bullet glyph, newlines become `<br>`, and
/// `**bold**` spans become `<strong>`. Unpaired `**` stays literal.
pub fn render_assistant_html(text: &str) -> String {
    let escaped = escape_html(text);
    let joined = escaped.split('\n').map(bullet_line).collect::<Vec<_>>().join("<br>");
    embolden(&joined)
}

fn bullet_line(line: &str) -> String {
    match line.strip_prefix("- ") {
        Some(rest) => format!("• {rest}"),
        None => line.to_owned(),
    }
}

fn embolden(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str("<strong>");
        out.push_str(&after_open[..close]);
        out.push_str("</strong>");
        rest = &after_open[close + 2..];
    }
    out.push_str(rest);
    out
}
