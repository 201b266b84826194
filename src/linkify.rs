/// Turn bare URLs in stream titles into anchors
use regex::Regex;
use std::sync::LazyLock;

// Optional scheme, dotted host with a 2-3 letter TLD, optional path segments
// and an optional trailing file extension. Loose on purpose: titles are free text.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(https?://)?(([a-z0-9#]+[.])+[a-z]{2,3}([/][a-z0-9#=?\-]+)*([.][a-z]{2,4})?)")
        .expect("URL pattern is valid")
});

/// Wrap every URL-shaped substring of `text` in an anchor.
///
/// The href always uses `http://` plus the matched host and path; the link
/// text keeps whatever scheme was written. Running this twice on its own
/// output is not guaranteed to be stable.
pub fn linkify(text: &str) -> String {
    URL_PATTERN
        .replace_all(text, "<a href='http://${2}'>${1}${2}</a>")
        .into_owned()
}

/// Escape characters that would otherwise be read as markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Title markup for a stream: escaped, linkified, wrapped in a paragraph
pub fn title_markup(title: &str) -> String {
    format!("<p>{}</p>", linkify(&escape_html(title)))
}
