use std::sync::LazyLock;

use regex::Regex;

static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("markup pattern is a valid regex")
});

/// Normalises raw form input: trims surrounding whitespace, then removes
/// HTML/XML tags and comments.
pub fn sanitize(raw: &str) -> String {
    MARKUP.replace_all(raw.trim(), "").into_owned()
}
