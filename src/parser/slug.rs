use std::sync::LazyLock;

use regex::Regex;

static NON_ALNUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Turn a heading or question into a lowercase `[a-z0-9-]` identifier.
///
/// Ampersands, escaped or bare, become the word "and". Questions reach this
/// already entity-decoded, so the bare `&` rule is the one that usually
/// applies; ids for such questions differ from a `&amp;`-only rewrite
/// (`question-and-answer`, not `question-answer`).
///
/// Not collision-free: "Log in?" and "Log-in" both give `log-in`.
pub fn slugify(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lower = text
        .to_lowercase()
        .replace("&amp;", " and ")
        .replace('&', " and ");
    NON_ALNUM_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}
