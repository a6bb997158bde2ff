use std::sync::LazyLock;

use regex::Regex;

use super::slug::slugify;
use super::text::{clean_text, strip_tags};

// Exact `<h2>` only: no attributes, lowercase, no nested tags.
static CATEGORY_H2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h2>([^<]+)</h2>").unwrap());

/// A category heading and the markup up to the next heading.
#[derive(Debug, Clone)]
pub struct CategorySection<'a> {
    pub id: String,
    pub title: String,
    pub scope: &'a str,
}

/// Split a document into category scopes by its `<h2>` headings.
pub fn split_categories(html: &str) -> Vec<CategorySection<'_>> {
    let headings: Vec<_> = CATEGORY_H2_RE.captures_iter(html).collect();

    headings
        .iter()
        .enumerate()
        .map(|(i, caps)| {
            let whole = caps.get(0).unwrap();
            let start = whole.end();
            let end = headings
                .get(i + 1)
                .map(|next| next.get(0).unwrap().start())
                .unwrap_or(html.len());
            let title = clean_text(&strip_tags(&caps[1]));
            CategorySection {
                id: slugify(&title),
                title,
                scope: &html[start..end],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scopes_run_to_next_heading() {
        let html = "<h1>Help</h1><h2>Account</h2>AAA<h2>Courses &amp; Exams</h2>BBB";
        let sections = split_categories(html);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Account");
        assert_eq!(sections[0].id, "account");
        assert_eq!(sections[0].scope, "AAA");
        assert_eq!(sections[1].title, "Courses & Exams");
        assert_eq!(sections[1].id, "courses-and-exams");
        assert_eq!(sections[1].scope, "BBB");
    }

    #[test]
    fn no_headings() {
        assert!(split_categories("<p>nothing here</p>").is_empty());
        assert!(split_categories("").is_empty());
    }

    #[test]
    fn attributed_or_nested_h2_not_a_category() {
        let html = r#"<h2 class="x">Styled</h2><h2><span>Wrapped</span></h2><H2>Upper</H2>"#;
        assert!(split_categories(html).is_empty());
    }

    #[test]
    fn heading_whitespace_normalized() {
        let sections = split_categories("<h2>\n   Technical\n   Support  </h2>rest");
        assert_eq!(sections[0].title, "Technical Support");
        assert_eq!(sections[0].id, "technical-support");
    }
}
