use std::sync::LazyLock;

use regex::Regex;

use super::text::{clean_text, strip_tags};
use crate::model::AnswerBlock;

// No backreferences in `regex`, so each tag gets its own alternative.
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<p\b[^>]*>(?P<p>.*?)</p>|<ol\b[^>]*>(?P<ol>.*?)</ol>|<ul\b[^>]*>(?P<ul>.*?)</ul>|<h1\b[^>]*>(?P<h1>.*?)</h1>|<h2\b[^>]*>(?P<h2>.*?)</h2>",
    )
    .unwrap()
});
static LI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li\b[^>]*>(.*?)</li>").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    List,
    Heading,
}

/// A top-level element found in answer markup, before any text cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub kind: BlockKind,
    pub inner: &'a str,
}

/// Find `p`, `ol`/`ul` and `h1`/`h2` elements in document order.
///
/// Matches never overlap and tag names are case-insensitive. Anything between
/// or around the matches is discarded. This is the only place that knows how
/// blocks are located; swap it out to change the matching strategy.
pub fn find_top_level_blocks(markup: &str) -> Vec<RawBlock<'_>> {
    BLOCK_RE
        .captures_iter(markup)
        .filter_map(|caps| {
            let (kind, m) = [
                (BlockKind::Paragraph, "p"),
                (BlockKind::List, "ol"),
                (BlockKind::List, "ul"),
                (BlockKind::Heading, "h1"),
                (BlockKind::Heading, "h2"),
            ]
            .into_iter()
            .find_map(|(kind, name)| caps.name(name).map(|m| (kind, m)))?;
            Some(RawBlock {
                kind,
                inner: m.as_str(),
            })
        })
        .collect()
}

/// Parse one answer body into ordered blocks. Empty elements produce nothing.
pub fn parse_answer_blocks(body: &str) -> Vec<AnswerBlock> {
    find_top_level_blocks(body)
        .into_iter()
        .filter_map(|raw| match raw.kind {
            BlockKind::List => {
                let items = list_items(raw.inner);
                (!items.is_empty()).then_some(AnswerBlock::Steps { items })
            }
            BlockKind::Paragraph => {
                let text = clean_text(&strip_tags(raw.inner));
                if text.is_empty() {
                    None
                } else if text.to_lowercase().starts_with("note:") {
                    Some(AnswerBlock::Note { text })
                } else {
                    Some(AnswerBlock::Paragraph { text })
                }
            }
            BlockKind::Heading => {
                let text = clean_text(&strip_tags(raw.inner));
                (!text.is_empty()).then_some(AnswerBlock::Subheading { text })
            }
        })
        .collect()
}

/// `li` texts in order, tag-stripped and cleaned; empty items dropped.
fn list_items(list_inner: &str) -> Vec<String> {
    LI_RE
        .captures_iter(list_inner)
        .map(|caps| clean_text(&strip_tags(&caps[1])))
        .filter(|t| !t.is_empty())
        .collect()
}
