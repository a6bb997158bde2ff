use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::blocks::parse_answer_blocks;
use super::sections::CategorySection;
use super::slug::slugify;
use super::text::{clean_text, strip_tags};
use crate::model::{Category, Faq};

/// A collapsible help-center card: header with the question, body with the answer.
static CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?s)<div class="card my-4" id="(?P<card_id>[^"]+)">\s*"#,
        r#"<div class="card-header[^>]*>(?P<header>.*?)</div>\s*"#,
        r#"<div id="(?P<body_id>[^"]+)" class="collapse[^>]*>\s*"#,
        r#"<div class="card-body">\s*(?P<body>.*?)\s*</div>\s*"#,
        r#"</div>\s*</div>"#,
    ))
    .unwrap()
});

// Card openings regardless of whether the rest of the card conforms.
static CARD_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<div class="card my-4""#).unwrap());

/// Raw captures of one conforming card.
#[derive(Debug, Clone, Copy)]
pub struct RawCard<'a> {
    pub card_id: &'a str,
    pub header: &'a str,
    pub body_id: &'a str,
    pub body: &'a str,
}

/// Counters for everything the lenient extraction silently skips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub headings: usize,
    pub categories_dropped: usize,
    pub cards_matched: usize,
    pub cards_malformed: usize,
    pub cards_empty_question: usize,
}

impl ExtractStats {
    pub fn print(&self) {
        println!(
            "Headings: {} ({} dropped with no FAQs)",
            self.headings, self.categories_dropped
        );
        println!(
            "Cards: {} matched, {} non-conforming, {} with empty question",
            self.cards_matched, self.cards_malformed, self.cards_empty_question
        );
    }
}

/// Cards in `scope` that match the fixed header/collapse/body nesting.
pub fn find_cards(scope: &str) -> Vec<RawCard<'_>> {
    CARD_RE
        .captures_iter(scope)
        .map(|caps| RawCard {
            card_id: caps.name("card_id").map_or("", |m| m.as_str()),
            header: caps.name("header").map_or("", |m| m.as_str()),
            body_id: caps.name("body_id").map_or("", |m| m.as_str()),
            body: caps.name("body").map_or("", |m| m.as_str()),
        })
        .collect()
}

/// Build the category record for one section, or `None` if no FAQ survives.
pub fn extract_category(section: &CategorySection, stats: &mut ExtractStats) -> Option<Category> {
    let cards = find_cards(section.scope);
    let opened = CARD_OPEN_RE.find_iter(section.scope).count();
    let malformed = opened.saturating_sub(cards.len());
    if malformed > 0 {
        debug!("{}: skipped {} non-conforming cards", section.id, malformed);
    }
    stats.cards_matched += cards.len();
    stats.cards_malformed += malformed;

    let mut faqs = Vec::with_capacity(cards.len());
    for card in cards {
        let question = clean_text(&strip_tags(card.header));
        if question.is_empty() {
            debug!("{}: card {} has no question text", section.id, card.card_id);
            stats.cards_empty_question += 1;
            continue;
        }
        debug!("{}: card {} -> body {}", section.id, card.card_id, card.body_id);
        faqs.push(Faq {
            id: slugify(&question),
            question,
            answer_blocks: parse_answer_blocks(card.body),
        });
    }

    if faqs.is_empty() {
        debug!("Dropping category {:?}: no FAQs", section.title);
        stats.categories_dropped += 1;
        return None;
    }

    Some(Category {
        id: section.id.clone(),
        title: section.title.clone(),
        faqs,
    })
}
