pub mod blocks;
pub mod cards;
pub mod sections;
pub mod slug;
pub mod text;

use tracing::debug;

use crate::model::Category;
use cards::ExtractStats;

/// Document → category headings → cards → FAQ records with parsed answers.
pub fn extract_categories(html: &str) -> (Vec<Category>, ExtractStats) {
    let sections = sections::split_categories(html);
    let mut stats = ExtractStats {
        headings: sections.len(),
        ..Default::default()
    };
    debug!("Found {} category headings", sections.len());

    let categories = sections
        .iter()
        .filter_map(|section| cards::extract_category(section, &mut stats))
        .collect();
    (categories, stats)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerBlock;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn helpcenter_categories() {
        let (cats, stats) = extract_categories(&fixture("helpcenter"));
        let ids: Vec<&str> = cats.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["account-and-login", "courses", "technical-support"]);
        // "Announcements" heading has no cards
        assert_eq!(stats.headings, 4);
        assert_eq!(stats.categories_dropped, 1);
    }

    #[test]
    fn helpcenter_account_faqs() {
        let (cats, _) = extract_categories(&fixture("helpcenter"));
        let account = &cats[0];
        assert_eq!(account.title, "Account & Login");
        assert_eq!(account.faqs.len(), 2);

        let sec = &account.faqs[0];
        assert_eq!(sec.question, "How do I change my Security Question & Answer (Q/A)?");
        assert_eq!(sec.id, "how-do-i-change-my-security-question-and-answer-q-a");
        assert_eq!(
            sec.answer_blocks,
            vec![
                AnswerBlock::Paragraph {
                    text: "Do this first.".into()
                },
                AnswerBlock::Steps {
                    items: vec!["Step one".into(), "Step two".into()]
                },
                AnswerBlock::Note {
                    text: "Note: remember this.".into()
                },
            ]
        );
    }

    #[test]
    fn helpcenter_mixed_answer() {
        let (cats, _) = extract_categories(&fixture("helpcenter"));
        let reset = &cats[0].faqs[1];
        assert_eq!(reset.question, "I forgot my password. What's next?");
        assert_eq!(reset.id, "i-forgot-my-password-what-s-next");
        assert_eq!(
            reset.answer_blocks,
            vec![
                AnswerBlock::Subheading {
                    text: "Self-service reset".into()
                },
                AnswerBlock::Paragraph {
                    text: "From the login page:".into()
                },
                AnswerBlock::Steps {
                    items: vec![
                        "Select Forgot Password.".into(),
                        "Answer your security question.".into()
                    ]
                },
                AnswerBlock::Note {
                    text: "NOTE: Passwords expire every 60 days.".into()
                },
            ]
        );
    }

    #[test]
    fn helpcenter_skips_are_counted() {
        let (cats, stats) = extract_categories(&fixture("helpcenter"));
        let support = cats.iter().find(|c| c.id == "technical-support").unwrap();
        assert_eq!(support.faqs.len(), 1);
        assert_eq!(stats.cards_malformed, 1);
        assert_eq!(stats.cards_empty_question, 1);
    }

    #[test]
    fn helpcenter_preserves_non_ascii() {
        let (cats, _) = extract_categories(&fixture("helpcenter"));
        let courses = cats.iter().find(|c| c.id == "courses").unwrap();
        let faq = &courses.faqs[0];
        assert_eq!(faq.question, "Why can\u{2019}t I see my course?");
        assert_eq!(faq.id, "why-can-t-i-see-my-course");
        assert!(matches!(
            &faq.answer_blocks[0],
            AnswerBlock::Subheading { text } if text == "Enrollment"
        ));
    }

    #[test]
    fn no_headings_no_categories() {
        let (cats, stats) = extract_categories("<html><body><p>Nothing</p></body></html>");
        assert!(cats.is_empty());
        assert_eq!(stats, ExtractStats::default());
    }

    #[test]
    fn repeated_runs_identical() {
        let html = fixture("helpcenter");
        assert_eq!(extract_categories(&html).0, extract_categories(&html).0);
    }
}
