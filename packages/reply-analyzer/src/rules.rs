//! Local reply rules: term matching and the decision merge.

use crate::settings::ReplySettings;
use crate::types::{Classification, TextType};

/// Engagement score at or above which a reply is always warranted.
pub const ENGAGEMENT_THRESHOLD: f64 = 7.0;

/// Configured terms that occur in `text`, ignoring case.
///
/// Returned in configured order; duplicate terms are reported once per entry.
pub fn find_matches(text: &str, terms: &[String]) -> Vec<String> {
    let haystack = text.to_lowercase();
    terms
        .iter()
        .filter(|term| haystack.contains(&term.to_lowercase()))
        .cloned()
        .collect()
}

/// A rule that can independently force a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyRule {
    Question,
    Statement,
    Keyword,
    Engagement,
}

impl ReplyRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Statement => "statement",
            Self::Keyword => "keyword",
            Self::Engagement => "engagement",
        }
    }
}

/// Every rule satisfied by this classification under `settings`.
pub fn satisfied_rules(
    classification: &Classification,
    settings: &ReplySettings,
    has_keywords: bool,
) -> Vec<ReplyRule> {
    let mut rules = Vec::new();
    match classification.text_type {
        TextType::Question if settings.reply_to_questions => rules.push(ReplyRule::Question),
        TextType::Statement if settings.reply_to_statements => rules.push(ReplyRule::Statement),
        _ => {}
    }
    if has_keywords {
        rules.push(ReplyRule::Keyword);
    }
    if classification.engagement_value >= ENGAGEMENT_THRESHOLD {
        rules.push(ReplyRule::Engagement);
    }
    rules
}

/// Reply if any single rule is satisfied.
///
/// The classifier's `recommendation` is ignored.
pub fn should_reply(
    classification: &Classification,
    settings: &ReplySettings,
    has_keywords: bool,
) -> bool {
    !satisfied_rules(classification, settings, has_keywords).is_empty()
}
