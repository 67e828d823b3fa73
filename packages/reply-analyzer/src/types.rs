//! Classifier payload and analysis result types.

use serde::{Deserialize, Serialize};

/// Reason given when a blocked term vetoes the reply.
pub const BLOCKED_REASON: &str = "Contains blocked terms";

/// Kind of text as labelled by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    Question,
    #[default]
    Statement,
}

impl TextType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Statement => "statement",
        }
    }
}

impl std::fmt::Display for TextType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON object the classifier must answer with.
///
/// Every field is required; anything else is a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub text_type: TextType,
    pub intent: String,
    pub tone: String,
    /// Topics the classifier extracted (not the configured keywords).
    pub keywords: Vec<String>,
    /// Expected 1-10, passed through unchecked.
    pub engagement_value: f64,
    /// The classifier's own suggestion. Not used for the decision.
    pub recommendation: bool,
    pub reason: String,
}

/// Outcome of one analysis run.
///
/// Serialized field names match the classifier's (`engagement_value`) plus
/// the camel-case decision fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "type")]
    pub text_type: TextType,
    pub intent: String,
    pub tone: String,
    pub keywords: Vec<String>,
    pub engagement_value: f64,
    pub recommendation: bool,
    pub reason: String,
    #[serde(rename = "shouldReply")]
    pub should_reply: bool,
    #[serde(rename = "hasKeywords", default, skip_serializing_if = "Option::is_none")]
    pub has_keywords: Option<bool>,
    #[serde(rename = "matchedKeywords", default, skip_serializing_if = "Option::is_none")]
    pub matched_keywords: Option<Vec<String>>,
    #[serde(rename = "blockedTermsFound", default, skip_serializing_if = "Option::is_none")]
    pub blocked_terms_found: Option<Vec<String>>,
}

impl AnalysisResult {
    /// Result for text vetoed by blocked terms; the classifier was not asked.
    pub fn blocked(found: Vec<String>) -> Self {
        Self {
            text_type: TextType::Statement,
            intent: String::new(),
            tone: String::new(),
            keywords: Vec::new(),
            engagement_value: 0.0,
            recommendation: false,
            reason: BLOCKED_REASON.to_string(),
            should_reply: false,
            has_keywords: None,
            matched_keywords: None,
            blocked_terms_found: Some(found),
        }
    }

    /// Merge a classification with the local decision.
    pub fn classified(
        classification: Classification,
        should_reply: bool,
        matched_keywords: Vec<String>,
    ) -> Self {
        Self {
            text_type: classification.text_type,
            intent: classification.intent,
            tone: classification.tone,
            keywords: classification.keywords,
            engagement_value: classification.engagement_value,
            recommendation: classification.recommendation,
            reason: classification.reason,
            should_reply,
            has_keywords: Some(!matched_keywords.is_empty()),
            matched_keywords: Some(matched_keywords),
            blocked_terms_found: None,
        }
    }

    pub fn was_blocked(&self) -> bool {
        self.blocked_terms_found
            .as_ref()
            .is_some_and(|found| !found.is_empty())
    }
}
