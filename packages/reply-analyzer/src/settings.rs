//! Reply settings and the in-memory store that edits them.
//!
//! Settings live for the duration of one session only. Keyword and
//! blocked-term lists keep insertion order and allow duplicates; order only
//! matters for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Model used when nothing else was chosen.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// A classifier model the form offers in its selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownModel {
    pub id: &'static str,
    pub label: &'static str,
}

/// Models offered by the selector, in display order.
pub const KNOWN_MODELS: &[KnownModel] = &[
    KnownModel {
        id: "gpt-3.5-turbo",
        label: "GPT-3.5 Turbo",
    },
    KnownModel {
        id: "gpt-4",
        label: "GPT-4",
    },
];

/// Display label for a model id, if it is one of [`KNOWN_MODELS`].
pub fn model_label(id: &str) -> Option<&'static str> {
    KNOWN_MODELS.iter().find(|m| m.id == id).map(|m| m.label)
}

/// Filter configuration consulted by every analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplySettings {
    pub reply_to_questions: bool,
    pub reply_to_statements: bool,
    /// Reserved. No rule reads it.
    pub tone_match: String,
    /// Any match forces a reply.
    pub keywords: Vec<String>,
    /// Any match vetoes a reply before the classifier is called.
    pub blocked_terms: Vec<String>,
    pub model: String,
}

impl Default for ReplySettings {
    fn default() -> Self {
        Self {
            reply_to_questions: true,
            reply_to_statements: false,
            tone_match: String::new(),
            keywords: Vec::new(),
            blocked_terms: Vec::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// The boolean fields of [`ReplySettings`] that can be flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    ReplyToQuestions,
    ReplyToStatements,
}

impl Toggle {
    pub fn all() -> &'static [Toggle] {
        &[Self::ReplyToQuestions, Self::ReplyToStatements]
    }

    /// Field name as serialized in [`ReplySettings`].
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::ReplyToQuestions => "replyToQuestions",
            Self::ReplyToStatements => "replyToStatements",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ReplyToQuestions => "Reply to questions",
            Self::ReplyToStatements => "Reply to statements",
        }
    }

    fn get(&self, settings: &ReplySettings) -> bool {
        match self {
            Self::ReplyToQuestions => settings.reply_to_questions,
            Self::ReplyToStatements => settings.reply_to_statements,
        }
    }

    fn field_mut<'a>(&self, settings: &'a mut ReplySettings) -> &'a mut bool {
        match self {
            Self::ReplyToQuestions => &mut settings.reply_to_questions,
            Self::ReplyToStatements => &mut settings.reply_to_statements,
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Toggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.field_name() == s)
            .ok_or_else(|| format!("`{}` is not a toggleable setting", s))
    }
}

/// In-memory owner of the current [`ReplySettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    settings: ReplySettings,
}

impl SettingsStore {
    pub fn new(settings: ReplySettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ReplySettings {
        &self.settings
    }

    pub fn is_enabled(&self, toggle: Toggle) -> bool {
        toggle.get(&self.settings)
    }

    /// Flip a boolean setting. Returns the new value.
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let field = toggle.field_mut(&mut self.settings);
        *field = !*field;
        debug!(setting = %toggle, enabled = *field, "Toggled reply setting");
        *field
    }

    /// Append a priority keyword. Blank input is ignored.
    pub fn add_keyword(&mut self, term: &str) -> bool {
        push_trimmed(&mut self.settings.keywords, term, "keyword")
    }

    /// Append a blocked term. Blank input is ignored.
    pub fn add_blocked_term(&mut self, term: &str) -> bool {
        push_trimmed(&mut self.settings.blocked_terms, term, "blocked term")
    }

    /// Remove the keyword at `index`; out-of-range indices are ignored.
    pub fn remove_keyword(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.settings.keywords, index, "keyword")
    }

    /// Remove the blocked term at `index`; out-of-range indices are ignored.
    pub fn remove_blocked_term(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.settings.blocked_terms, index, "blocked term")
    }

    /// Replace the model id. Any string is accepted.
    pub fn set_model(&mut self, id: impl Into<String>) {
        self.settings.model = id.into();
        debug!(model = %self.settings.model, "Selected classifier model");
    }
}

fn push_trimmed(list: &mut Vec<String>, term: &str, kind: &'static str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return false;
    }
    list.push(term.to_string());
    debug!(kind, term, count = list.len(), "Added filter term");
    true
}

fn remove_at(list: &mut Vec<String>, index: usize, kind: &'static str) -> Option<String> {
    if index >= list.len() {
        return None;
    }
    let removed = list.remove(index);
    debug!(kind, term = %removed, count = list.len(), "Removed filter term");
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ReplySettings::default();
        assert!(settings.reply_to_questions);
        assert!(!settings.reply_to_statements);
        assert!(settings.tone_match.is_empty());
        assert!(settings.keywords.is_empty());
        assert!(settings.blocked_terms.is_empty());
        assert_eq!(settings.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut store = SettingsStore::default();

        assert!(store.toggle(Toggle::ReplyToStatements));
        assert!(store.settings().reply_to_statements);
        assert!(store.settings().reply_to_questions);

        assert!(!store.toggle(Toggle::ReplyToQuestions));
        assert!(!store.is_enabled(Toggle::ReplyToQuestions));
        assert!(store.is_enabled(Toggle::ReplyToStatements));
    }

    #[test]
    fn test_add_keyword_trims() {
        let mut store = SettingsStore::default();
        assert!(store.add_keyword("  pricing \n"));
        assert_eq!(store.settings().keywords, vec!["pricing"]);
    }

    #[test]
    fn test_whitespace_only_keyword_rejected() {
        let mut store = SettingsStore::default();
        assert!(!store.add_keyword("   "));
        assert!(!store.add_keyword(""));
        assert!(store.settings().keywords.is_empty());
    }

    #[test]
    fn test_duplicates_and_case_kept() {
        let mut store = SettingsStore::default();
        store.add_blocked_term("Spam");
        store.add_blocked_term("spam");
        store.add_blocked_term("Spam");
        assert_eq!(store.settings().blocked_terms, vec!["Spam", "spam", "Spam"]);
    }

    #[test]
    fn test_remove_by_index() {
        let mut store = SettingsStore::default();
        store.add_keyword("a");
        store.add_keyword("b");
        store.add_keyword("c");

        assert_eq!(store.remove_keyword(1).as_deref(), Some("b"));
        assert_eq!(store.settings().keywords, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut store = SettingsStore::default();
        store.add_blocked_term("spam");

        assert_eq!(store.remove_blocked_term(1), None);
        assert_eq!(store.remove_blocked_term(usize::MAX), None);
        assert_eq!(store.remove_keyword(0), None);
        assert_eq!(store.settings().blocked_terms, vec!["spam"]);
    }

    #[test]
    fn test_set_model_accepts_anything() {
        let mut store = SettingsStore::default();
        store.set_model("my-fine-tune");
        assert_eq!(store.settings().model, "my-fine-tune");
        assert_eq!(model_label("my-fine-tune"), None);
        assert_eq!(model_label("gpt-4"), Some("GPT-4"));
    }

    #[test]
    fn test_toggle_from_field_name() {
        assert_eq!(
            "replyToQuestions".parse::<Toggle>(),
            Ok(Toggle::ReplyToQuestions)
        );
        assert_eq!(
            "replyToStatements".parse::<Toggle>(),
            Ok(Toggle::ReplyToStatements)
        );
        assert!("toneMatch".parse::<Toggle>().is_err());
        assert!("model".parse::<Toggle>().is_err());
    }

    #[test]
    fn test_settings_serialize_camel_case() {
        let value = serde_json::to_value(ReplySettings::default()).unwrap();
        assert_eq!(value["replyToQuestions"], true);
        assert_eq!(value["blockedTerms"], serde_json::json!([]));
        assert_eq!(value["toneMatch"], "");
    }
}
