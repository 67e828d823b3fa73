//! The analysis pipeline: credential check, blocked-term veto, remote
//! classification, then the local decision merge.

use std::sync::Arc;

use tracing::{debug, info};

use crate::classifier::{Classifier, OpenAIClassifier};
use crate::config::Config;
use crate::error::{AnalysisError, Result};
use crate::rules::{find_matches, satisfied_rules};
use crate::settings::ReplySettings;
use crate::types::AnalysisResult;

/// Decides whether a text deserves a reply.
///
/// Holds no classifier when no API key was configured; every analysis then
/// fails before doing anything else.
#[derive(Clone)]
pub struct AnalysisPipeline {
    classifier: Option<Arc<dyn Classifier>>,
}

impl AnalysisPipeline {
    /// Pipeline talking to OpenAI when `config` carries a key.
    pub fn from_config(config: &Config) -> Self {
        Self {
            classifier: config
                .openai_client()
                .map(|client| Arc::new(OpenAIClassifier::new(client)) as Arc<dyn Classifier>),
        }
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    /// Pipeline with no credential; every analysis is a configuration error.
    pub fn unconfigured() -> Self {
        Self { classifier: None }
    }

    pub fn is_configured(&self) -> bool {
        self.classifier.is_some()
    }

    /// Analyze `text` under `settings`.
    ///
    /// The classifier is only called when no blocked term matches.
    pub async fn analyze(&self, text: &str, settings: &ReplySettings) -> Result<AnalysisResult> {
        let classifier = self
            .classifier
            .as_ref()
            .ok_or_else(AnalysisError::missing_api_key)?;

        let blocked = find_matches(text, &settings.blocked_terms);
        if !blocked.is_empty() {
            info!(blocked_terms = ?blocked, "Reply vetoed by blocked terms");
            return Ok(AnalysisResult::blocked(blocked));
        }

        let classification = classifier.classify(text, &settings.model).await?;

        let matched_keywords = find_matches(text, &settings.keywords);
        let rules = satisfied_rules(&classification, settings, !matched_keywords.is_empty());
        let should_reply = !rules.is_empty();

        debug!(
            text_type = %classification.text_type,
            engagement_value = classification.engagement_value,
            recommendation = classification.recommendation,
            rules = ?rules.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
            "Merged classification with local rules"
        );
        info!(
            should_reply,
            matched_keywords = matched_keywords.len(),
            "Analysis complete"
        );

        Ok(AnalysisResult::classified(
            classification,
            should_reply,
            matched_keywords,
        ))
    }
}

impl std::fmt::Debug for AnalysisPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisPipeline")
            .field("configured", &self.is_configured())
            .finish()
    }
}
