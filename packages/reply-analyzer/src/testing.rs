//! Testing utilities including a mock classifier.
//!
//! Lets applications exercise the pipeline and session without making real
//! LLM calls, and assert on which calls were (or were not) made.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::classifier::Classifier;
use crate::error::{AnalysisError, Result};
use crate::types::{Classification, TextType};

/// Failure a [`MockClassifier`] should simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Transport,
    Parse,
}

/// Record of a call made to the mock classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockClassifierCall {
    pub text: String,
    pub model: String,
}

/// A mock classifier for testing.
///
/// Answers every call with the configured classification (a low-engagement
/// statement by default) or the configured failure.
pub struct MockClassifier {
    classification: Classification,
    failure: Option<MockFailure>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockClassifierCall>>>,
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            classification: classification(TextType::Statement, 1.0),
            failure: None,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Answer every call with `classification`.
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Fail every call with `failure`.
    pub fn failing(failure: MockFailure) -> Self {
        Self {
            failure: Some(failure),
            ..Self::new()
        }
    }

    pub fn failing_transport() -> Self {
        Self::failing(MockFailure::Transport)
    }

    pub fn failing_parse() -> Self {
        Self::failing(MockFailure::Parse)
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockClassifierCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, text: &str, model: &str) -> Result<Classification> {
        self.calls.write().unwrap().push(MockClassifierCall {
            text: text.to_string(),
            model: model.to_string(),
        });

        match self.failure {
            Some(MockFailure::Transport) => Err(AnalysisError::Transport(
                "mock: status 500: upstream unavailable".into(),
            )),
            Some(MockFailure::Parse) => Err(AnalysisError::Parse(
                "mock: missing field `engagement_value`".into(),
            )),
            None => Ok(self.classification.clone()),
        }
    }
}

/// A classification with placeholder text fields.
pub fn classification(text_type: TextType, engagement_value: f64) -> Classification {
    Classification {
        text_type,
        intent: format!("mock {} intent", text_type),
        tone: "neutral".to_string(),
        keywords: Vec::new(),
        engagement_value,
        recommendation: engagement_value >= 5.0,
        reason: "mock classification".to_string(),
    }
}
