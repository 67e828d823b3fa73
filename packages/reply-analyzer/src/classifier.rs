//! Remote text classification.
//!
//! [`Classifier`] is the seam between the pipeline and the LLM provider;
//! [`OpenAIClassifier`] is the production implementation and
//! [`crate::testing::MockClassifier`] the test double.

use async_trait::async_trait;
use openai_client::{strip_code_blocks, ChatRequest, Message, OpenAIClient};
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::types::Classification;

/// Instruction sent as the system message of every classification request.
pub const SYSTEM_PROMPT: &str = "Analyze the following text and provide a JSON response with these fields:
- type: \"question\" | \"statement\"
- intent: brief description of the apparent intent
- tone: description of the tone (professional, casual, aggressive, etc.)
- keywords: array of important topical keywords
- engagement_value: number 1-10 rating how much this deserves a response
- recommendation: boolean whether to reply
- reason: brief explanation of the recommendation";

/// Sampling temperature for classification requests.
pub const TEMPERATURE: f32 = 0.7;

/// Labels a piece of text.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify `text` using the model identified by `model`.
    async fn classify(&self, text: &str, model: &str) -> Result<Classification>;
}

/// Classifier backed by the OpenAI chat completion API in JSON mode.
#[derive(Debug, Clone)]
pub struct OpenAIClassifier {
    client: OpenAIClient,
}

impl OpenAIClassifier {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    /// The request sent for `text`: system prompt, raw text, JSON mode.
    pub fn request(text: &str, model: &str) -> ChatRequest {
        ChatRequest::new(model)
            .message(Message::system(SYSTEM_PROMPT))
            .message(Message::user(text))
            .temperature(TEMPERATURE)
            .json_object()
    }
}

#[async_trait]
impl Classifier for OpenAIClassifier {
    async fn classify(&self, text: &str, model: &str) -> Result<Classification> {
        let response = self
            .client
            .chat_completion(Self::request(text, model))
            .await?;

        debug!(
            requested_model = model,
            answered_by = response.model.as_deref().unwrap_or("unknown"),
            content_len = response.content.len(),
            "Classifier responded"
        );

        parse_classification(&response.content)
    }
}

/// Parse the classifier's message content into a [`Classification`].
pub fn parse_classification(content: &str) -> Result<Classification> {
    serde_json::from_str(strip_code_blocks(content))
        .map_err(|e| AnalysisError::Parse(format!("Invalid classifier payload: {}", e)))
}
