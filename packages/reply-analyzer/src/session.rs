//! Session state behind the form: settings, input text, busy flag, and the
//! last result or error.

use chrono::{DateTime, Utc};
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::{AnalysisError, Result};
use crate::pipeline::AnalysisPipeline;
use crate::settings::{ReplySettings, SettingsStore};
use crate::types::AnalysisResult;

/// One user's form session.
///
/// A failed analysis records a user-facing message and leaves the previous
/// result in place; a successful one replaces it.
#[derive(Debug)]
pub struct ReplySession {
    pipeline: AnalysisPipeline,
    store: SettingsStore,
    input_text: String,
    busy: bool,
    last_result: Option<AnalysisResult>,
    last_error: Option<String>,
    analyzed_at: Option<DateTime<Utc>>,
}

impl ReplySession {
    pub fn new(pipeline: AnalysisPipeline, settings: ReplySettings) -> Self {
        Self {
            pipeline,
            store: SettingsStore::new(settings),
            input_text: String::new(),
            busy: false,
            last_result: None,
            last_error: None,
            analyzed_at: None,
        }
    }

    pub fn settings(&self) -> &ReplySettings {
        self.store.settings()
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SettingsStore {
        &mut self.store
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    /// True while a classifier call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_configured(&self) -> bool {
        self.pipeline.is_configured()
    }

    pub fn last_result(&self) -> Option<&AnalysisResult> {
        self.last_result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// When the current result was produced.
    pub fn analyzed_at(&self) -> Option<DateTime<Utc>> {
        self.analyzed_at
    }

    /// Analyze the current input text with the current settings.
    pub async fn analyze(&mut self) -> Result<&AnalysisResult> {
        if self.busy {
            return Err(AnalysisError::Busy);
        }
        if !self.pipeline.is_configured() {
            let err = AnalysisError::missing_api_key();
            self.last_error = Some(err.user_message());
            return Err(err);
        }

        self.busy = true;
        self.last_error = None;

        let run_id = Uuid::now_v7();
        let outcome = self
            .pipeline
            .analyze(&self.input_text, self.store.settings())
            .instrument(info_span!("analysis", %run_id, model = %self.store.settings().model))
            .await;

        self.busy = false;

        match outcome {
            Ok(result) => {
                self.analyzed_at = Some(Utc::now());
                Ok(&*self.last_result.insert(result))
            }
            Err(err) => {
                warn!(%run_id, error = %err, "Analysis failed");
                self.last_error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Replace the input text, then analyze it.
    pub async fn analyze_text(&mut self, text: impl Into<String>) -> Result<&AnalysisResult> {
        self.set_input_text(text);
        self.analyze().await
    }
}
