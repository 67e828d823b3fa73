//! Reply filtering with LLM-assisted classification.
//!
//! Decides whether a piece of text deserves a reply by combining local
//! rules (blocked terms, priority keywords, question/statement toggles) with
//! a remote classifier's JSON verdict.
//!
//! # Example
//!
//! ```rust,ignore
//! use reply_analyzer::{AnalysisPipeline, Config, ReplySession, ReplySettings};
//!
//! let config = Config::from_env();
//! let mut session = ReplySession::new(
//!     AnalysisPipeline::from_config(&config),
//!     ReplySettings::default(),
//! );
//!
//! session.store_mut().add_keyword("pricing");
//! session.store_mut().add_blocked_term("unsubscribe");
//!
//! let result = session.analyze_text("What's your pricing model?").await?;
//! println!("reply? {}", result.should_reply);
//! ```
//!
//! # Decision order
//!
//! 1. No API key configured: configuration error, nothing else happens.
//! 2. Any blocked term in the text (case-insensitive): no reply, classifier
//!    not called.
//! 3. Otherwise the classifier labels the text, and a reply is warranted if
//!    any of the question toggle, statement toggle, a keyword match, or an
//!    engagement value of at least 7 says so.

pub mod classifier;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod rules;
pub mod session;
pub mod settings;
pub mod testing;
pub mod types;

pub use classifier::{parse_classification, Classifier, OpenAIClassifier, SYSTEM_PROMPT};
pub use config::Config;
pub use error::{AnalysisError, Result};
pub use pipeline::AnalysisPipeline;
pub use rules::{find_matches, satisfied_rules, should_reply, ReplyRule, ENGAGEMENT_THRESHOLD};
pub use session::ReplySession;
pub use settings::{
    model_label, KnownModel, ReplySettings, SettingsStore, Toggle, DEFAULT_MODEL, KNOWN_MODELS,
};
pub use types::{AnalysisResult, Classification, TextType, BLOCKED_REASON};

// Re-export testing utilities
pub use testing::{MockClassifier, MockClassifierCall, MockFailure};
