//! Full pipeline against a mock OpenAI endpoint.

use mockito::Matcher;
use reply_analyzer::{
    AnalysisError, AnalysisPipeline, Config, ReplySession, ReplySettings, TextType, SYSTEM_PROMPT,
};
use serde_json::json;

fn completion_body(content: serde_json::Value) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo-0125",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content.to_string() },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 90, "completion_tokens": 60, "total_tokens": 150 }
    })
    .to_string()
}

fn session_for(server: &mockito::ServerGuard, settings: ReplySettings) -> ReplySession {
    let config = Config::default()
        .with_api_key("sk-test")
        .with_base_url(server.url());
    ReplySession::new(AnalysisPipeline::from_config(&config), settings)
}

#[tokio::test]
async fn test_question_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4",
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": "What's your pricing model?" }
            ],
            "response_format": { "type": "json_object" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(json!({
            "type": "question",
            "intent": "asking about pricing",
            "tone": "casual",
            "keywords": ["pricing", "model"],
            "engagement_value": 3,
            "recommendation": false,
            "reason": "Simple inquiry"
        })))
        .create_async()
        .await;

    let mut settings = ReplySettings::default();
    settings.model = "gpt-4".into();
    settings.keywords.push("pricing".into());
    let mut session = session_for(&server, settings);

    let result = session
        .analyze_text("What's your pricing model?")
        .await
        .unwrap()
        .clone();

    mock.assert_async().await;
    assert!(result.should_reply);
    assert_eq!(result.text_type, TextType::Question);
    assert_eq!(result.keywords, vec!["pricing", "model"]);
    assert_eq!(result.engagement_value, 3.0);
    assert!(!result.recommendation);
    assert_eq!(result.reason, "Simple inquiry");
    assert_eq!(result.matched_keywords, Some(vec!["pricing".to_string()]));
}

#[tokio::test]
async fn test_blocked_text_sends_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let mut settings = ReplySettings::default();
    settings.blocked_terms.push("spam".into());
    let mut session = session_for(&server, settings);

    let result = session.analyze_text("Is this SPAM?").await.unwrap();

    assert!(!result.should_reply);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body(r#"{"error":{"message":"The server had an error"}}"#)
        .create_async()
        .await;

    let mut session = session_for(&server, ReplySettings::default());
    let err = session.analyze_text("hello").await.unwrap_err();

    assert!(matches!(err, AnalysisError::Transport(_)));
    assert_eq!(session.last_error(), Some("API call failed"));
    assert!(session.last_result().is_none());
    assert!(!session.is_busy());
}

#[tokio::test]
async fn test_malformed_payload_is_parse_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion_body(json!({
            "type": "question",
            "intent": "greeting"
        })))
        .create_async()
        .await;

    let mut session = session_for(&server, ReplySettings::default());
    let err = session.analyze_text("hi").await.unwrap_err();

    assert!(matches!(err, AnalysisError::Parse(_)));
    assert_eq!(session.last_error(), Some("API call failed"));
}

#[tokio::test]
async fn test_out_of_range_engagement_passes_through() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(completion_body(json!({
            "type": "statement",
            "intent": "venting",
            "tone": "aggressive",
            "keywords": [],
            "engagement_value": 15,
            "recommendation": false,
            "reason": "Very engaging"
        })))
        .create_async()
        .await;

    let mut settings = ReplySettings::default();
    settings.reply_to_questions = false;
    let mut session = session_for(&server, settings);

    let result = session.analyze_text("This is outrageous").await.unwrap();

    assert_eq!(result.engagement_value, 15.0);
    assert!(result.should_reply);
}
