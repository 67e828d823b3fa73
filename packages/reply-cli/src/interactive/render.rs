//! Form rendering: menu items, status bar, and the result panel

use chrono::{DateTime, Local, Utc};
use console::style;
use reply_analyzer::{model_label, AnalysisResult, ReplySession, Toggle};

use crate::menu::FormAction;

use super::runner::ANALYZE_LABEL;

/// A selectable line of the form menu
#[derive(Debug, Clone)]
pub struct FormItem {
    pub label: String,
    pub action: FormAction,
}

impl FormItem {
    fn new(label: impl Into<String>, action: FormAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Build the menu for the current session state
pub fn build_form_items(session: &ReplySession) -> Vec<FormItem> {
    let settings = session.settings();
    let mut items = vec![FormItem::new(
        format!("Edit text ({})", describe_input(session.input_text())),
        FormAction::EditText,
    )];

    // Disabled while a request is outstanding
    if !session.is_busy() {
        items.push(FormItem::new(ANALYZE_LABEL, FormAction::Analyze));
    }

    for &toggle in Toggle::all() {
        let state = if session.store().is_enabled(toggle) {
            "on"
        } else {
            "off"
        };
        items.push(FormItem::new(
            format!("{} [{}]", toggle.label(), state),
            FormAction::Toggle(toggle),
        ));
    }

    items.push(FormItem::new("Add keyword", FormAction::AddKeyword));
    if !settings.keywords.is_empty() {
        items.push(FormItem::new("Remove keyword", FormAction::RemoveKeyword));
    }
    items.push(FormItem::new("Add blocked term", FormAction::AddBlockedTerm));
    if !settings.blocked_terms.is_empty() {
        items.push(FormItem::new(
            "Remove blocked term",
            FormAction::RemoveBlockedTerm,
        ));
    }
    items.push(FormItem::new(
        format!("Model: {}", display_model(&settings.model)),
        FormAction::ChooseModel,
    ));
    items.push(FormItem::new("Quit", FormAction::Quit));
    items
}

fn describe_input(text: &str) -> String {
    match text.chars().count() {
        0 => "empty".to_string(),
        1 => "1 char".to_string(),
        n => format!("{} chars", n),
    }
}

/// Label for a model id, falling back to the raw id
pub fn display_model(id: &str) -> String {
    match model_label(id) {
        Some(label) => label.to_string(),
        None => id.to_string(),
    }
}

/// Comma-separated list, or "none" when empty
pub fn format_terms(terms: &[String]) -> String {
    if terms.is_empty() {
        "none".to_string()
    } else {
        terms.join(", ")
    }
}

/// Format the status bar at the top of the form
pub fn format_status_bar(session: &ReplySession) -> String {
    let settings = session.settings();
    let key = if session.is_configured() {
        format!("API key {}", style("●").green())
    } else {
        format!("API key {}", style("○ missing").red())
    };

    let parts = [
        key,
        format!("Model {}", style(display_model(&settings.model)).cyan()),
        format!(
            "Keywords {}",
            style(format_terms(&settings.keywords)).dim()
        ),
        format!(
            "Blocked {}",
            style(format_terms(&settings.blocked_terms)).dim()
        ),
    ];
    parts.join("  │  ")
}

/// Headline verdict for a result
pub fn verdict_line(result: &AnalysisResult) -> &'static str {
    if result.should_reply {
        "✓ This text should receive a reply"
    } else {
        "✗ This text should not receive a reply"
    }
}

/// Detail lines of the result panel (unstyled)
pub fn result_lines(result: &AnalysisResult) -> Vec<String> {
    let mut lines = vec![
        format!("• Type: {}", result.text_type),
        format!("• Intent: {}", result.intent),
        format!("• Tone: {}", result.tone),
        format!("• Engagement Value: {}/10", result.engagement_value),
    ];

    if result.has_keywords == Some(true) {
        if let Some(matched) = &result.matched_keywords {
            lines.push(format!("• Matched keywords: {}", matched.join(", ")));
        }
    }
    if let Some(found) = result.blocked_terms_found.as_ref().filter(|f| !f.is_empty()) {
        lines.push(format!("• Blocked terms found: {}", found.join(", ")));
    }
    if !result.keywords.is_empty() {
        lines.push(format!("• Detected topics: {}", result.keywords.join(", ")));
    }
    lines.push(format!("• Reason: {}", result.reason));
    lines
}

/// Print the result panel
pub fn print_result(result: &AnalysisResult, analyzed_at: Option<DateTime<Utc>>) {
    println!();
    let verdict = verdict_line(result);
    if result.should_reply {
        println!("{}", style(verdict).green().bold());
    } else {
        println!("{}", style(verdict).red().bold());
    }
    for line in result_lines(result) {
        println!("  {}", line);
    }
    if let Some(at) = analyzed_at {
        let local: DateTime<Local> = at.into();
        println!(
            "  {}",
            style(format!("analyzed at {}", local.format("%H:%M:%S"))).dim()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reply_analyzer::{AnalysisPipeline, Classification, ReplySettings, TextType};

    fn classified(should_reply: bool, matched: Vec<String>) -> AnalysisResult {
        AnalysisResult::classified(
            Classification {
                text_type: TextType::Question,
                intent: "asking about pricing".into(),
                tone: "casual".into(),
                keywords: vec!["pricing".into(), "plans".into()],
                engagement_value: 7.5,
                recommendation: true,
                reason: "Direct question".into(),
            },
            should_reply,
            matched,
        )
    }

    #[test]
    fn test_result_lines_for_classified_text() {
        let lines = result_lines(&classified(true, vec!["Pricing".into()]));
        assert_eq!(
            lines,
            vec![
                "• Type: question",
                "• Intent: asking about pricing",
                "• Tone: casual",
                "• Engagement Value: 7.5/10",
                "• Matched keywords: Pricing",
                "• Detected topics: pricing, plans",
                "• Reason: Direct question",
            ]
        );
    }

    #[test]
    fn test_result_lines_skip_empty_matches() {
        let lines = result_lines(&classified(false, vec![]));
        assert!(!lines.iter().any(|l| l.starts_with("• Matched keywords")));
    }

    #[test]
    fn test_result_lines_for_blocked_text() {
        let lines = result_lines(&AnalysisResult::blocked(vec!["spam".into()]));
        assert!(lines.contains(&"• Engagement Value: 0/10".to_string()));
        assert!(lines.contains(&"• Blocked terms found: spam".to_string()));
        assert!(lines.contains(&"• Reason: Contains blocked terms".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("• Detected topics")));
    }

    #[test]
    fn test_verdict_line() {
        assert_eq!(
            verdict_line(&classified(true, vec![])),
            "✓ This text should receive a reply"
        );
        assert_eq!(
            verdict_line(&AnalysisResult::blocked(vec![])),
            "✗ This text should not receive a reply"
        );
    }

    #[test]
    fn test_form_items_reflect_state() {
        let mut session =
            ReplySession::new(AnalysisPipeline::unconfigured(), ReplySettings::default());
        let labels: Vec<String> = build_form_items(&session)
            .into_iter()
            .map(|i| i.label)
            .collect();
        assert!(labels.contains(&"Reply to questions [on]".to_string()));
        assert!(labels.contains(&"Reply to statements [off]".to_string()));
        assert!(labels.contains(&"Model: GPT-3.5 Turbo".to_string()));
        assert!(labels.contains(&"Edit text (empty)".to_string()));
        assert!(!labels.contains(&"Remove keyword".to_string()));

        session.store_mut().add_keyword("pricing");
        session.set_input_text("hi");
        let actions: Vec<FormAction> = build_form_items(&session)
            .into_iter()
            .map(|i| i.action)
            .collect();
        assert!(actions.contains(&FormAction::RemoveKeyword));
        assert!(actions.contains(&FormAction::Analyze));
        assert!(!actions.contains(&FormAction::RemoveBlockedTerm));
    }

    #[test]
    fn test_display_model_falls_back_to_id() {
        assert_eq!(display_model("gpt-4"), "GPT-4");
        assert_eq!(display_model("local-llama"), "local-llama");
    }
}
