//! One-shot analysis command

use std::io::Read;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use reply_analyzer::{ReplySettings, SettingsStore, Toggle};

use crate::context::AppContext;
use crate::interactive::print_result;

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Text to analyze (read from stdin when omitted)
    pub text: Option<String>,

    /// Priority keyword; repeat for more
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Blocked term; repeat for more
    #[arg(short, long = "blocked")]
    pub blocked: Vec<String>,

    /// Don't reply to questions
    #[arg(long)]
    pub no_questions: bool,

    /// Reply to statements
    #[arg(long)]
    pub statements: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl AnalyzeArgs {
    /// Apply the flags on top of the starting settings
    pub fn settings(&self, base: ReplySettings) -> ReplySettings {
        let mut store = SettingsStore::new(base);
        if self.no_questions && store.is_enabled(Toggle::ReplyToQuestions) {
            store.toggle(Toggle::ReplyToQuestions);
        }
        if self.statements && !store.is_enabled(Toggle::ReplyToStatements) {
            store.toggle(Toggle::ReplyToStatements);
        }
        for keyword in &self.keywords {
            store.add_keyword(keyword);
        }
        for term in &self.blocked {
            store.add_blocked_term(term);
        }
        store.settings().clone()
    }
}

pub async fn run_analyze(ctx: &AppContext, args: AnalyzeArgs) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };
    let mut session = ctx.session(args.settings(ctx.initial_settings()));
    let result = session
        .analyze_text(text)
        .await
        .map_err(|e| anyhow!(e.user_message()))?
        .clone();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, session.analyzed_at());
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reply_analyzer::Config;

    #[test]
    fn test_flags_apply_on_top_of_defaults() {
        let args = AnalyzeArgs {
            keywords: vec!["pricing".into(), "  ".into()],
            blocked: vec![" spam ".into()],
            no_questions: true,
            statements: true,
            ..Default::default()
        };
        let settings = args.settings(ReplySettings::default());

        assert!(!settings.reply_to_questions);
        assert!(settings.reply_to_statements);
        assert_eq!(settings.keywords, vec!["pricing"]);
        assert_eq!(settings.blocked_terms, vec!["spam"]);
    }

    #[tokio::test]
    async fn test_empty_text_reaches_credential_check() {
        let ctx = AppContext::new(Config::default(), true);
        let args = AnalyzeArgs {
            text: Some(String::new()),
            ..Default::default()
        };

        let err = run_analyze(&ctx, args).await.unwrap_err();
        assert_eq!(err.to_string(), "OpenAI API key not configured");
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let settings = AnalyzeArgs::default().settings(ReplySettings::default());
        assert_eq!(settings, ReplySettings::default());
    }
}
