//! Main interactive form loop

use anyhow::Result;
use console::style;
use dialoguer::{Input, Select};
use reply_analyzer::{ReplySession, KNOWN_MODELS};

use crate::context::AppContext;
use crate::menu::FormAction;

use super::render::{build_form_items, format_status_bar, print_result};

/// Menu label of the analyze action; the intro line points at it.
pub(crate) const ANALYZE_LABEL: &str = "Analyze text";

const INTRO: &str = "Enter some text and pick 'Analyze text' when ready.";

/// Run the interactive form until the user quits
pub async fn run_interactive(ctx: &AppContext, session: &mut ReplySession) -> Result<()> {
    ctx.print_info(INTRO);
    if !session.is_configured() {
        ctx.print_warning("OPENAI_API_KEY is not set; analysis will fail until it is.");
    }

    loop {
        if !ctx.quiet {
            println!();
            println!("{}", format_status_bar(session));
            println!();
        }

        let items = build_form_items(session);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        let default_idx = items
            .iter()
            .position(|i| i.action == FormAction::Analyze)
            .unwrap_or(0);

        let choice = Select::with_theme(&ctx.theme())
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(default_idx)
            .interact()?;

        if !execute_action(ctx, session, items[choice].action).await? {
            break;
        }
    }

    Ok(())
}

/// Execute a form action; returns false when the form should close
async fn execute_action(
    ctx: &AppContext,
    session: &mut ReplySession,
    action: FormAction,
) -> Result<bool> {
    match action {
        FormAction::Quit => {
            ctx.print_success("Goodbye!");
            return Ok(false);
        }

        FormAction::EditText => {
            let text: String = Input::with_theme(&ctx.theme())
                .with_prompt("Text to analyze")
                .with_initial_text(session.input_text())
                .allow_empty(true)
                .interact_text()?;
            session.set_input_text(text);
        }

        FormAction::Analyze => analyze(ctx, session).await,

        FormAction::Toggle(toggle) => {
            session.store_mut().toggle(toggle);
        }

        FormAction::AddKeyword => {
            let term = prompt_term(ctx, "Add keyword")?;
            if !session.store_mut().add_keyword(&term) {
                ctx.print_warning("Ignored empty keyword");
            }
        }
        FormAction::RemoveKeyword => {
            let keywords = session.settings().keywords.clone();
            if let Some(index) = pick_term(ctx, "Remove keyword", &keywords)? {
                session.store_mut().remove_keyword(index);
            }
        }

        FormAction::AddBlockedTerm => {
            let term = prompt_term(ctx, "Add blocked term")?;
            if !session.store_mut().add_blocked_term(&term) {
                ctx.print_warning("Ignored empty blocked term");
            }
        }
        FormAction::RemoveBlockedTerm => {
            let terms = session.settings().blocked_terms.clone();
            if let Some(index) = pick_term(ctx, "Remove blocked term", &terms)? {
                session.store_mut().remove_blocked_term(index);
            }
        }

        FormAction::ChooseModel => {
            let labels: Vec<&str> = KNOWN_MODELS.iter().map(|m| m.label).collect();
            let current = KNOWN_MODELS
                .iter()
                .position(|m| m.id == session.settings().model)
                .unwrap_or(0);
            let choice = Select::with_theme(&ctx.theme())
                .with_prompt("Model")
                .items(&labels)
                .default(current)
                .interact()?;
            session.store_mut().set_model(KNOWN_MODELS[choice].id);
        }
    }

    Ok(true)
}

/// Run one analysis and show its outcome
async fn analyze(ctx: &AppContext, session: &mut ReplySession) {
    if !ctx.quiet {
        println!("{}", style("Analyzing...").dim());
    }

    // Errors are already recorded on the session as a user-facing message
    let _ = session.analyze().await;

    if let Some(message) = session.last_error() {
        ctx.print_error(message);
    } else if let Some(result) = session.last_result() {
        print_result(result, session.analyzed_at());
    }
}

fn prompt_term(ctx: &AppContext, prompt: &str) -> Result<String> {
    Ok(Input::with_theme(&ctx.theme())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Let the user pick an entry to remove; `None` if they back out
fn pick_term(ctx: &AppContext, prompt: &str, terms: &[String]) -> Result<Option<usize>> {
    let mut labels: Vec<&str> = terms.iter().map(String::as_str).collect();
    labels.push("← Back");

    let choice = Select::with_theme(&ctx.theme())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok((choice < terms.len()).then_some(choice))
}
