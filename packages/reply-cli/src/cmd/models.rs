//! List the selectable models

use console::style;
use reply_analyzer::KNOWN_MODELS;

use crate::context::AppContext;

pub fn list_models(ctx: &AppContext) {
    ctx.print_header("Models");
    let current = &ctx.config.default_model;
    for model in KNOWN_MODELS {
        let marker = if model.id == current.as_str() { "*" } else { " " };
        println!(
            "{} {:<16} {}",
            style(marker).green(),
            model.id,
            style(model.label).dim()
        );
    }

    if !KNOWN_MODELS.iter().any(|m| m.id == current.as_str()) {
        ctx.print_info(&format!("Using unlisted model: {}", current));
    }
}
