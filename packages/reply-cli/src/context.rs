//! Application context with shared state and utilities

use console::style;
use dialoguer::theme::ColorfulTheme;
use reply_analyzer::{AnalysisPipeline, Config, ReplySession, ReplySettings};

/// Application context passed to all commands
pub struct AppContext {
    pub quiet: bool,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config, quiet: bool) -> Self {
        Self { quiet, config }
    }

    pub fn theme(&self) -> ColorfulTheme {
        ColorfulTheme::default()
    }

    /// Settings a fresh session starts from.
    pub fn initial_settings(&self) -> ReplySettings {
        ReplySettings {
            model: self.config.default_model.clone(),
            ..Default::default()
        }
    }

    pub fn session(&self, settings: ReplySettings) -> ReplySession {
        ReplySession::new(AnalysisPipeline::from_config(&self.config), settings)
    }

    pub fn print_header(&self, msg: &str) {
        if !self.quiet {
            println!();
            println!("{}", style(msg).bold());
        }
    }

    pub fn print_success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).green());
        }
    }

    pub fn print_warning(&self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).yellow());
        }
    }

    pub fn print_info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).cyan());
        }
    }

    /// Errors are printed even in quiet mode.
    pub fn print_error(&self, msg: &str) {
        eprintln!("{}", style(msg).red().bold());
    }
}
