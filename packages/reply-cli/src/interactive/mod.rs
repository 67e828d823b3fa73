//! Interactive reply-settings form
//!
//! A menu-driven form over a single [`reply_analyzer::ReplySession`]:
//! - Text input and an Analyze action (hidden while a request is in flight)
//! - Question/statement reply toggles
//! - Add/remove controls for priority keywords and blocked terms
//! - Model selector and a result panel

mod render;
mod runner;

pub use render::print_result;
pub use runner::run_interactive;
