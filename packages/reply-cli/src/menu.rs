//! Form action types

use reply_analyzer::Toggle;

/// Actions that can be performed from the form menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    // Text
    EditText,
    Analyze,
    // Reply rules
    Toggle(Toggle),
    // Priority keywords
    AddKeyword,
    RemoveKeyword,
    // Blocked terms
    AddBlockedTerm,
    RemoveBlockedTerm,
    // Model
    ChooseModel,
    Quit,
}
