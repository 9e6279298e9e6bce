//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the scanner and the grammar
//! tables:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_GRAMMAR!` - Builds a Grammar from an ordered rule list
//!
//! These macros reduce boilerplate in the rule tables.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's value (anything convertible into `TokenValue`)
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, 42.0, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $crate::lexer::tokens::TokenValue::from($value),
            span: $span,
        }
    };
}

/// Builds a Grammar from a name, an ordered list of
/// `(category, pattern, action)` rules and a keyword table.
///
/// Rules are tried in the order written. Evaluates to
/// `Result<Grammar, Error>`.
///
/// # Example
///
/// ```ignore
/// let grammar = MK_GRAMMAR!("tiny", [
///     ("WORD", "[a-z]+", RuleAction::Identifier(TokenKind::Name)),
///     ("SKIP", "[ ]+", RuleAction::Skip),
///     ("MISMATCH", ".", RuleAction::Mismatch),
/// ], keywords: [("IF", TokenKind::If)]);
/// ```
#[macro_export]
macro_rules! MK_GRAMMAR {
    ($name:expr, [$(($rule:expr, $pattern:expr, $action:expr)),* $(,)?], keywords: $keywords:expr) => {{
        let builder = $crate::lexer::grammars::GrammarBuilder::new($name)
            $(.rule($rule, $pattern, $action))*;
        builder.keywords($keywords).build()
    }};
}
