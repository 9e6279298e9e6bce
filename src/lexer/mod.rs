//! Lexical analysis.
//!
//! This module contains the scanner that converts source text into a flat
//! stream of tokens. It handles:
//!
//! - Ordered rule tables where the first matching rule wins
//! - Number decoding and keyword reclassification of identifiers
//! - Line and column tracking for error reporting
//! - Comments and whitespace handling
//!
//! Two grammars ship with the crate: [`grammars::JSON_GRAMMAR`] for
//! brace/bracket literals and [`grammars::SEXPR_GRAMMAR`] for
//! s-expressions. Others can be assembled with
//! [`grammars::GrammarBuilder`].

pub mod grammars;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
