use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_GRAMMAR,
};

use super::tokens::{TokenKind, RESERVED_LOOKUP};

lazy_static! {
    /// Brace/bracket literals with quoted words, numbers and `true|false|null`.
    pub static ref JSON_GRAMMAR: Grammar = MK_GRAMMAR!("json", [
        ("LBRACE", r"\{", RuleAction::Emit(TokenKind::LBrace)),
        ("RBRACE", r"\}", RuleAction::Emit(TokenKind::RBrace)),
        ("LBRACK", r"\[", RuleAction::Emit(TokenKind::LBrack)),
        ("RBRACK", r"\]", RuleAction::Emit(TokenKind::RBrack)),
        ("STRING", r#""[0-9A-Za-z_ ]*""#, RuleAction::Emit(TokenKind::String)),
        ("COLON", r":", RuleAction::Emit(TokenKind::Colon)),
        ("COMMA", r",", RuleAction::Emit(TokenKind::Comma)),
        ("NUMBER", r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", RuleAction::Number(TokenKind::Number)),
        ("CTE", r"true|false|null", RuleAction::Emit(TokenKind::Constant)),
        ("NEWLINE", r"\n", RuleAction::Newline),
        ("SKIP", r"[ \t]+", RuleAction::Skip),
        ("MISMATCH", r"(?s).", RuleAction::Mismatch),
    ], keywords: RESERVED_LOOKUP.iter().map(|(word, kind)| (*word, *kind)))
    .expect("json grammar patterns are valid");

    /// Lisp-style s-expressions. NUMBER sits before NAME, so `+1` is a
    /// number while a bare `+` or `-` is a name.
    pub static ref SEXPR_GRAMMAR: Grammar = MK_GRAMMAR!("sexpr", [
        ("LPAR", r"\(", RuleAction::Emit(TokenKind::LPar)),
        ("RPAR", r"\)", RuleAction::Emit(TokenKind::RPar)),
        ("CHAR", r"#\\\S[^\s()]*", RuleAction::Emit(TokenKind::Char)),
        ("NUMBER", r"[+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", RuleAction::Number(TokenKind::Number)),
        ("NAME", r"[-+*/<>=!?%&^~._a-zA-Z0-9]+", RuleAction::Identifier(TokenKind::Name)),
        ("BOOL", r"#(true|false|t|f)", RuleAction::Emit(TokenKind::Bool)),
        ("STRING", r#""(\\.|[^"\\])*""#, RuleAction::Emit(TokenKind::String)),
        ("COMMENT", r";[^\n]*", RuleAction::Skip),
        ("NEWLINE", r"\n", RuleAction::Newline),
        ("SKIP", r"[ \t\r]+", RuleAction::Skip),
        ("MISMATCH", r"(?s).", RuleAction::Mismatch),
    ], keywords: RESERVED_LOOKUP.iter().map(|(word, kind)| (*word, *kind)))
    .expect("sexpr grammar patterns are valid");
}

/// What the scanner does with a lexeme once its rule has matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    /// Emit the raw lexeme under the given kind.
    Emit(TokenKind),
    /// Decode the lexeme as a floating point number.
    Number(TokenKind),
    /// Emit under the given kind unless the lexeme is a keyword.
    Identifier(TokenKind),
    Newline,
    Skip,
    /// Catch-all: the character at the cursor is not part of the grammar.
    Mismatch,
}

#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    regex: Regex,
    action: RuleAction,
}

impl Rule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action(&self) -> RuleAction {
        self.action
    }

    /// Length of the non-empty prefix of `input` this rule matches.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex.find(input).map(|m| m.end()).filter(|len| *len > 0)
    }
}

/// An ordered rule table plus the keyword set used to reclassify
/// identifiers. Immutable once built.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: String,
    rules: Vec<Rule>,
    keywords: HashMap<String, TokenKind>,
}

impl Grammar {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn keyword(&self, word: &str) -> Option<TokenKind> {
        self.keywords.get(word).copied()
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, TokenKind)> + '_ {
        self.keywords.iter().map(|(word, kind)| (word.as_str(), *kind))
    }

    /// First rule in table order matching a non-empty prefix of `input`,
    /// together with the match length.
    pub fn first_match(&self, input: &str) -> Option<(&Rule, usize)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_len(input).map(|len| (rule, len)))
    }
}

pub struct GrammarBuilder {
    name: String,
    rules: Vec<(String, String, RuleAction)>,
    keywords: HashMap<String, TokenKind>,
}

impl GrammarBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        GrammarBuilder {
            name: name.into(),
            rules: vec![],
            keywords: HashMap::new(),
        }
    }

    /// Appends a rule with lower priority than every rule added before it.
    pub fn rule(mut self, name: impl Into<String>, pattern: impl Into<String>, action: RuleAction) -> Self {
        self.rules.push((name.into(), pattern.into(), action));
        self
    }

    pub fn keyword(mut self, word: impl Into<String>, kind: TokenKind) -> Self {
        self.keywords.insert(word.into(), kind);
        self
    }

    pub fn keywords<I, W>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = (W, TokenKind)>,
        W: AsRef<str>,
    {
        for (word, kind) in keywords {
            self.keywords.insert(word.as_ref().to_string(), kind);
        }
        self
    }

    pub fn build(self) -> Result<Grammar, Error> {
        let mut rules = Vec::with_capacity(self.rules.len());

        for (name, pattern, action) in self.rules {
            let regex = Regex::new(&format!(r"\A(?:{})", pattern)).map_err(|err| {
                Error::new(
                    ErrorImpl::InvalidPattern {
                        rule: name.clone(),
                        message: err.to_string(),
                    },
                    Position::null(),
                )
            })?;

            rules.push(Rule { name, regex, action });
        }

        tracing::debug!(grammar = self.name.as_str(), rules = rules.len(), "built grammar");

        Ok(Grammar {
            name: self.name,
            rules,
            keywords: self.keywords,
        })
    }
}
