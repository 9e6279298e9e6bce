use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("ENDIF", TokenKind::EndIf);
        map.insert("FOR", TokenKind::For);
        map.insert("NEXT", TokenKind::Next);
        map.insert("GOSUB", TokenKind::Gosub);
        map.insert("RETURN", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    String,

    // Structured literals
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    Colon,
    Comma,
    Constant, // true | false | null

    // Symbolic expressions
    LPar,
    RPar,
    Char,
    Name,
    Bool,

    // Reserved
    If,
    Then,
    EndIf,
    For,
    Next,
    Gosub,
    Return,
}

impl TokenKind {
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBrack => "LBRACK",
            TokenKind::RBrack => "RBRACK",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Constant => "CTE",
            TokenKind::LPar => "LPAR",
            TokenKind::RPar => "RPAR",
            TokenKind::Char => "CHAR",
            TokenKind::Name => "NAME",
            TokenKind::Bool => "BOOL",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::EndIf => "ENDIF",
            TokenKind::For => "FOR",
            TokenKind::Next => "NEXT",
            TokenKind::Gosub => "GOSUB",
            TokenKind::Return => "RETURN",
        }
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }

    /// Punctuation that gives a structured literal its shape.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBrack
                | TokenKind::RBrack
                | TokenKind::Colon
                | TokenKind::Comma
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Text(String),
    Number(f64),
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            TokenValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TokenValue::Number(number) => Some(*number),
            TokenValue::Text(_) => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{:?}", text),
            TokenValue::Number(number) => write!(f, "{:?}", number),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

impl Token {
    /// The lexeme as written, or `None` for decoded numbers.
    pub fn text(&self) -> Option<&str> {
        self.value.as_text()
    }

    pub fn number(&self) -> Option<f64> {
        self.value.as_number()
    }
}
