use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} on line {}, column {}", .position.line, .position.column)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// The offending character, for errors raised while scanning.
    pub fn character(&self) -> Option<char> {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { character } => Some(*character),
            _ => None,
        }
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InputTooLarge { .. } => "InputTooLarge",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { character } => {
                ErrorTip::Suggestion(format!("unexpected character `{}`", character.escape_debug()))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::InputTooLarge { len, limit } => ErrorTip::Suggestion(format!(
                "Input is {} bytes, the limit is {}",
                len, limit
            )),
            ErrorImpl::InvalidPattern { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{character:?} unexpected")]
    UnrecognisedToken { character: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("input of {len} bytes exceeds the limit of {limit}")]
    InputTooLarge { len: usize, limit: usize },
    #[error("rule {rule} has an invalid pattern: {message}")]
    InvalidPattern { rule: String, message: String },
}
