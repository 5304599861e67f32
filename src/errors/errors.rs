use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Phase classification of an error: lexical, syntactic or name resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
    Name,
}

#[derive(Debug, Clone)]
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

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lex,
            ErrorImpl::UnterminatedString { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::Syntax,
            ErrorImpl::UnexpectedTokenDetailed { .. } => ErrorKind::Syntax,
            ErrorImpl::NumberParseError { .. } => ErrorKind::Syntax,
            ErrorImpl::InvalidAssignmentTarget { .. } => ErrorKind::Syntax,
            ErrorImpl::VariableNotDeclared { .. } => ErrorKind::Name,
            ErrorImpl::NotCallable { .. } => ErrorKind::Name,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::NotCallable { .. } => "NotCallable",
        }
    }

    /// The offending source text the error refers to.
    pub fn get_lexeme(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => token,
            ErrorImpl::UnterminatedString { token } => token,
            ErrorImpl::UnexpectedToken { token } => token,
            ErrorImpl::UnexpectedTokenDetailed { token, .. } => token,
            ErrorImpl::NumberParseError { token } => token,
            ErrorImpl::InvalidAssignmentTarget { token } => token,
            ErrorImpl::VariableNotDeclared { variable } => variable,
            ErrorImpl::NotCallable { function } => function,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "String literal never closed, did you miss a closing backtick?",
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidAssignmentTarget { token } => ErrorTip::Suggestion(format!(
                "Cannot assign to `{}`, only an identifier can appear left of `=`",
                token
            )),
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::NotCallable { function } => {
                ErrorTip::Suggestion(format!("`{}` is not a function", function))
            }
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal: {token:?}")]
    UnterminatedString { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid assignment target: {token:?}")]
    InvalidAssignmentTarget { token: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("{function:?} is not a function")]
    NotCallable { function: String },
}
