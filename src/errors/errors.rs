use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Broad classification of an error, used by callers to decide whether
/// scanning may continue (lexical) or the whole call is lost (syntax,
/// structural).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Structural,
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

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorKind::Lexical,
            ErrorImpl::UnbalancedDelimiter { .. } => ErrorKind::Lexical,
            ErrorImpl::NumberParseError { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedEndOfInput { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. } => ErrorKind::Syntax,
            ErrorImpl::UnexpectedTokenDetailed { .. } => ErrorKind::Syntax,
            ErrorImpl::UnexpectedEof => ErrorKind::Syntax,
            ErrorImpl::TemplateInStruct => ErrorKind::Structural,
        }
    }

    /// True for errors that abort the tokenize call outright: the
    /// structural template-in-struct violation and running out of input
    /// with contexts still open. Every other lexical error is recorded
    /// and scanning continues.
    pub fn is_fatal(&self) -> bool {
        matches!(
            &self.internal_error,
            ErrorImpl::TemplateInStruct | ErrorImpl::UnexpectedEndOfInput { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::UnbalancedDelimiter { .. } => "UnbalancedDelimiter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::TemplateInStruct => "TemplateInStruct",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } => ErrorTip::Suggestion(format!(
                "Illegal character `{}` at line {}",
                character, self.position.line
            )),
            ErrorImpl::UnbalancedDelimiter { delimiter } => ErrorTip::Suggestion(format!(
                "`{}` closes nothing, is an opening delimiter missing?",
                delimiter
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedEndOfInput { context } => ErrorTip::Suggestion(format!(
                "Source ended inside a {} body, is a closing delimiter missing?",
                context
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEof => {
                ErrorTip::Suggestion(String::from("Unexpected end of file"))
            }
            ErrorImpl::TemplateInStruct => ErrorTip::Suggestion(String::from(
                "A template header must precede the struct declaration, not appear inside its body",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}",
            self.internal_error, self.position.line
        )
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
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: char },
    #[error("unbalanced closing delimiter {delimiter:?}")]
    UnbalancedDelimiter { delimiter: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected end of input inside {context}")]
    UnexpectedEndOfInput { context: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of file")]
    UnexpectedEof,
    #[error("template is not allowed inside of a struct body")]
    TemplateInStruct,
}
