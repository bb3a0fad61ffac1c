//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PUNCT_HANDLER!` - Creates a handler for fixed punctuation/operator tokens
//!
//! These macros reduce boilerplate in the lexer's pattern tables.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's source text
/// * `$literal` - The literal payload, or `None`
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42", Some(LiteralValue::Int(42)), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            text: String::from($text),
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a fixed punctuation or operator token.
///
/// Expands to a capture-free closure coercible to a handler fn pointer;
/// the generated handler emits a token of the given kind spanning the
/// matched text.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(";").unwrap(),
///     handler: MK_PUNCT_HANDLER!(TokenKind::Semicolon),
/// }
/// ```
#[macro_export]
macro_rules! MK_PUNCT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Tokenizer, text: &str| -> Result<Option<Token>, Error> {
            let span = lexer.span(text.len());
            Ok(Some(MK_TOKEN!($kind, text, None, span)))
        }
    };
}
