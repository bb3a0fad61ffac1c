use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_PUNCT_HANDLER, MK_TOKEN,
};

use super::context::{CloseOutcome, ContextStack, LexicalContext};
use super::tokens::{
    LiteralValue, Token, TokenKind, RESERVED_LOOKUP, STRUCT_RESERVED_LOOKUP, TYPE_KEYWORDS,
};

pub type RegexHandler = fn(&mut Tokenizer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Patterns for the inclusive contexts (Default, Namespace, Struct,
    /// Function). Order matters: the first pattern matching at the scan
    /// position wins, so the more specific numeric patterns (hex, float)
    /// precede the plain integer, and multi-character operators precede
    /// their single-character prefixes.
    static ref DEFAULT_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("\n+").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new("//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("0x[0-9a-fA-F]+").unwrap(), handler: hex_handler },
        RegexPattern { regex: Regex::new("[0-9]*\\.[0-9]+([eE][-+]?[0-9]+)?").unwrap(), handler: float_handler },
        RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: integer_handler },
        RegexPattern { regex: Regex::new("'.'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new("::").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::DoubleColon) },
        RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Eq) },
        RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Neq) },
        RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Lte) },
        RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Gte) },
        RegexPattern { regex: Regex::new("<<").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Shl) },
        RegexPattern { regex: Regex::new(">>").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Shr) },
        RegexPattern { regex: Regex::new("\\*\\*").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Pow) },
        RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::And) },
        RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Or) },
        RegexPattern { regex: Regex::new("\\+\\+").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::PlusPlus) },
        RegexPattern { regex: Regex::new("--").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::MinusMinus) },
        RegexPattern { regex: Regex::new("\\{").unwrap(), handler: lbrace_handler },
        RegexPattern { regex: Regex::new("\\}").unwrap(), handler: rbrace_handler },
        RegexPattern { regex: Regex::new("\\(").unwrap(), handler: lparen_handler },
        RegexPattern { regex: Regex::new("\\)").unwrap(), handler: rparen_handler },
        RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::LBracket) },
        RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::RBracket) },
        RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::LAngle) },
        RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::RAngle) },
        RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Dot) },
        RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Colon) },
        RegexPattern { regex: Regex::new("'").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Quote) },
        RegexPattern { regex: Regex::new("\"").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::DoubleQuote) },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Assign) },
        RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Minus) },
        RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Percent) },
        RegexPattern { regex: Regex::new("&").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Ampersand) },
        RegexPattern { regex: Regex::new("\\|").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Pipe) },
        RegexPattern { regex: Regex::new("\\^").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Caret) },
    ];

    /// The interface body is exclusive: method signatures only. Anything
    /// outside this set is a lexical error even if Default would accept it.
    static ref INTERFACE_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("\n+").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: exclusive_symbol_handler },
        RegexPattern { regex: Regex::new("::").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::DoubleColon) },
        RegexPattern { regex: Regex::new("\\(").unwrap(), handler: lparen_handler },
        RegexPattern { regex: Regex::new("\\{").unwrap(), handler: lbrace_handler },
        RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("\\}").unwrap(), handler: rbrace_handler },
    ];

    /// The parameter list is exclusive: typed names and separators only.
    static ref PARAMETER_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("\n+").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: exclusive_symbol_handler },
        RegexPattern { regex: Regex::new("::").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::DoubleColon) },
        RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_PUNCT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("\\)").unwrap(), handler: rparen_handler },
    ];
}

/// A lazy, finite, non-restartable token source. Construct a fresh
/// instance per source text; the context stack it owns lives exactly as
/// long as one scan.
///
/// Iteration yields `Ok(Token)` for each token and `Err` for lexical
/// errors. Recoverable errors (an unrecognized character) skip one
/// character and scanning continues on the next call; fatal errors
/// (a `template` inside a struct body, open contexts at end of input)
/// fuse the iterator.
pub struct Tokenizer {
    source: String,
    pos: usize,
    line: u32,
    contexts: ContextStack,
    done: bool,
}

impl Tokenizer {
    pub fn new(source: impl Into<String>) -> Tokenizer {
        Tokenizer {
            source: source.into(),
            pos: 0,
            line: 1,
            contexts: ContextStack::new(),
            done: false,
        }
    }

    /// The lexical context the scanner is currently in.
    pub fn context(&self) -> LexicalContext {
        self.contexts.current()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub(crate) fn position(&self) -> Position {
        Position::new(self.line, self.pos as u32)
    }

    pub(crate) fn span(&self, len: usize) -> Span {
        Span {
            start: Position::new(self.line, self.pos as u32),
            end: Position::new(self.line, (self.pos + len) as u32),
        }
    }

    pub fn next_token(&mut self) -> Option<Result<Token, Error>> {
        loop {
            if self.done {
                return None;
            }

            if self.at_eof() {
                self.done = true;
                if !self.contexts.is_balanced() {
                    let context = self.contexts.current().name().to_string();
                    return Some(Err(Error::new(
                        ErrorImpl::UnexpectedEndOfInput { context },
                        Tokenizer::position(self),
                    )));
                }
                return None;
            }

            let table: &Vec<RegexPattern> = match self.contexts.current() {
                LexicalContext::Interface => &INTERFACE_PATTERNS,
                LexicalContext::Parameter => &PARAMETER_PATTERNS,
                _ => &DEFAULT_PATTERNS,
            };

            let mut matched = None;
            for pattern in table.iter() {
                if let Some(found) = pattern.regex.find(self.remainder()) {
                    if found.start() == 0 {
                        matched = Some((found.as_str().to_string(), pattern.handler));
                        break;
                    }
                }
            }

            let Some((text, handler)) = matched else {
                let character = self.remainder().chars().next().unwrap();
                let error = Error::new(
                    ErrorImpl::IllegalCharacter { character },
                    Tokenizer::position(self),
                );
                self.advance_n(character.len_utf8());
                return Some(Err(error));
            };

            let result = handler(self, &text);
            self.advance_n(text.len());

            match result {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => continue,
                Err(error) => {
                    if error.is_fatal() {
                        self.done = true;
                    }
                    return Some(Err(error));
                }
            }
        }
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

fn skip_handler(_lexer: &mut Tokenizer, _text: &str) -> Result<Option<Token>, Error> {
    Ok(None)
}

fn newline_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    lexer.line += text.len() as u32;
    Ok(None)
}

fn symbol_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(text.len());

    if lexer.contexts.current() == LexicalContext::Struct {
        if text == "template" {
            return Err(Error::new(ErrorImpl::TemplateInStruct, Tokenizer::position(lexer)));
        }
        if let Some(kind) = STRUCT_RESERVED_LOOKUP.get(text).copied() {
            return Ok(Some(MK_TOKEN!(kind, text, None, span)));
        }
    }

    match RESERVED_LOOKUP.get(text).copied() {
        Some(TokenKind::Namespace) => {
            lexer.contexts.push(LexicalContext::Namespace);
            Ok(Some(MK_TOKEN!(TokenKind::Namespace, text, None, span)))
        }
        Some(TokenKind::Interface) => {
            lexer.contexts.push(LexicalContext::Interface);
            Ok(Some(MK_TOKEN!(TokenKind::Interface, text, None, span)))
        }
        Some(TokenKind::Struct) => {
            lexer.contexts.push(LexicalContext::Struct);
            Ok(Some(MK_TOKEN!(TokenKind::Struct, text, None, span)))
        }
        Some(TokenKind::Boolean) => {
            let literal = Some(LiteralValue::Bool(text == "true"));
            Ok(Some(MK_TOKEN!(TokenKind::Boolean, text, literal, span)))
        }
        Some(kind) => Ok(Some(MK_TOKEN!(kind, text, None, span))),
        None => Ok(Some(MK_TOKEN!(TokenKind::Identifier, text, None, span))),
    }
}

/// Word handling for the exclusive contexts: only the builtin type words
/// are keywords there, every other word is an identifier.
fn exclusive_symbol_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(text.len());

    if TYPE_KEYWORDS.contains(&text) {
        Ok(Some(MK_TOKEN!(TokenKind::Type, text, None, span)))
    } else {
        Ok(Some(MK_TOKEN!(TokenKind::Identifier, text, None, span)))
    }
}

fn integer_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let value = text.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: text.to_string(),
            },
            Tokenizer::position(lexer),
        )
    })?;

    let span = lexer.span(text.len());
    Ok(Some(MK_TOKEN!(
        TokenKind::Integer,
        text,
        Some(LiteralValue::Int(value)),
        span
    )))
}

fn hex_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let value = i64::from_str_radix(&text[2..], 16).map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: text.to_string(),
            },
            Tokenizer::position(lexer),
        )
    })?;

    let span = lexer.span(text.len());
    Ok(Some(MK_TOKEN!(
        TokenKind::Hex,
        text,
        Some(LiteralValue::Int(value)),
        span
    )))
}

fn float_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let value = text.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: text.to_string(),
            },
            Tokenizer::position(lexer),
        )
    })?;

    let span = lexer.span(text.len());
    Ok(Some(MK_TOKEN!(
        TokenKind::Float,
        text,
        Some(LiteralValue::Float(value)),
        span
    )))
}

fn char_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(text.len());
    let character = text.chars().nth(1).expect("char pattern is three chars");
    Ok(Some(MK_TOKEN!(
        TokenKind::CharLit,
        text,
        Some(LiteralValue::Char(character)),
        span
    )))
}

fn lbrace_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(text.len());
    lexer.contexts.open_brace();
    Ok(Some(MK_TOKEN!(TokenKind::LBrace, text, None, span)))
}

fn rbrace_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(text.len());
    match lexer.contexts.close_brace() {
        CloseOutcome::Unbalanced => Err(Error::new(
            ErrorImpl::UnbalancedDelimiter { delimiter: '}' },
            Tokenizer::position(lexer),
        )),
        CloseOutcome::Inner | CloseOutcome::Popped(_) => {
            Ok(Some(MK_TOKEN!(TokenKind::RBrace, text, None, span)))
        }
    }
}

fn lparen_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(text.len());
    lexer.contexts.push(LexicalContext::Parameter);
    Ok(Some(MK_TOKEN!(TokenKind::LParen, text, None, span)))
}

fn rparen_handler(lexer: &mut Tokenizer, text: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(text.len());
    if lexer.contexts.pop_parameter() {
        Ok(Some(MK_TOKEN!(TokenKind::RParen, text, None, span)))
    } else {
        Err(Error::new(
            ErrorImpl::UnbalancedDelimiter { delimiter: ')' },
            Tokenizer::position(lexer),
        ))
    }
}

/// Everything one scan produced: the token stream (terminated by an `Eof`
/// sentinel) plus every recoverable lexical error seen along the way.
#[derive(Debug)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<Error>,
}

/// Runs a fresh `Tokenizer` over the whole source. Recoverable lexical
/// errors are collected so a caller sees every bad character in one pass;
/// a fatal error aborts with `Err` and no token stream.
pub fn tokenize(source: &str) -> Result<LexOutput, Error> {
    let mut lexer = Tokenizer::new(source);
    let mut tokens = vec![];
    let mut errors = vec![];

    while let Some(item) = lexer.next_token() {
        match item {
            Ok(token) => tokens.push(token),
            Err(error) => {
                if error.is_fatal() {
                    return Err(error);
                }
                errors.push(error);
            }
        }
    }

    let span = lexer.span(0);
    tokens.push(MK_TOKEN!(TokenKind::Eof, "EOF", None, span));

    Ok(LexOutput { tokens, errors })
}
