//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts IDL source text into a
//! stream of tokens for parsing. Unlike a flat scanner it runs a stack of
//! lexical contexts: which token patterns are legal depends on whether the
//! scanner is inside a namespace, an interface body, a parameter list, or a
//! struct body. It handles:
//!
//! - Tokenization of source code using per-context regex pattern tables
//! - Context transitions on `namespace`/`interface`/`struct` and `(`
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token line/offset tracking for error reporting
//! - Comments and whitespace handling

pub mod context;
pub mod lexer;
pub mod tokens;
