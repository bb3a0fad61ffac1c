use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Builtin type names. These lex as a single `Type` kind with the word
/// preserved in the token text; they are also the only keywords the
/// exclusive contexts (interface bodies, parameter lists) recognize.
pub const TYPE_KEYWORDS: [&str; 9] = [
    "bool", "int", "void", "char", "long", "uint32", "uint64", "uint128", "uint256",
];

lazy_static! {
    /// Reserved words for the inclusive contexts. Whole-word matching comes
    /// for free: the identifier pattern consumes the maximal word before
    /// this table is consulted, so `intX` stays an identifier.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for word in TYPE_KEYWORDS {
            map.insert(word, TokenKind::Type);
        }
        map.insert("typedef", TokenKind::Typedef);
        map.insert("namespace", TokenKind::Namespace);
        map.insert("interface", TokenKind::Interface);
        map.insert("template", TokenKind::Template);
        map.insert("struct", TokenKind::Struct);
        map.insert("implements", TokenKind::Implements);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("true", TokenKind::Boolean);
        map.insert("false", TokenKind::Boolean);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map
    };

    /// Words that are keywords only inside a struct body. Everywhere else
    /// they lex as plain identifiers.
    pub static ref STRUCT_RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("constructor", TokenKind::Constructor);
        map.insert("destructor", TokenKind::Destructor);
        map.insert("hidden", TokenKind::Visibility);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,

    // Literals
    Integer,
    Hex,
    Float,
    Boolean,
    CharLit,

    Identifier,

    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LAngle,
    RAngle,
    Semicolon,
    Comma,
    Dot,
    Colon,
    DoubleColon,
    Quote,
    DoubleQuote,

    // Operators
    Eq,  // ==
    Neq, // !=
    Gte, // >=
    Lte, // <=
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Pow, // **
    Shl, // <<
    Shr, // >>
    Assign,
    And, // `&&` or `and`
    Or,  // `||` or `or`
    Ampersand,
    Pipe,
    Caret,
    PlusPlus,
    MinusMinus,

    // Keywords
    Type,
    Typedef,
    Namespace,
    Interface,
    Template,
    Struct,
    Implements,
    Return,
    Constructor,
    Destructor,
    Visibility,
    If,
    Else,
    While,
    For,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The literal payload carried by literal tokens. `Hex` tokens carry their
/// converted integer value, so `0x1F` arrives as `Int(31)`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub literal: Option<LiteralValue>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, text: {} }}", self.kind, self.text)
    }
}

impl Token {
    /// The 1-based source line this token started on.
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Hex,
            TokenKind::Float,
            TokenKind::Type,
        ]) {
            println!("{} ({})", self.kind, self.text);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
