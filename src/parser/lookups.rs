use std::collections::HashMap;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest to highest. Every binary operator is
/// left-associative; ties are broken towards the left operand by the
/// Pratt loop's strict comparison.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Logical,
    Bitwise,
    Additive,
    Multiplicative,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical — the lowest tier; `and`/`or` lex to the same kinds as the
    // symbolic forms
    parser.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    parser.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);

    // Bitwise and shifts
    parser.led(TokenKind::Ampersand, BindingPower::Bitwise, parse_binary_expr);
    parser.led(TokenKind::Pipe, BindingPower::Bitwise, parse_binary_expr);
    parser.led(TokenKind::Caret, BindingPower::Bitwise, parse_binary_expr);
    parser.led(TokenKind::Shl, BindingPower::Bitwise, parse_binary_expr);
    parser.led(TokenKind::Shr, BindingPower::Bitwise, parse_binary_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Minus, BindingPower::Additive, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::Hex, parse_primary_expr);
    parser.nud(TokenKind::Float, parse_primary_expr);
    parser.nud(TokenKind::Boolean, parse_primary_expr);
    parser.nud(TokenKind::CharLit, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);

    // Statements
    parser.stmt(TokenKind::Typedef, parse_typedef_stmt);
    parser.stmt(TokenKind::Namespace, parse_namespace_stmt);
    parser.stmt(TokenKind::Interface, parse_interface_stmt);
    parser.stmt(TokenKind::Template, parse_template_struct_stmt);
    parser.stmt(TokenKind::Struct, parse_struct_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::While, parse_while_stmt);
    parser.stmt(TokenKind::For, parse_for_stmt);
    parser.stmt(TokenKind::Type, parse_declaration_stmt);
    parser.stmt(TokenKind::Identifier, parse_identifier_stmt);
    parser.stmt(TokenKind::PlusPlus, parse_prefix_incdec_stmt);
    parser.stmt(TokenKind::MinusMinus, parse_prefix_incdec_stmt);
}

// Lookup tables inside the parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
