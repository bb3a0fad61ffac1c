use crate::{
    ast::types::{Parameter, TypeRef},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses a possibly namespace-qualified identifier (`A::B::c`), returning
/// the segments joined with `::`.
pub fn parse_qualified_name(parser: &mut Parser) -> Result<String, Error> {
    let mut name = parser.expect(TokenKind::Identifier)?.text;

    while parser.current_token_kind() == TokenKind::DoubleColon {
        parser.advance();
        name.push_str("::");
        name.push_str(&parser.expect(TokenKind::Identifier)?.text);
    }

    Ok(name)
}

/// Parses a type reference: a builtin type keyword or a qualified name.
pub fn parse_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    match parser.current_token_kind() {
        TokenKind::Type => Ok(TypeRef::new(parser.advance().text.clone())),
        TokenKind::Identifier => Ok(TypeRef::new(parse_qualified_name(parser)?)),
        _ => Err(parser.error_unexpected_detailed("expected a type")),
    }
}

/// Parses a parameter list between `(` and `)`; the parens themselves are
/// consumed by the caller. Every entry must be a typed name.
pub fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    let mut parameters = Vec::new();

    while parser.current_token_kind() != TokenKind::RParen {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.error_unexpected());
        }

        let ty = parse_type(parser)?;
        let name = parser.expect(TokenKind::Identifier)?.text;
        parameters.push(Parameter { ty, name });

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
    }

    Ok(parameters)
}

/// One entry of a parenthesized list whose role is not yet known: a call
/// argument (a bare name) or a parameter declaration (a typed name). The
/// caller decides after seeing what follows the `)`.
pub enum ParenItem {
    Single(String),
    Pair { ty: TypeRef, name: String },
}

pub fn parse_paren_items(parser: &mut Parser) -> Result<Vec<ParenItem>, Error> {
    let mut items = Vec::new();

    while parser.current_token_kind() != TokenKind::RParen {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.error_unexpected());
        }

        let item = match parser.current_token_kind() {
            TokenKind::Type => {
                let ty = TypeRef::new(parser.advance().text.clone());
                let name = parser.expect(TokenKind::Identifier)?.text;
                ParenItem::Pair { ty, name }
            }
            TokenKind::Identifier => {
                let first = parse_qualified_name(parser)?;
                if parser.current_token_kind() == TokenKind::Identifier {
                    let name = parser.advance().text.clone();
                    ParenItem::Pair {
                        ty: TypeRef::new(first),
                        name,
                    }
                } else {
                    ParenItem::Single(first)
                }
            }
            _ => return Err(parser.error_unexpected()),
        };
        items.push(item);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
    }

    Ok(items)
}

pub fn items_into_parameters(
    parser: &Parser,
    items: Vec<ParenItem>,
) -> Result<Vec<Parameter>, Error> {
    items
        .into_iter()
        .map(|item| match item {
            ParenItem::Pair { ty, name } => Ok(Parameter { ty, name }),
            ParenItem::Single(_) => {
                Err(parser.error_unexpected_detailed("expected a typed parameter"))
            }
        })
        .collect()
}

pub fn items_into_args(parser: &Parser, items: Vec<ParenItem>) -> Result<Vec<String>, Error> {
    items
        .into_iter()
        .map(|item| match item {
            ParenItem::Single(name) => Ok(name),
            ParenItem::Pair { .. } => Err(parser
                .error_unexpected_detailed("unexpected parameter declaration in call arguments")),
        })
        .collect()
}
