use crate::{
    ast::expressions::{BinOp, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{LiteralValue, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser, types::parse_qualified_name};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.error_unexpected());
    };

    let mut left = nud_fn(parser)?;

    // While the next token binds tighter than the current power, keep
    // folding onto the left operand. Strict `>` means equal tiers stop,
    // which is what makes every operator left-associative.
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.error_unexpected());
        };
        let next_bp = *parser.get_bp_lookup().get(&token_kind).unwrap();

        left = led_fn(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer | TokenKind::Hex => {
            let token = parser.advance().clone();
            match token.literal {
                Some(LiteralValue::Int(value)) => Ok(Expr::Integer(value)),
                _ => Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: token.text },
                    token.span.start,
                )),
            }
        }
        TokenKind::Float => {
            let token = parser.advance().clone();
            match token.literal {
                Some(LiteralValue::Float(value)) => Ok(Expr::Float(value)),
                _ => Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: token.text },
                    token.span.start,
                )),
            }
        }
        TokenKind::Boolean => {
            let token = parser.advance().clone();
            match token.literal {
                Some(LiteralValue::Bool(value)) => Ok(Expr::Bool(value)),
                _ => Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: token.text },
                    token.span.start,
                )),
            }
        }
        TokenKind::CharLit => {
            let token = parser.advance().clone();
            match token.literal {
                Some(LiteralValue::Char(value)) => Ok(Expr::Char(value)),
                _ => Err(Error::new(
                    ErrorImpl::UnexpectedToken { token: token.text },
                    token.span.start,
                )),
            }
        }
        TokenKind::Identifier => Ok(Expr::Identifier(parse_qualified_name(parser)?)),
        _ => Err(parser.error_unexpected()),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let Some(op) = BinOp::from_token(operator_token.kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.text,
            },
            operator_token.span.start,
        ));
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(op, left, right))
}
