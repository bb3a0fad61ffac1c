use crate::{
    ast::{
        statements::{ConstructorDecl, DestructorDecl, Member, MethodDecl, MethodSig},
        types::Visibility,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::BindingPower,
    parser::Parser,
    stmt::parse_block,
    types::{parse_parameters, parse_type},
};

/// Parses one struct member. A leading `hidden:` either tags the next
/// member or, when followed by `{`, wraps a whole member list under one
/// specifier.
pub fn parse_member(parser: &mut Parser) -> Result<Member, Error> {
    if parser.current_token_kind() == TokenKind::Visibility {
        parser.advance();
        parser.expect(TokenKind::Colon)?;

        if parser.current_token_kind() == TokenKind::LBrace {
            parser.advance();

            let mut members = Vec::new();
            while parser.current_token_kind() != TokenKind::RBrace {
                if parser.current_token_kind() == TokenKind::Eof {
                    return Err(parser.error_unexpected());
                }
                members.push(parse_member(parser)?);
            }
            parser.expect(TokenKind::RBrace)?;

            return Ok(Member::AccessBlock {
                visibility: Visibility::Hidden,
                members,
            });
        }

        return parse_member_inner(parser, Some(Visibility::Hidden));
    }

    parse_member_inner(parser, None)
}

fn parse_member_inner(parser: &mut Parser, visibility: Option<Visibility>) -> Result<Member, Error> {
    match parser.current_token_kind() {
        TokenKind::Constructor => {
            parser.advance();
            parser.expect(TokenKind::LParen)?;
            let params = parse_parameters(parser)?;
            parser.expect(TokenKind::RParen)?;
            let body = parse_block(parser)?;

            Ok(Member::Constructor(ConstructorDecl {
                visibility,
                params,
                body,
            }))
        }
        TokenKind::Destructor => {
            parser.advance();
            parser.expect(TokenKind::LParen)?;
            let params = parse_parameters(parser)?;
            parser.expect(TokenKind::RParen)?;
            let body = parse_block(parser)?;

            Ok(Member::Destructor(DestructorDecl {
                visibility,
                params,
                body,
            }))
        }
        _ => {
            let ty = parse_type(parser)?;
            let name = parser.expect(TokenKind::Identifier)?.text;

            match parser.current_token_kind() {
                TokenKind::Semicolon => {
                    parser.advance();
                    Ok(Member::Variable {
                        visibility,
                        ty,
                        name,
                        init: None,
                    })
                }
                TokenKind::Assign => {
                    parser.advance();
                    let value = parse_expr(parser, BindingPower::Default)?;
                    parser.expect(TokenKind::Semicolon)?;
                    Ok(Member::Variable {
                        visibility,
                        ty,
                        name,
                        init: Some(value),
                    })
                }
                TokenKind::LParen => {
                    parser.advance();
                    let params = parse_parameters(parser)?;
                    parser.expect(TokenKind::RParen)?;

                    // Signature-only declarations end with `;`, a body
                    // takes no trailing semicolon.
                    let body = if parser.current_token_kind() == TokenKind::LBrace {
                        Some(parse_block(parser)?)
                    } else {
                        parser.expect(TokenKind::Semicolon)?;
                        None
                    };

                    Ok(Member::Method(MethodDecl {
                        visibility,
                        ty,
                        name,
                        params,
                        body,
                    }))
                }
                _ => Err(parser.error_unexpected()),
            }
        }
    }
}

/// Parses one interface member: a `;`-terminated method signature. The
/// interface lexical context guarantees nothing richer can even tokenize.
pub fn parse_interface_method(parser: &mut Parser) -> Result<MethodSig, Error> {
    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?.text;

    parser.expect(TokenKind::LParen)?;
    let params = parse_parameters(parser)?;
    parser.expect(TokenKind::RParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(MethodSig { ty, name, params })
}
