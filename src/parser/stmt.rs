use crate::{
    ast::{
        statements::{CallStmt, FunctionDecl, MethodImpl, Stmt, StructDecl},
        types::{TemplateDecl, TypeRef},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{
    members::{parse_interface_method, parse_member},
    parser::Parser,
    types::{
        items_into_args, items_into_parameters, parse_paren_items, parse_parameters,
        parse_qualified_name, parse_type,
    },
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    // The one piece of cross-statement state in the grammar: a namespace
    // may not be declared directly after a standalone function.
    let after_function = parser.take_after_function();
    if after_function && parser.current_token_kind() == TokenKind::Namespace {
        return Err(parser.error_unexpected_detailed(
            "a namespace may not immediately follow a function declaration",
        ));
    }

    let kind = parser.current_token_kind();
    let Some(handler) = parser.get_stmt_lookup().get(&kind).copied() else {
        return Err(parser.error_unexpected());
    };

    handler(parser)
}

/// Parses `{ statements }` and returns the body.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::LBrace)?;

    let mut body = Vec::new();
    while parser.current_token_kind() != TokenKind::RBrace {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.error_unexpected());
        }
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::RBrace)?;
    Ok(body)
}

pub fn parse_typedef_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let ty = parse_type(parser)?;
    let name = parser.expect(TokenKind::Identifier)?.text;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Typedef { ty, name })
}

pub fn parse_namespace_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier)?.text;
    let body = parse_block(parser)?;

    Ok(Stmt::Namespace { name, body })
}

pub fn parse_interface_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier)?.text;
    parser.expect(TokenKind::LBrace)?;

    let mut methods = Vec::new();
    while parser.current_token_kind() != TokenKind::RBrace {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.error_unexpected());
        }
        methods.push(parse_interface_method(parser)?);
    }

    parser.expect(TokenKind::RBrace)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Interface { name, methods })
}

pub fn parse_template_struct_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    parser.expect(TokenKind::LAngle)?;
    let mut params = vec![parser.expect(TokenKind::Identifier)?.text];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        params.push(parser.expect(TokenKind::Identifier)?.text);
    }
    parser.expect(TokenKind::RAngle)?;

    if parser.current_token_kind() != TokenKind::Struct {
        return Err(parser
            .error_unexpected_detailed("expected a struct declaration after a template header"));
    }

    parse_struct_decl(parser, Some(TemplateDecl { params }))
}

pub fn parse_struct_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parse_struct_decl(parser, None)
}

fn parse_struct_decl(parser: &mut Parser, template: Option<TemplateDecl>) -> Result<Stmt, Error> {
    parser.advance();

    let name = parser.expect(TokenKind::Identifier)?.text;

    let implements = if parser.current_token_kind() == TokenKind::Implements {
        parser.advance();
        Some(parser.expect(TokenKind::Identifier)?.text)
    } else {
        None
    };

    parser.expect(TokenKind::LBrace)?;

    let mut members = Vec::new();
    while parser.current_token_kind() != TokenKind::RBrace {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.error_unexpected());
        }
        members.push(parse_member(parser)?);
    }

    parser.expect(TokenKind::RBrace)?;

    Ok(Stmt::Struct(StructDecl {
        template,
        name,
        implements,
        members,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return { value })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        let else_body = parse_block(parser)?;
        return Ok(Stmt::IfElse {
            condition,
            body,
            else_body,
        });
    }

    Ok(Stmt::If { condition, body })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While { condition, body })
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let init = Box::new(parse_for_init(parser)?);
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;
    let step = Box::new(parse_for_step(parser)?);
    let body = parse_block(parser)?;

    Ok(Stmt::For {
        init,
        condition,
        step,
        body,
    })
}

/// The loop initializer: a declaration or an assignment, including its
/// terminating semicolon.
fn parse_for_init(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Type => {
            let ty = parse_type(parser)?;
            parse_for_init_declaration(parser, ty)
        }
        TokenKind::Identifier => {
            if parser.peek_kind(1) == TokenKind::Assign {
                let target = parser.advance().text.clone();
                parser.advance();
                let value = parse_expr(parser, BindingPower::Default)?;
                parser.expect(TokenKind::Semicolon)?;
                return Ok(Stmt::Assign { target, value });
            }
            let ty = parse_type(parser)?;
            parse_for_init_declaration(parser, ty)
        }
        _ => Err(parser.error_unexpected_detailed("expected a loop initializer")),
    }
}

fn parse_for_init_declaration(parser: &mut Parser, ty: TypeRef) -> Result<Stmt, Error> {
    let name = parser.expect(TokenKind::Identifier)?.text;

    match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            Ok(Stmt::Declare { ty, name })
        }
        TokenKind::Assign => {
            parser.advance();
            let value = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::DeclareInit { ty, name, value })
        }
        _ => Err(parser.error_unexpected()),
    }
}

/// The loop step: an assignment or an increment/decrement, with no
/// terminating semicolon — the loop body's `{` follows directly.
fn parse_for_step(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::PlusPlus | TokenKind::MinusMinus => {
            let op = parser.advance().kind;
            let target = parse_qualified_name(parser)?;
            Ok(match op {
                TokenKind::PlusPlus => Stmt::PrefixIncrement { target },
                _ => Stmt::PrefixDecrement { target },
            })
        }
        TokenKind::Identifier => {
            let target = parse_qualified_name(parser)?;
            match parser.current_token_kind() {
                TokenKind::PlusPlus => {
                    parser.advance();
                    Ok(Stmt::Increment { target })
                }
                TokenKind::MinusMinus => {
                    parser.advance();
                    Ok(Stmt::Decrement { target })
                }
                TokenKind::Assign => {
                    parser.advance();
                    let value = parse_expr(parser, BindingPower::Default)?;
                    Ok(Stmt::Assign { target, value })
                }
                _ => Err(parser.error_unexpected()),
            }
        }
        _ => Err(parser.error_unexpected_detailed("expected a loop step")),
    }
}

pub fn parse_prefix_incdec_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let op = parser.advance().kind;
    let target = parse_qualified_name(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(match op {
        TokenKind::PlusPlus => Stmt::PrefixIncrement { target },
        _ => Stmt::PrefixDecrement { target },
    })
}

/// A statement led by a builtin type keyword: a variable declaration or a
/// standalone function.
pub fn parse_declaration_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let ty = parse_type(parser)?;
    parse_declaration_tail(parser, ty)
}

fn parse_declaration_tail(parser: &mut Parser, ty: TypeRef) -> Result<Stmt, Error> {
    let error =
        parser.error_unexpected_detailed("expected identifier during variable declaration");
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.text;

    match parser.current_token_kind() {
        TokenKind::Semicolon => {
            parser.advance();
            Ok(Stmt::Declare { ty, name })
        }
        TokenKind::Assign => {
            parser.advance();
            let value = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::DeclareInit { ty, name, value })
        }
        TokenKind::LParen => {
            parser.advance();
            let params = parse_parameters(parser)?;
            parser.expect(TokenKind::RParen)?;
            let body = parse_block(parser)?;
            parser.expect(TokenKind::Semicolon)?;

            parser.set_after_function();

            Ok(Stmt::Function(FunctionDecl {
                ty,
                name,
                params,
                body,
            }))
        }
        _ => Err(parser.error_unexpected()),
    }
}

/// A statement led by an identifier. Single-token peeks decide between an
/// assignment, a postfix increment/decrement, a declaration with a
/// user-defined type, a call, and the qualified (`::`) forms.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.peek_kind(1) {
        TokenKind::Assign => {
            let target = parser.advance().text.clone();
            parser.advance();
            let value = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::Assign { target, value })
        }
        TokenKind::PlusPlus | TokenKind::MinusMinus => {
            let target = parser.advance().text.clone();
            let op = parser.advance().kind;
            parser.expect(TokenKind::Semicolon)?;
            Ok(match op {
                TokenKind::PlusPlus => Stmt::Increment { target },
                _ => Stmt::Decrement { target },
            })
        }
        TokenKind::Identifier => {
            let ty = TypeRef::new(parser.advance().text.clone());
            parse_declaration_tail(parser, ty)
        }
        TokenKind::Dot => {
            let receiver = parser.advance().text.clone();
            parser.advance();
            let callee = parser.expect(TokenKind::Identifier)?.text;
            parse_call_tail(parser, Some(receiver), callee)
        }
        TokenKind::LParen => {
            let callee = parser.advance().text.clone();
            parse_call_tail(parser, None, callee)
        }
        TokenKind::DoubleColon => parse_qualified_stmt(parser),
        _ => Err(parser.error_unexpected()),
    }
}

fn parse_call_tail(
    parser: &mut Parser,
    receiver: Option<String>,
    callee: String,
) -> Result<Stmt, Error> {
    parser.expect(TokenKind::LParen)?;

    let mut args = Vec::new();
    while parser.current_token_kind() != TokenKind::RParen {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.error_unexpected());
        }
        args.push(parse_qualified_name(parser)?);
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
    }

    parser.expect(TokenKind::RParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Call(CallStmt {
        receiver,
        callee,
        args,
    }))
}

/// Statements starting with a qualified path: a declaration with a
/// qualified type, a qualified assignment or increment/decrement, a
/// qualified call, or an out-of-line method implementation. A call and a
/// method implementation only diverge after the `)`, so the parenthesized
/// list is parsed shape-agnostically first.
fn parse_qualified_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let path = parse_qualified_name(parser)?;

    match parser.current_token_kind() {
        TokenKind::Identifier => parse_declaration_tail(parser, TypeRef::new(path)),
        TokenKind::Assign => {
            parser.advance();
            let value = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::Assign {
                target: path,
                value,
            })
        }
        TokenKind::PlusPlus => {
            parser.advance();
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::Increment { target: path })
        }
        TokenKind::MinusMinus => {
            parser.advance();
            parser.expect(TokenKind::Semicolon)?;
            Ok(Stmt::Decrement { target: path })
        }
        TokenKind::LParen => {
            parser.advance();
            let items = parse_paren_items(parser)?;
            parser.expect(TokenKind::RParen)?;

            match parser.current_token_kind() {
                TokenKind::LBrace => {
                    let params = items_into_parameters(parser, items)?;
                    let body = parse_block(parser)?;
                    let (ty, method) = split_method_path(parser, &path)?;
                    Ok(Stmt::MethodImpl(MethodImpl {
                        ty,
                        method,
                        params,
                        body,
                    }))
                }
                TokenKind::Semicolon => {
                    parser.advance();
                    let args = items_into_args(parser, items)?;
                    Ok(Stmt::Call(CallStmt {
                        receiver: None,
                        callee: path,
                        args,
                    }))
                }
                _ => Err(parser.error_unexpected()),
            }
        }
        _ => Err(parser.error_unexpected()),
    }
}

fn split_method_path(parser: &Parser, path: &str) -> Result<(String, String), Error> {
    match path.rsplit_once("::") {
        Some((ty, method)) => Ok((String::from(ty), String::from(method))),
        None => {
            Err(parser.error_unexpected_detailed("expected a qualified `Type::method` name"))
        }
    }
}
