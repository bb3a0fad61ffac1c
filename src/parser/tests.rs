//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Typedefs, namespaces, interfaces, structs (plain and templated)
//! - Standalone functions and out-of-line method implementations
//! - Variable declarations, assignments, control flow
//! - Expression precedence and associativity
//! - Syntax error cases

use crate::ast::expressions::{BinOp, Expr};
use crate::ast::statements::{
    CallStmt, FunctionDecl, Member, MethodDecl, MethodImpl, MethodSig, Program, Stmt, StructDecl,
};
use crate::ast::types::{Parameter, TemplateDecl, TypeRef, Visibility};
use crate::errors::errors::{Error, ErrorKind};
use crate::lexer::lexer::tokenize;

use super::parser::parse;

fn parse_source(source: &str) -> Result<Program, Error> {
    let lexed = tokenize(source).unwrap();
    assert!(lexed.errors.is_empty());
    parse(lexed.tokens)
}

#[test]
fn test_parse_typedef() {
    let program = parse_source("typedef int myInt;").unwrap();

    assert_eq!(
        program,
        Program {
            body: vec![Stmt::Typedef {
                ty: TypeRef::new("int"),
                name: String::from("myInt"),
            }],
        }
    );
}

#[test]
fn test_parse_nested_namespaces() {
    let program = parse_source("namespace A { namespace B { int x; } }").unwrap();

    assert_eq!(
        program,
        Program {
            body: vec![Stmt::Namespace {
                name: String::from("A"),
                body: vec![Stmt::Namespace {
                    name: String::from("B"),
                    body: vec![Stmt::Declare {
                        ty: TypeRef::new("int"),
                        name: String::from("x"),
                    }],
                }],
            }],
        }
    );
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse_source("int x;").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::Declare {
            ty: TypeRef::new("int"),
            name: String::from("x"),
        }]
    );
}

#[test]
fn test_parse_initialized_declaration() {
    let program = parse_source("int x = 42;").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::DeclareInit {
            ty: TypeRef::new("int"),
            name: String::from("x"),
            value: Expr::Integer(42),
        }]
    );
}

#[test]
fn test_parse_declaration_with_qualified_type() {
    let program = parse_source("Math::Vector v;").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::Declare {
            ty: TypeRef::new("Math::Vector"),
            name: String::from("v"),
        }]
    );
}

#[test]
fn test_parse_precedence() {
    // `a + b * c` folds multiplication first
    let program = parse_source("int r = a + b * c;").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::DeclareInit {
            ty: TypeRef::new("int"),
            name: String::from("r"),
            value: Expr::binary(
                BinOp::Add,
                Expr::ident("a"),
                Expr::binary(BinOp::Mul, Expr::ident("b"), Expr::ident("c")),
            ),
        }]
    );
}

#[test]
fn test_parse_left_associativity() {
    let program = parse_source("int r = a - b + c;").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::DeclareInit {
            ty: TypeRef::new("int"),
            name: String::from("r"),
            value: Expr::binary(
                BinOp::Add,
                Expr::binary(BinOp::Sub, Expr::ident("a"), Expr::ident("b")),
                Expr::ident("c"),
            ),
        }]
    );
}

#[test]
fn test_parse_logical_binds_loosest() {
    let program = parse_source("int r = a && b + c;").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::DeclareInit {
            ty: TypeRef::new("int"),
            name: String::from("r"),
            value: Expr::binary(
                BinOp::And,
                Expr::ident("a"),
                Expr::binary(BinOp::Add, Expr::ident("b"), Expr::ident("c")),
            ),
        }]
    );
}

#[test]
fn test_parse_shift_below_additive() {
    let program = parse_source("int r = x << 2 + 1;").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::DeclareInit {
            ty: TypeRef::new("int"),
            name: String::from("r"),
            value: Expr::binary(
                BinOp::Shl,
                Expr::ident("x"),
                Expr::binary(BinOp::Add, Expr::Integer(2), Expr::Integer(1)),
            ),
        }]
    );
}

#[test]
fn test_parse_hex_literal_value() {
    let program = parse_source("int r = 0x1F;").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::DeclareInit {
            ty: TypeRef::new("int"),
            name: String::from("r"),
            value: Expr::Integer(31),
        }]
    );
}

#[test]
fn test_parse_literal_terminals() {
    let program = parse_source("int a = 3.14; int b = true; char c = 'q';").unwrap();

    assert_eq!(program.body.len(), 3);
    assert_eq!(
        program.body[1],
        Stmt::DeclareInit {
            ty: TypeRef::new("int"),
            name: String::from("b"),
            value: Expr::Bool(true),
        }
    );
    assert_eq!(
        program.body[2],
        Stmt::DeclareInit {
            ty: TypeRef::new("char"),
            name: String::from("c"),
            value: Expr::Char('q'),
        }
    );
}

#[test]
fn test_parse_struct_with_visibility() {
    let program = parse_source("struct S { hidden: int a; }").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::Struct(StructDecl {
            template: None,
            name: String::from("S"),
            implements: None,
            members: vec![Member::Variable {
                visibility: Some(Visibility::Hidden),
                ty: TypeRef::new("int"),
                name: String::from("a"),
                init: None,
            }],
        })]
    );
}

#[test]
fn test_parse_access_block() {
    let program = parse_source("struct S { hidden: { int a; int b; } }").unwrap();

    let Stmt::Struct(decl) = &program.body[0] else {
        panic!("expected a struct declaration");
    };
    assert_eq!(decl.members.len(), 1);
    let Member::AccessBlock {
        visibility,
        members,
    } = &decl.members[0]
    else {
        panic!("expected an access block");
    };
    assert_eq!(*visibility, Visibility::Hidden);
    assert_eq!(members.len(), 2);
}

#[test]
fn test_parse_templated_struct_with_implements() {
    let program =
        parse_source("template<T, U> struct Pair implements Container { T first; U second; }")
            .unwrap();

    let Stmt::Struct(decl) = &program.body[0] else {
        panic!("expected a struct declaration");
    };
    assert_eq!(
        decl.template,
        Some(TemplateDecl {
            params: vec![String::from("T"), String::from("U")],
        })
    );
    assert_eq!(decl.implements, Some(String::from("Container")));
    assert_eq!(decl.name, "Pair");
    assert_eq!(decl.members.len(), 2);
}

#[test]
fn test_parse_plain_struct_has_explicit_absent_markers() {
    let program = parse_source("struct S { int a; }").unwrap();

    let Stmt::Struct(decl) = &program.body[0] else {
        panic!("expected a struct declaration");
    };
    assert_eq!(decl.template, None);
    assert_eq!(decl.implements, None);
}

#[test]
fn test_parse_struct_members() {
    let source = "struct Point {
        int x;
        int y = 0;
        constructor(int x) { }
        destructor() { }
        int norm();
        int zero() { return 0; }
    }";
    let program = parse_source(source).unwrap();

    let Stmt::Struct(decl) = &program.body[0] else {
        panic!("expected a struct declaration");
    };
    assert_eq!(decl.members.len(), 6);
    assert!(matches!(decl.members[2], Member::Constructor(_)));
    assert!(matches!(decl.members[3], Member::Destructor(_)));
    assert_eq!(
        decl.members[4],
        Member::Method(MethodDecl {
            visibility: None,
            ty: TypeRef::new("int"),
            name: String::from("norm"),
            params: vec![],
            body: None,
        })
    );
    let Member::Method(zero) = &decl.members[5] else {
        panic!("expected a method");
    };
    assert_eq!(zero.ty.name(), "int");
    assert_eq!(zero.body.as_ref().unwrap().len(), 1);
}

#[test]
fn test_parse_interface() {
    let program =
        parse_source("interface Shape { int area(); void scale(int factor); };").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::Interface {
            name: String::from("Shape"),
            methods: vec![
                MethodSig {
                    ty: TypeRef::new("int"),
                    name: String::from("area"),
                    params: vec![],
                },
                MethodSig {
                    ty: TypeRef::new("void"),
                    name: String::from("scale"),
                    params: vec![Parameter {
                        ty: TypeRef::new("int"),
                        name: String::from("factor"),
                    }],
                },
            ],
        }]
    );
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_source("int add(int a, int b) { return a + b; };").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::Function(FunctionDecl {
            ty: TypeRef::new("int"),
            name: String::from("add"),
            params: vec![
                Parameter {
                    ty: TypeRef::new("int"),
                    name: String::from("a"),
                },
                Parameter {
                    ty: TypeRef::new("int"),
                    name: String::from("b"),
                },
            ],
            body: vec![Stmt::Return {
                value: Some(Expr::binary(
                    BinOp::Add,
                    Expr::ident("a"),
                    Expr::ident("b"),
                )),
            }],
        })]
    );
}

#[test]
fn test_parse_method_impl() {
    let program = parse_source("Point::norm(int scale) { return scale; }").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::MethodImpl(MethodImpl {
            ty: String::from("Point"),
            method: String::from("norm"),
            params: vec![Parameter {
                ty: TypeRef::new("int"),
                name: String::from("scale"),
            }],
            body: vec![Stmt::Return {
                value: Some(Expr::ident("scale")),
            }],
        })]
    );
}

#[test]
fn test_parse_call_statements() {
    let program = parse_source("log(); device.reset(code); Config::dump(level);").unwrap();

    assert_eq!(
        program.body,
        vec![
            Stmt::Call(CallStmt {
                receiver: None,
                callee: String::from("log"),
                args: vec![],
            }),
            Stmt::Call(CallStmt {
                receiver: Some(String::from("device")),
                callee: String::from("reset"),
                args: vec![String::from("code")],
            }),
            Stmt::Call(CallStmt {
                receiver: None,
                callee: String::from("Config::dump"),
                args: vec![String::from("level")],
            }),
        ]
    );
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("x = a + 1; Config::level = 3;").unwrap();

    assert_eq!(
        program.body,
        vec![
            Stmt::Assign {
                target: String::from("x"),
                value: Expr::binary(BinOp::Add, Expr::ident("a"), Expr::Integer(1)),
            },
            Stmt::Assign {
                target: String::from("Config::level"),
                value: Expr::Integer(3),
            },
        ]
    );
}

#[test]
fn test_parse_increment_decrement() {
    let program = parse_source("i++; j--; ++i; --j;").unwrap();

    assert_eq!(
        program.body,
        vec![
            Stmt::Increment {
                target: String::from("i"),
            },
            Stmt::Decrement {
                target: String::from("j"),
            },
            Stmt::PrefixIncrement {
                target: String::from("i"),
            },
            Stmt::PrefixDecrement {
                target: String::from("j"),
            },
        ]
    );
}

#[test]
fn test_parse_if_statement() {
    let program = parse_source("if flag { x = 1; }").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::If {
            condition: Expr::ident("flag"),
            body: vec![Stmt::Assign {
                target: String::from("x"),
                value: Expr::Integer(1),
            }],
        }]
    );
}

#[test]
fn test_parse_if_else_statement() {
    let program = parse_source("if flag { x = 1; } else { x = 0; }").unwrap();

    assert!(matches!(program.body[0], Stmt::IfElse { .. }));
}

#[test]
fn test_parse_while_loop() {
    let program = parse_source("while running { i++; }").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::While {
            condition: Expr::ident("running"),
            body: vec![Stmt::Increment {
                target: String::from("i"),
            }],
        }]
    );
}

#[test]
fn test_parse_for_loop() {
    let program = parse_source("for int i = 0; running; i++ { total = total + i; }").unwrap();

    assert_eq!(
        program.body,
        vec![Stmt::For {
            init: Box::new(Stmt::DeclareInit {
                ty: TypeRef::new("int"),
                name: String::from("i"),
                value: Expr::Integer(0),
            }),
            condition: Expr::ident("running"),
            step: Box::new(Stmt::Increment {
                target: String::from("i"),
            }),
            body: vec![Stmt::Assign {
                target: String::from("total"),
                value: Expr::binary(BinOp::Add, Expr::ident("total"), Expr::ident("i")),
            }],
        }]
    );
}

#[test]
fn test_parse_for_loop_with_assignment_init() {
    let program = parse_source("for i = 0; running; i = i + 1 { log(); }").unwrap();

    let Stmt::For { init, step, .. } = &program.body[0] else {
        panic!("expected a for loop");
    };
    assert!(matches!(**init, Stmt::Assign { .. }));
    assert!(matches!(**step, Stmt::Assign { .. }));
}

#[test]
fn test_parse_return_without_value() {
    let program = parse_source("return;").unwrap();

    assert_eq!(program.body, vec![Stmt::Return { value: None }]);
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("").unwrap();

    assert!(program.body.is_empty());
}

#[test]
fn test_parse_is_idempotent() {
    let source = "namespace A { struct S { hidden: int a; } int f() { return 0; }; }";

    let first = parse_source(source).unwrap();
    let second = parse_source(source).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_namespace_after_function_is_rejected() {
    let result = parse_source("int f() { };\nnamespace A { }");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().kind(), ErrorKind::Syntax);
}

#[test]
fn test_namespace_after_other_statement_is_accepted() {
    let result = parse_source("int f() { };\ntypedef int t;\nnamespace A { }");

    assert!(result.is_ok());
}

#[test]
fn test_function_after_function_is_accepted() {
    let result = parse_source("int f() { };\nint g() { };");

    assert!(result.is_ok());
}

#[test]
fn test_parse_syntax_error_missing_semicolon() {
    let result = parse_source("int x");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedEof");
}

#[test]
fn test_parse_syntax_error_missing_identifier() {
    let result = parse_source("int = 42;");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnexpectedTokenDetailed"
    );
}

#[test]
fn test_parse_syntax_error_reports_line() {
    let result = parse_source("int x;\nint = 2;");

    let error = result.err().unwrap();
    assert_eq!(error.get_position().line, 2);
}

#[test]
fn test_syntax_error_produces_no_ast() {
    let result = parse_source("struct S { int a; } int");

    assert!(result.is_err());
}
