//! Integration tests for the complete front end.
//!
//! These tests drive whole programs through tokenization and parsing and
//! check the resulting tree (or error) end to end.

use idlc::ast::statements::{Member, Stmt};
use idlc::errors::errors::ErrorKind;
use idlc::lexer::lexer::tokenize;
use idlc::parser::parser::parse;

#[test]
fn test_full_program() {
    let source = "
typedef int Handle;

namespace Geometry {
    interface Shape {
        int area();
        void scale(int factor);
    };

    template<T> struct Box implements Shape {
        T value;
        hidden: int secret;
        constructor(T initial) { }
        destructor() { }
        int area();
    }

    int grow(int value, int factor) {
        int result = value * factor;
        return result;
    };
}

Box::area(int unused) {
    return 0;
}
";

    let lexed = tokenize(source).unwrap();
    assert!(lexed.errors.is_empty());

    let program = parse(lexed.tokens).unwrap();
    assert_eq!(program.body.len(), 3);

    assert!(matches!(program.body[0], Stmt::Typedef { .. }));

    let Stmt::Namespace { name, body } = &program.body[1] else {
        panic!("expected a namespace");
    };
    assert_eq!(name, "Geometry");
    assert_eq!(body.len(), 3);
    assert!(matches!(body[0], Stmt::Interface { .. }));

    let Stmt::Struct(decl) = &body[1] else {
        panic!("expected a struct");
    };
    assert!(decl.template.is_some());
    assert_eq!(decl.implements.as_deref(), Some("Shape"));
    assert_eq!(decl.members.len(), 5);
    assert!(matches!(
        decl.members[1],
        Member::Variable {
            visibility: Some(_),
            ..
        }
    ));

    assert!(matches!(body[2], Stmt::Function(_)));
    assert!(matches!(program.body[2], Stmt::MethodImpl(_)));
}

#[test]
fn test_control_flow_program() {
    let source = "
int main() {
    int total = 0;
    for int i = 0; running; i++ {
        total = total + i;
    }
    while running {
        total--;
    }
    if done {
        return total;
    } else {
        return 0;
    }
};
";

    let lexed = tokenize(source).unwrap();
    assert!(lexed.errors.is_empty());

    let program = parse(lexed.tokens).unwrap();

    let Stmt::Function(main) = &program.body[0] else {
        panic!("expected a function");
    };
    assert_eq!(main.body.len(), 4);
    assert!(matches!(main.body[1], Stmt::For { .. }));
    assert!(matches!(main.body[2], Stmt::While { .. }));
    assert!(matches!(main.body[3], Stmt::IfElse { .. }));
}

#[test]
fn test_lexical_recovery_end_to_end() {
    // A single bad character is reported but does not poison the rest of
    // the pipeline
    let lexed = tokenize("int @ x;").unwrap();
    assert_eq!(lexed.errors.len(), 1);
    assert_eq!(lexed.errors[0].kind(), ErrorKind::Lexical);

    let program = parse(lexed.tokens).unwrap();
    assert!(matches!(program.body[0], Stmt::Declare { .. }));
}

#[test]
fn test_template_inside_struct_produces_no_ast() {
    let result = tokenize("struct S { template<T> }");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().kind(), ErrorKind::Structural);
}

#[test]
fn test_unbalanced_program_is_an_error() {
    let result = tokenize("namespace A { struct S { int a; }");

    assert!(result.is_err());
    assert!(result.err().unwrap().is_fatal());
}

#[test]
fn test_parse_twice_yields_identical_trees() {
    let source = "namespace A { int f(int x) { return x * 2; }; } A::run(int flag) { log(flag); }";

    let first = parse(tokenize(source).unwrap().tokens).unwrap();
    let second = parse(tokenize(source).unwrap().tokens).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_syntax_error_reports_offending_token() {
    let lexed = tokenize("int x = ;").unwrap();
    let result = parse(lexed.tokens);

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_position().line, 1);
}
