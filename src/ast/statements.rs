use super::expressions::Expr;
use super::types::{Parameter, TemplateDecl, TypeRef, Visibility};

/// The root of a parse: an ordered sequence of top-level statements.
/// Immutable once the parser hands it over.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

/// A top-level or function-body statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `typedef int myInt;`
    Typedef { ty: TypeRef, name: String },
    /// `namespace A { ... }` — the body may nest namespaces, structs,
    /// interfaces, and functions.
    Namespace { name: String, body: Vec<Stmt> },
    /// `interface I { int get(); } ;` — signatures only.
    Interface {
        name: String,
        methods: Vec<MethodSig>,
    },
    Struct(StructDecl),
    Function(FunctionDecl),
    /// `int x;`
    Declare { ty: TypeRef, name: String },
    /// `int x = 5;`
    DeclareInit {
        ty: TypeRef,
        name: String,
        value: Expr,
    },
    /// `x = a + b;` — the target may be namespace-qualified.
    Assign { target: String, value: Expr },
    Return { value: Option<Expr> },
    If {
        condition: Expr,
        body: Vec<Stmt>,
    },
    IfElse {
        condition: Expr,
        body: Vec<Stmt>,
        else_body: Vec<Stmt>,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
    },
    /// `for int i = 0; cond; i++ { ... }` — init is a declaration or
    /// assignment, step an assignment or increment/decrement.
    For {
        init: Box<Stmt>,
        condition: Expr,
        step: Box<Stmt>,
        body: Vec<Stmt>,
    },
    /// `i++;`
    Increment { target: String },
    /// `i--;`
    Decrement { target: String },
    /// `++i;`
    PrefixIncrement { target: String },
    /// `--i;`
    PrefixDecrement { target: String },
    Call(CallStmt),
    MethodImpl(MethodImpl),
}

/// A struct declaration. The template header and implements clause are
/// always present in the node shape; absence is the explicit `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub template: Option<TemplateDecl>,
    pub name: String,
    pub implements: Option<String>,
    pub members: Vec<Member>,
}

/// Anything that can appear inside a struct body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Variable {
        visibility: Option<Visibility>,
        ty: TypeRef,
        name: String,
        init: Option<Expr>,
    },
    Method(MethodDecl),
    /// `hidden: { ... }` — one specifier covering a whole member list.
    AccessBlock {
        visibility: Visibility,
        members: Vec<Member>,
    },
    Constructor(ConstructorDecl),
    Destructor(DestructorDecl),
}

/// A method inside a struct body: signature only (`body: None`) or
/// signature plus body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub visibility: Option<Visibility>,
    pub ty: TypeRef,
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub visibility: Option<Visibility>,
    pub params: Vec<Parameter>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DestructorDecl {
    pub visibility: Option<Visibility>,
    pub params: Vec<Parameter>,
    pub body: Vec<Stmt>,
}

/// An interface method signature.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSig {
    pub ty: TypeRef,
    pub name: String,
    pub params: Vec<Parameter>,
}

/// A standalone function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub ty: TypeRef,
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Vec<Stmt>,
}

/// A bare call statement: `log(a, b);` or `device.reset(code);`.
/// Arguments are identifier names — the parameter lexical context admits
/// nothing richer.
#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub receiver: Option<String>,
    pub callee: String,
    pub args: Vec<String>,
}

/// An out-of-line method implementation: `Type::method(params) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodImpl {
    pub ty: String,
    pub method: String,
    pub params: Vec<Parameter>,
    pub body: Vec<Stmt>,
}
