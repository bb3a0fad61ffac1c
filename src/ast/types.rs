use std::fmt::Display;

/// A reference to a type by name: either one of the builtin type keywords
/// (`int`, `uint256`, ...) or a user-defined name, possibly qualified
/// through namespaces (`Math::Vector`). Qualified segments are stored
/// joined with `::`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef(pub String);

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeRef(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a parameter list: a type and a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ty: TypeRef,
    pub name: String,
}

/// The `template<A, B>` header that may precede a struct declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDecl {
    pub params: Vec<String>,
}

/// An access-specifier marker attached to a struct member. The core
/// carries the marker but does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
}

impl Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Hidden => write!(f, "hidden"),
        }
    }
}
