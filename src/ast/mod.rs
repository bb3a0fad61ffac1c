/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - statements: program structure, statements, and struct/interface members
/// - expressions: binary expressions and literal terminals
/// - types: type references, parameters, template headers, visibility
pub mod expressions;
pub mod statements;
pub mod types;
