/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - declarations: Top-level and block-local declarations plus the Program root
/// - expressions: Definitions for the expression tree
/// - statements: Definitions for the statement tree
pub mod declarations;
pub mod expressions;
pub mod statements;
