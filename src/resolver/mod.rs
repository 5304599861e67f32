//! Name resolution module.
//!
//! This module performs the semantic pass over the parsed tree. It walks
//! the finished AST with a stack of per-scope symbol tables while:
//!
//! - Registering declarations into the scope they belong to
//! - Resolving every identifier reference against the open scopes
//! - Rejecting calls whose target is not a function
//!
//! Top-level declarations are registered in one batch before any function
//! body is walked, so file-level names see each other regardless of
//! order. Block-local declarations are registered at their position in
//! the block, so a local name is visible only from its declaration
//! onward. No type compatibility or argument arity checking happens
//! here; the only classification a symbol carries is function-vs-variable
//! plus its declared type name.

pub mod resolver;
