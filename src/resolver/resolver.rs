use std::collections::HashMap;

use crate::{
    ast::{
        declarations::{Decl, FunctionDecl, Program, VariableDecl},
        expressions::Expr,
        statements::{BlockItem, CompoundStmt, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
};

/// What a name denotes: a function or a variable, plus its declared type
/// name. The type name is carried for consumers of the global table and
/// is never checked against anything.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub is_function: bool,
    pub type_name: String,
}

pub type ScopeTable = HashMap<String, Symbol>;

/// Parameters carry no type syntax; they are registered with the
/// language's default type.
const DEFAULT_TYPE: &str = "i32";

#[derive(Debug)]
pub struct Resolver {
    /// Open scopes, innermost at the tail. Transient: empty again once
    /// resolution finishes.
    scopes: Vec<ScopeTable>,
    /// The file-level table, kept after its scope closes so a backend
    /// can be handed the final global symbols.
    pub globals: ScopeTable,
}

impl Resolver {
    pub fn new() -> Self {
        Resolver {
            scopes: vec![],
            globals: HashMap::new(),
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) -> ScopeTable {
        self.scopes.pop().unwrap()
    }

    /// Registers a name in the innermost open scope. A duplicate simply
    /// replaces the earlier entry; there is no redeclaration error.
    fn declare(&mut self, name: &str, symbol: Symbol) {
        self.scopes
            .last_mut()
            .unwrap()
            .insert(name.to_string(), symbol);
    }

    /// Looks a name up innermost to outermost, stopping at the first
    /// match so inner declarations shadow outer ones.
    fn lookup(&self, name: &str) -> Option<&Symbol> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.get(name) {
                return Some(symbol);
            }
        }

        None
    }

    /// Resolves a whole program. The global scope is filled from the
    /// complete top-level declaration list before any body is entered,
    /// which is what makes file-level names mutually forward-visible.
    pub fn resolve_program(&mut self, program: &Program) -> Result<(), Error> {
        self.begin_scope();

        for decl in &program.declarations {
            match decl {
                Decl::Function(fun) => self.declare(
                    &fun.name,
                    Symbol {
                        is_function: true,
                        type_name: fun.return_type.clone(),
                    },
                ),
                Decl::Variable(var) => self.declare(
                    &var.name,
                    Symbol {
                        is_function: false,
                        type_name: var.type_name.clone(),
                    },
                ),
            }
        }

        for decl in &program.declarations {
            if let Decl::Function(fun) = decl {
                self.resolve_function(fun)?;
            }
        }

        self.globals = self.end_scope();
        Ok(())
    }

    fn resolve_function(&mut self, fun: &FunctionDecl) -> Result<(), Error> {
        self.resolve_compound(&fun.body, &fun.parameters)
    }

    /// Resolves a block. The block's own table holds `preload` (the
    /// enclosing function's parameters, if any) before the items are
    /// walked; each local declaration is registered at its position, so
    /// it is visible to later items only.
    fn resolve_compound(&mut self, compound: &CompoundStmt, preload: &[String]) -> Result<(), Error> {
        self.begin_scope();

        for parameter in preload {
            self.declare(
                parameter,
                Symbol {
                    is_function: false,
                    type_name: String::from(DEFAULT_TYPE),
                },
            );
        }

        for item in &compound.items {
            match item {
                BlockItem::Declaration(decl) => self.resolve_local_decl(decl)?,
                BlockItem::Statement(stmt) => self.resolve_stmt(stmt)?,
            }
        }

        self.end_scope();
        Ok(())
    }

    fn resolve_local_decl(&mut self, decl: &Decl) -> Result<(), Error> {
        match decl {
            Decl::Variable(VariableDecl {
                name, type_name, ..
            }) => {
                self.declare(
                    name,
                    Symbol {
                        is_function: false,
                        type_name: type_name.clone(),
                    },
                );
                Ok(())
            }
            Decl::Function(fun) => {
                // The grammar only produces function declarations at the
                // top level, but the tree type does not forbid them.
                self.declare(
                    &fun.name,
                    Symbol {
                        is_function: true,
                        type_name: fun.return_type.clone(),
                    },
                );
                self.resolve_function(fun)
            }
        }
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) -> Result<(), Error> {
        match stmt {
            Stmt::Expression { expression, .. } => self.resolve_expr(expression),
            Stmt::Return { expression, .. } => self.resolve_expr(expression),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                self.resolve_expr(condition)?;
                self.resolve_stmt(then_branch)?;
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch)?;
                }
                Ok(())
            }
            Stmt::Loop {
                condition, body, ..
            } => {
                self.resolve_expr(condition)?;
                self.resolve_stmt(body)
            }
            Stmt::Compound(compound) => self.resolve_compound(compound, &[]),
        }
    }

    fn resolve_expr(&mut self, expr: &Expr) -> Result<(), Error> {
        match expr {
            Expr::NumberLit { .. } | Expr::StringLit { .. } => Ok(()),
            Expr::Identifier { name, span } => {
                if self.lookup(name).is_none() {
                    return Err(Error::new(
                        ErrorImpl::VariableNotDeclared {
                            variable: name.clone(),
                        },
                        span.start.clone(),
                    ));
                }
                Ok(())
            }
            Expr::Assignment { target, value, span } => {
                // The target is an identifier reference like any other.
                if self.lookup(target).is_none() {
                    return Err(Error::new(
                        ErrorImpl::VariableNotDeclared {
                            variable: target.clone(),
                        },
                        span.start.clone(),
                    ));
                }
                self.resolve_expr(value)
            }
            Expr::Unary { operand, .. } => self.resolve_expr(operand),
            Expr::Binary { left, right, .. } => {
                self.resolve_expr(left)?;
                self.resolve_expr(right)
            }
            Expr::Grouping { inner, .. } => self.resolve_expr(inner),
            Expr::Call {
                name,
                arguments,
                span,
            } => {
                // The target must exist and be a function before the
                // arguments are even looked at. Arity is not checked.
                match self.lookup(name) {
                    None => {
                        return Err(Error::new(
                            ErrorImpl::VariableNotDeclared {
                                variable: name.clone(),
                            },
                            span.start.clone(),
                        ))
                    }
                    Some(symbol) if !symbol.is_function => {
                        return Err(Error::new(
                            ErrorImpl::NotCallable {
                                function: name.clone(),
                            },
                            span.start.clone(),
                        ))
                    }
                    Some(_) => {}
                }

                for argument in arguments {
                    self.resolve_expr(argument)?;
                }
                Ok(())
            }
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves every name in the program. Returns the resolver on success so
/// the caller can take the retained global symbol table; the first
/// failure is returned as is and aborts the whole pass.
pub fn resolve(program: &Program) -> Result<Resolver, Error> {
    let mut resolver = Resolver::new();
    resolver.resolve_program(program)?;
    Ok(resolver)
}
