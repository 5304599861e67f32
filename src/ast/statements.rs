use crate::{ast::declarations::Decl, ast::expressions::Expr, Span};

#[derive(Debug, Clone)]
pub enum Stmt {
    /// An expression evaluated for its effect, `<expression> ;`.
    Expression { expression: Expr, span: Span },
    /// `return <expression> ;` - the expression is required.
    Return { expression: Expr, span: Span },
    /// `if ( <cond> ) <stmt> [ else <stmt> ]`. A dangling else belongs to
    /// the nearest unmatched if.
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
        span: Span,
    },
    /// `loop ( <cond> ) <stmt>` - the condition is evaluated before every
    /// iteration.
    Loop {
        condition: Expr,
        body: Box<Stmt>,
        span: Span,
    },
    Compound(CompoundStmt),
}

/// A braced block. Local declarations and statements are kept in one
/// ordered list so a later pass sees them exactly where they appeared in
/// the source; a local name must not be visible before its declaration.
#[derive(Debug, Clone)]
pub struct CompoundStmt {
    pub items: Vec<BlockItem>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum BlockItem {
    Declaration(Decl),
    Statement(Stmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression { span, .. } => span,
            Stmt::Return { span, .. } => span,
            Stmt::If { span, .. } => span,
            Stmt::Loop { span, .. } => span,
            Stmt::Compound(compound) => &compound.span,
        }
    }
}
