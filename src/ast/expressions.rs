use crate::{lexer::tokens::Token, Span};

/// Expression tree. Every node owns its children outright; nothing is
/// shared between parents.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A bare identifier reference.
    Identifier { name: String, span: Span },
    /// A numeric literal. The language has no floating point or signed
    /// literal syntax.
    NumberLit { value: i64, span: Span },
    /// A string literal, without its backtick delimiters.
    StringLit { value: String, span: Span },
    /// `target = value`. The target is restricted to an identifier by the
    /// grammar; anything else fails with an lvalue error before this node
    /// is built.
    Assignment {
        target: String,
        value: Box<Expr>,
        span: Span,
    },
    /// A prefix operation (`+`, `-` or `~`).
    Unary {
        operator: Token,
        operand: Box<Expr>,
        span: Span,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
        span: Span,
    },
    /// A parenthesized expression, kept as its own node.
    Grouping { inner: Box<Expr>, span: Span },
    /// A call. Only a plain identifier can be a call target, so the name
    /// is stored directly rather than a callee expression.
    Call {
        name: String,
        arguments: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier { span, .. } => span,
            Expr::NumberLit { span, .. } => span,
            Expr::StringLit { span, .. } => span,
            Expr::Assignment { span, .. } => span,
            Expr::Unary { span, .. } => span,
            Expr::Binary { span, .. } => span,
            Expr::Grouping { span, .. } => span,
            Expr::Call { span, .. } => span,
        }
    }
}
