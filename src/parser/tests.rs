//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//! - Function and variable declarations
//! - Control flow statements
//! - Expression precedence and associativity
//! - Error cases

use crate::ast::declarations::{Decl, Program, StorageClass};
use crate::ast::expressions::Expr;
use crate::ast::statements::{BlockItem, Stmt};
use crate::errors::errors::Error;
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::TokenKind;

use super::parser::parse;

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.a".to_string())).unwrap();
    let (_, result) = parse(tokens);
    result
}

/// Parses a program wrapping `source` in a function body and returns the
/// expression of its single expression statement.
fn parse_expr_stmt(source: &str) -> Expr {
    let program = parse_source(&format!("fun f() {{ {}; }}", source)).unwrap();
    let Decl::Function(fun) = &program.declarations[0] else {
        panic!("expected a function");
    };
    match &fun.body.items[0] {
        BlockItem::Statement(Stmt::Expression { expression, .. }) => expression.clone(),
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse_source("auto i32 x;").unwrap();

    assert_eq!(program.declarations.len(), 1);
    let Decl::Variable(var) = &program.declarations[0] else {
        panic!("expected a variable");
    };
    assert_eq!(var.name, "x");
    assert_eq!(var.type_name, "i32");
    assert_eq!(var.storage, StorageClass::Auto);
}

#[test]
fn test_parse_extern_declaration() {
    let program = parse_source("extern u8 flag;").unwrap();

    let Decl::Variable(var) = &program.declarations[0] else {
        panic!("expected a variable");
    };
    assert_eq!(var.storage, StorageClass::Extern);
    assert_eq!(var.type_name, "u8");
}

#[test]
fn test_parse_variable_declaration_default_type() {
    let program = parse_source("auto x;").unwrap();

    let Decl::Variable(var) = &program.declarations[0] else {
        panic!("expected a variable");
    };
    assert_eq!(var.type_name, "i32");
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_source("fun i32 add(a b) { return a + b; }").unwrap();

    assert_eq!(program.declarations.len(), 1);
    let Decl::Function(fun) = &program.declarations[0] else {
        panic!("expected a function");
    };
    assert_eq!(fun.name, "add");
    assert_eq!(fun.return_type, "i32");
    assert_eq!(fun.parameters, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(fun.body.items.len(), 1);
}

#[test]
fn test_parse_function_declaration_default_return_type() {
    let program = parse_source("fun main() { 0; }").unwrap();

    let Decl::Function(fun) = &program.declarations[0] else {
        panic!("expected a function");
    };
    assert_eq!(fun.return_type, "i32");
    assert!(fun.parameters.is_empty());
}

#[test]
fn test_parse_top_level_declaration_count() {
    let source = "auto i32 a; extern f64 b; fun f() { 1; } fun i8 g(x) { 2; }";
    let program = parse_source(source).unwrap();

    assert_eq!(program.declarations.len(), 4);
}

#[test]
fn test_parse_multiplication_binds_tighter() {
    let expr = parse_expr_stmt("1 + 2 * 3");

    let Expr::Binary { left, operator, right, .. } = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(operator.kind, TokenKind::Plus);
    assert!(matches!(*left, Expr::NumberLit { value: 1, .. }));

    let Expr::Binary { left, operator, right, .. } = *right else {
        panic!("expected the right side to be a product");
    };
    assert_eq!(operator.kind, TokenKind::Star);
    assert!(matches!(*left, Expr::NumberLit { value: 2, .. }));
    assert!(matches!(*right, Expr::NumberLit { value: 3, .. }));
}

#[test]
fn test_parse_additive_left_associative() {
    let expr = parse_expr_stmt("1 - 2 - 3");

    let Expr::Binary { left, right, .. } = expr else {
        panic!("expected a binary expression");
    };
    assert!(matches!(*left, Expr::Binary { .. }));
    assert!(matches!(*right, Expr::NumberLit { value: 3, .. }));
}

#[test]
fn test_parse_assignment_right_associative() {
    let expr = parse_expr_stmt("a = b = 1");

    let Expr::Assignment { target, value, .. } = expr else {
        panic!("expected an assignment");
    };
    assert_eq!(target, "a");
    let Expr::Assignment { target, .. } = *value else {
        panic!("expected a nested assignment");
    };
    assert_eq!(target, "b");
}

#[test]
fn test_parse_assignment_requires_lvalue() {
    let program = parse_source("fun f() { 1 + 2 = 3; }");

    assert!(program.is_err());
    assert_eq!(
        program.err().unwrap().get_error_name(),
        "InvalidAssignmentTarget"
    );
}

#[test]
fn test_parse_grouping() {
    let expr = parse_expr_stmt("(1 + 2) * 3");

    let Expr::Binary { left, operator, .. } = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(operator.kind, TokenKind::Star);
    assert!(matches!(*left, Expr::Grouping { .. }));
}

#[test]
fn test_parse_unary_prefix() {
    let expr = parse_expr_stmt("-a + b");

    // The prefix binds to `a` alone, not to the sum.
    let Expr::Binary { left, operator, .. } = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(operator.kind, TokenKind::Plus);
    let Expr::Unary { operator, operand, .. } = *left else {
        panic!("expected a unary expression");
    };
    assert_eq!(operator.kind, TokenKind::Dash);
    assert!(matches!(*operand, Expr::Identifier { .. }));
}

#[test]
fn test_parse_nested_unary() {
    let expr = parse_expr_stmt("~-1");

    let Expr::Unary { operator, operand, .. } = expr else {
        panic!("expected a unary expression");
    };
    assert_eq!(operator.kind, TokenKind::Not);
    assert!(matches!(*operand, Expr::Unary { .. }));
}

#[test]
fn test_parse_equality_and_comparison() {
    let expr = parse_expr_stmt("a < b == c > d");

    // Comparison binds tighter than equality.
    let Expr::Binary { left, operator, right, .. } = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(operator.kind, TokenKind::Equals);
    assert!(matches!(*left, Expr::Binary { .. }));
    assert!(matches!(*right, Expr::Binary { .. }));
}

#[test]
fn test_parse_not_equals() {
    let expr = parse_expr_stmt("a ~= b");

    let Expr::Binary { operator, .. } = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(operator.kind, TokenKind::NotEquals);
}

#[test]
fn test_parse_call_without_argument_separators() {
    let expr = parse_expr_stmt("add(1 2 x)");

    let Expr::Call { name, arguments, .. } = expr else {
        panic!("expected a call");
    };
    assert_eq!(name, "add");
    assert_eq!(arguments.len(), 3);
    assert!(matches!(arguments[2], Expr::Identifier { .. }));
}

#[test]
fn test_parse_call_with_no_arguments() {
    let expr = parse_expr_stmt("next()");

    let Expr::Call { name, arguments, .. } = expr else {
        panic!("expected a call");
    };
    assert_eq!(name, "next");
    assert!(arguments.is_empty());
}

#[test]
fn test_parse_grouped_identifier_is_not_a_call() {
    // Only `Identifier '('` forms a call; a parenthesized identifier
    // followed by `(` is a syntax error.
    let program = parse_source("fun f() { (g)(1); }");

    assert!(program.is_err());
}

#[test]
fn test_parse_percent_is_not_an_operator() {
    // `%` is lexed but wired into no precedence level.
    let program = parse_source("fun f() { 4 % 2; }");

    assert!(program.is_err());
}

#[test]
fn test_parse_string_literal() {
    let expr = parse_expr_stmt("`hello world`");

    let Expr::StringLit { value, .. } = expr else {
        panic!("expected a string literal");
    };
    assert_eq!(value, "hello world");
}

#[test]
fn test_parse_number_overflow() {
    let program = parse_source("fun f() { 99999999999999999999; }");

    assert!(program.is_err());
    assert_eq!(program.err().unwrap().get_error_name(), "NumberParseError");
}

#[test]
fn test_parse_if_statement() {
    let program = parse_source("fun f(a) { if (a > 0) return a; }").unwrap();

    let Decl::Function(fun) = &program.declarations[0] else {
        panic!("expected a function");
    };
    let BlockItem::Statement(Stmt::If { else_branch, .. }) = &fun.body.items[0] else {
        panic!("expected an if statement");
    };
    assert!(else_branch.is_none());
}

#[test]
fn test_parse_if_else_statement() {
    let program = parse_source("fun f(a) { if (a) return 1; else return 2; }").unwrap();

    let Decl::Function(fun) = &program.declarations[0] else {
        panic!("expected a function");
    };
    let BlockItem::Statement(Stmt::If { else_branch, .. }) = &fun.body.items[0] else {
        panic!("expected an if statement");
    };
    assert!(else_branch.is_some());
}

#[test]
fn test_parse_dangling_else_binds_nearest_if() {
    let program = parse_source("fun f(a b) { if (a) if (b) return 1; else return 2; }").unwrap();

    let Decl::Function(fun) = &program.declarations[0] else {
        panic!("expected a function");
    };
    let BlockItem::Statement(Stmt::If { then_branch, else_branch, .. }) = &fun.body.items[0]
    else {
        panic!("expected an if statement");
    };
    // The else belongs to the inner if.
    assert!(else_branch.is_none());
    let Stmt::If { else_branch, .. } = then_branch.as_ref() else {
        panic!("expected a nested if statement");
    };
    assert!(else_branch.is_some());
}

#[test]
fn test_parse_loop_statement() {
    let program = parse_source("fun f(n) { loop (n > 0) n = n - 1; }").unwrap();

    let Decl::Function(fun) = &program.declarations[0] else {
        panic!("expected a function");
    };
    assert!(matches!(
        fun.body.items[0],
        BlockItem::Statement(Stmt::Loop { .. })
    ));
}

#[test]
fn test_parse_nested_blocks_interleave_decls_and_stmts() {
    let program =
        parse_source("fun f() { auto i32 x; x = 1; auto i32 y; { y = 2; } }").unwrap();

    let Decl::Function(fun) = &program.declarations[0] else {
        panic!("expected a function");
    };
    assert_eq!(fun.body.items.len(), 4);
    assert!(matches!(fun.body.items[0], BlockItem::Declaration(_)));
    assert!(matches!(fun.body.items[1], BlockItem::Statement(_)));
    assert!(matches!(fun.body.items[2], BlockItem::Declaration(_)));
    assert!(matches!(
        fun.body.items[3],
        BlockItem::Statement(Stmt::Compound(_))
    ));
}

#[test]
fn test_parse_base_type_led_block_member_fails() {
    // A block member starting with a base type is dispatched to the
    // declaration parser, which has no production for it.
    let program = parse_source("fun f() { i32 x; }");

    assert!(program.is_err());
}

#[test]
fn test_parse_statement_at_top_level_fails() {
    let program = parse_source("return 1;");

    assert!(program.is_err());
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("").unwrap();

    assert!(program.declarations.is_empty());
}

#[test]
fn test_parse_missing_semicolon() {
    let program = parse_source("auto i32 x");

    assert!(program.is_err());
}

#[test]
fn test_parse_missing_close_brace() {
    let program = parse_source("fun f() { return 1;");

    assert!(program.is_err());
}

#[test]
fn test_parse_missing_close_paren_in_call() {
    let program = parse_source("fun f() { g(1 2; }");

    assert!(program.is_err());
}

#[test]
fn test_parse_unterminated_param_list() {
    let program = parse_source("fun f(a b");

    assert!(program.is_err());
}

#[test]
fn test_parse_return_requires_expression() {
    let program = parse_source("fun f() { return; }");

    assert!(program.is_err());
}

#[test]
fn test_parse_static_is_not_a_declaration() {
    // `static` is lexed as a keyword but no production accepts it.
    let program = parse_source("static i32 x;");

    assert!(program.is_err());
}

#[test]
fn test_parse_error_token_reported_as_lexical() {
    let program = parse_source("auto i32 @;");

    assert!(program.is_err());
    assert_eq!(
        program.err().unwrap().get_error_name(),
        "UnrecognisedToken"
    );
}
