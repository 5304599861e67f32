use crate::{
    ast::{
        declarations::{Decl, FunctionDecl, StorageClass, VariableDecl},
        statements::{BlockItem, CompoundStmt, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.get_stmt_lookup().contains_key(&parser.current_token_kind()) {
        return parser.get_stmt_lookup().get(&parser.current_token_kind()).unwrap()(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression {
        span: expression.get_span().clone(),
        expression,
    })
}

/// Parses a function or variable declaration. Called at top level for
/// every member, and inside a compound for members led by `extern`,
/// `auto` or a base type - a base-type-led member lands in the error
/// branch, the grammar has no declaration form starting with a type.
pub fn parse_declaration(parser: &mut Parser) -> Result<Decl, Error> {
    match parser.current_token_kind() {
        TokenKind::Fun => parse_fun_decl(parser),
        TokenKind::Auto | TokenKind::Extern => parse_var_decl(parser),
        _ => Err(parser.unexpected_token_error(Some(String::from("expected a declaration")))),
    }
}

pub fn parse_fun_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let start = parser.advance().span.start.clone();

    // If no type provided assume i32
    let mut return_type = String::from("i32");
    if parser.current_token_kind() == TokenKind::BaseType {
        return_type = parser.advance().value.clone();
    }

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected an identifier during function declaration"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let parameters = parse_param_list(parser)?;
    let body = parse_compound(parser)?;

    Ok(Decl::Function(FunctionDecl {
        span: Span {
            start,
            end: body.span.end.clone(),
        },
        name,
        return_type,
        parameters,
        body,
    }))
}

/// `'(' Identifier* ')'` - adjacent parameter names with no separator
/// token between them.
pub fn parse_param_list(parser: &mut Parser) -> Result<Vec<String>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    while parser.current_token_kind() != TokenKind::CloseParen {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected a ')' before end of input"),
                },
                parser.get_position(),
            ));
        }

        let error = Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a parameter name"),
            },
            parser.get_position(),
        );
        parameters.push(parser.expect_error(TokenKind::Identifier, Some(error))?.value);
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(parameters)
}

pub fn parse_var_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let start_token = parser.advance().clone();
    let storage = if start_token.kind == TokenKind::Auto {
        StorageClass::Auto
    } else {
        StorageClass::Extern
    };

    // If no type provided assume i32
    let mut type_name = String::from("i32");
    if parser.current_token_kind() == TokenKind::BaseType {
        type_name = parser.advance().value.clone();
    }

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected an identifier during variable declaration"),
        },
        parser.get_position(),
    );
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let end = parser.expect(TokenKind::Semicolon)?;

    Ok(Decl::Variable(VariableDecl {
        span: Span {
            start: start_token.span.start.clone(),
            end: end.span.end.clone(),
        },
        name,
        type_name,
        storage,
    }))
}

/// `'{' (Declaration | Statement)* '}'`. A member is a declaration
/// whenever it starts with `extern`, `auto` or a base type; declarations
/// and statements stay interleaved in source order.
pub fn parse_compound(parser: &mut Parser) -> Result<CompoundStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start.clone();

    let mut items = vec![];

    let end;
    loop {
        match parser.current_token_kind() {
            TokenKind::EOF => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: parser.current_token().value.clone(),
                        message: String::from("expected a '}' before end of input"),
                    },
                    parser.get_position(),
                ));
            }
            TokenKind::CloseCurly => {
                end = parser.advance().span.end.clone();
                break;
            }
            TokenKind::Extern | TokenKind::Auto | TokenKind::BaseType => {
                items.push(BlockItem::Declaration(parse_declaration(parser)?));
            }
            _ => {
                items.push(BlockItem::Statement(parse_stmt(parser)?));
            }
        }
    }

    Ok(CompoundStmt {
        items,
        span: Span { start, end },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Compound(parse_compound(parser)?))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    // The expression is not optional, `return;` is rejected.
    let expression = parse_expr(parser, BindingPower::Default)?;

    let end = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return {
        expression,
        span: Span {
            start,
            end: end.span.end.clone(),
        },
    })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_branch = parse_stmt(parser)?;

    // An `else` always pairs with the nearest unmatched `if`.
    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    let end = match &else_branch {
        Some(else_stmt) => else_stmt.get_span().end.clone(),
        None => then_branch.get_span().end.clone(),
    };

    Ok(Stmt::If {
        condition,
        then_branch: Box::new(then_branch),
        else_branch,
        span: Span { start, end },
    })
}

pub fn parse_loop_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::Loop {
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        condition,
        body: Box::new(body),
    })
}
