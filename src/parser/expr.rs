use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(parser.unexpected_token_error(Some(String::from("expected an expression"))));
    }

    let mut left = parser.get_nud_lookup().get(&token_kind).unwrap()(parser)?;

    // While LED and current BP is greater than the BP we were entered
    // with, continue extending the lhs. Same power stops the loop, which
    // keeps every infix level left-associative.
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        if !parser.get_led_lookup().contains_key(&token_kind) {
            return Err(parser.unexpected_token_error(None));
        }

        left = parser.get_led_lookup().get(&token_kind).unwrap()(
            parser,
            left,
            *parser.get_bp_lookup().get(&parser.current_token_kind()).unwrap(),
        )?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse::<i64>();

            match result {
                Ok(value) => Ok(Expr::NumberLit {
                    value,
                    span: parser.advance().span.clone(),
                }),
                Err(_) => Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::String => {
            let token = parser.advance();
            // Drop the backtick delimiters, the node holds the text only.
            let value = token.value[1..token.value.len() - 1].to_string();
            Ok(Expr::StringLit {
                value,
                span: token.span.clone(),
            })
        }
        TokenKind::Identifier => {
            // A call exists only as an identifier directly followed by
            // `(`; one token of lookahead decides it.
            if parser.peek_kind(1) == TokenKind::OpenParen {
                return parse_call_expr(parser);
            }

            let token = parser.advance();
            Ok(Expr::Identifier {
                name: token.value.clone(),
                span: token.span.clone(),
            })
        }
        _ => Err(parser.unexpected_token_error(Some(String::from("expected an expression")))),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    // The operand binds at unary strength: `-a + b` negates `a`, not the
    // sum. A further prefix operator re-enters here, so prefix chains
    // nest right-to-left.
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary {
        span: Span {
            start: operator_token.span.start.clone(),
            end: operand.get_span().end.clone(),
        },
        operator: operator_token,
        operand: Box::new(operand),
    })
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    // Only an identifier may stand left of `=`.
    let target = match left {
        Expr::Identifier { ref name, .. } => name.clone(),
        _ => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget {
                    token: parser.current_token().value.clone(),
                },
                left.get_span().start.clone(),
            ))
        }
    };

    parser.advance();

    // The right side is parsed from the bottom of the ladder, so chained
    // assignments associate to the right.
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Assignment {
        span: Span {
            start: left.get_span().start.clone(),
            end: value.get_span().end.clone(),
        },
        target,
        value: Box::new(value),
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start.clone();

    let inner = parse_expr(parser, BindingPower::Default)?;

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("expected a ')'"),
        },
        parser.get_position(),
    );
    let end = parser.expect_error(TokenKind::CloseParen, Some(error))?;

    Ok(Expr::Grouping {
        inner: Box::new(inner),
        span: Span {
            start,
            end: end.span.end.clone(),
        },
    })
}

pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name_token = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::OpenParen)?;

    // Arguments are expressions back to back until the `)`; the language
    // has no separator token between them.
    let mut arguments = vec![];
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

        arguments.push(parse_expr(parser, BindingPower::Default)?);
    }

    let end = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call {
        name: name_token.value.clone(),
        arguments,
        span: Span {
            start: name_token.span.start.clone(),
            end: end.span.end.clone(),
        },
    })
}
