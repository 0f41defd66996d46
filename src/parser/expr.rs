use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrayLiteralExpr, AssignmentExpr, BinaryExpr, CallExpr, ComputedExpr, FunctionExpr, MemberExpr, NewExpr,
            NumberExpr, PrefixExpr, RangeExpr, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_fn_params_and_body};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.lookups().get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(ErrorImpl::ExpectedExpression { found: token_kind }, parser.get_position()));
    };

    let mut left = nud_fn(parser)?;

    // While the current token binds tighter than the caller, keep extending the lhs
    while parser.lookups().binding_power(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let Some(led_fn) = parser.lookups().get_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(ErrorImpl::MissingInfixHandler { kind: token_kind }, parser.get_position()));
        };

        let operator_bp = parser.lookups().binding_power(token_kind);
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let position = parser.get_position();
    let token = parser.advance().clone();

    match token.kind {
        TokenKind::Number => match token.value.parse() {
            Ok(value) => Ok(Expr::Number(NumberExpr { value })),
            Err(_) => Err(Error::new(ErrorImpl::NumberParseError { token: token.value }, position)),
        },
        TokenKind::String => Ok(Expr::String(StringExpr { value: token.value })),
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr { value: token.value })),
        found => Err(Error::new(ErrorImpl::ExpectedExpression { found }, position)),
    }
}

/// Left associative: the right operand stops at operators of equal power.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        right_expr: Box::new(rhs),
    }))
}

/// Right associative: `a = b = c` assigns `b = c` to `a`.
pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance().clone();
    let rhs = parse_expr(parser, bp.right_associative())?;

    Ok(Expr::Assignment(AssignmentExpr {
        assignee: Box::new(left),
        operator,
        value: Box::new(rhs),
    }))
}

pub fn parse_range_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    parser.advance();
    let upper = parse_expr(parser, bp.right_associative())?;

    Ok(Expr::Range(RangeExpr {
        lower: Box::new(left),
        upper: Box::new(upper),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// Parses comma separated expressions up to and including `close`.
fn parse_expr_list(parser: &mut Parser, close: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut contents = vec![];

    while parser.has_tokens() && parser.current_token_kind() != close {
        contents.push(parse_expr(parser, BindingPower::Assignment)?);

        if !parser.current_token().is_one_of_many(&[TokenKind::EOF, close]) {
            parser.expect(TokenKind::Comma)?;
        }
    }

    parser.expect(close)?;
    Ok(contents)
}

pub fn parse_array_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let contents = parse_expr_list(parser, TokenKind::CloseBracket)?;

    Ok(Expr::ArrayLiteral(ArrayLiteralExpr { contents }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        callee: Box::new(left),
        arguments,
    }))
}

/// Handles both `a.b` and the computed form `a[b]`.
pub fn parse_member_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let is_computed = parser.advance().kind == TokenKind::OpenBracket;

    if is_computed {
        let property = parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::CloseBracket)?;

        return Ok(Expr::Computed(ComputedExpr {
            member: Box::new(left),
            property: Box::new(property),
        }));
    }

    Ok(Expr::Member(MemberExpr {
        member: Box::new(left),
        property: parser.expect(TokenKind::Identifier)?.value,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::Fn)?;
    let (parameters, return_type, body) = parse_fn_params_and_body(parser)?;

    Ok(Expr::Function(FunctionExpr {
        parameters,
        return_type,
        body,
    }))
}

/// `new Foo(args)`; the instantiated expression must be a call.
pub fn parse_new_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::New)?;
    let position = parser.get_position();

    match parse_expr(parser, BindingPower::Default)? {
        Expr::Call(instantiation) => Ok(Expr::New(NewExpr { instantiation })),
        other => Err(Error::new(
            ErrorImpl::ExpectedCallAfterNew {
                found: String::from(other.variant_name()),
            },
            position,
        )),
    }
}
