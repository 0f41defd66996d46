use crate::{
    ast::{
        ast::{Stmt, Type},
        statements::{
            BlockStmt, ClassDeclStmt, ExpressionStmt, FnDeclStmt, ForeachStmt, IfStmt, ImportStmt, Parameter,
            ReturnStmt, VarDeclStmt, WhileStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.lookups().get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

/// Parses `{ ... }` into a block, for constructs whose body must be one.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut body = Vec::new();
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        body.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt { body })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();
    let is_constant = start_token.kind == TokenKind::Const;

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    let assigned_value = if parser.current_token_kind() != TokenKind::Semicolon {
        parser.expect(TokenKind::Assignment)?;
        Some(parse_expr(parser, BindingPower::Assignment)?)
    } else if is_constant {
        return Err(Error::new(ErrorImpl::MissingInitializer { identifier }, parser.get_position()));
    } else if explicit_type.is_none() {
        return Err(Error::new(ErrorImpl::MissingTypeOrInitializer { identifier }, parser.get_position()));
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        identifier,
        is_constant,
        assigned_value,
        explicit_type,
    }))
}

/// Shared by function declarations and function literals:
/// `(name: type, ...) [: return_type] { body }`.
pub fn parse_fn_params_and_body(parser: &mut Parser) -> Result<(Vec<Parameter>, Option<Type>, Vec<Stmt>), Error> {
    let mut parameters = Vec::new();

    parser.expect(TokenKind::OpenParen)?;
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseParen {
        let name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let type_ = parse_type(parser, BindingPower::Default)?;
        parameters.push(Parameter { name, type_ });

        if !parser.current_token().is_one_of_many(&[TokenKind::CloseParen, TokenKind::EOF]) {
            parser.expect(TokenKind::Comma)?;
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    let body = parse_block(parser)?.body;

    Ok((parameters, return_type, body))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let identifier = parser.expect(TokenKind::Identifier)?.value;
    let (parameters, return_type, body) = parse_fn_params_and_body(parser)?;

    Ok(Stmt::FnDecl(FnDeclStmt {
        identifier,
        parameters,
        return_type,
        body,
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Assignment)?;
    let consequent = parse_block(parser)?;

    let alternate = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();

        if parser.current_token_kind() == TokenKind::If {
            Some(Box::new(parse_if_stmt(parser)?))
        } else {
            Some(Box::new(parse_block_stmt(parser)?))
        }
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        condition,
        consequent,
        alternate,
    }))
}

pub fn parse_import_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let identifier = parser.expect(TokenKind::Identifier)?.value;

    let from = if parser.current_token_kind() == TokenKind::From {
        parser.advance();
        parser.expect(TokenKind::String)?.value
    } else {
        identifier.clone()
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Import(ImportStmt { identifier, from }))
}

/// `foreach value[, index] in iterable { body }`
pub fn parse_foreach_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let value = parser.expect(TokenKind::Identifier)?.value;

    let index = if parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        Some(parser.expect(TokenKind::Identifier)?.value)
    } else {
        None
    };

    parser.expect(TokenKind::In)?;
    let iterable = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?.body;

    Ok(Stmt::Foreach(ForeachStmt {
        value,
        index,
        iterable,
        body,
    }))
}

pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let name = parser.expect(TokenKind::Identifier)?.value;
    let body = parse_block(parser)?.body;

    Ok(Stmt::ClassDecl(ClassDeclStmt { name, body }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let value = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt { value }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Assignment)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While(WhileStmt { condition, body }))
}
