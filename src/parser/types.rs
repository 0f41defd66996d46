//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Named types (identifiers)
//! - List types, written with a `[]` prefix (`[]number`, `[][]string`)
//!
//! Similar to expression parsing, it uses NUD/LED handlers with binding
//! powers, but over its own tables. No infix type operators are registered
//! yet, so the loop in [`parse_type`] only runs once tables gain one.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::Type,
        types::{ListType, SymbolType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{BindingPower, Lookups},
    parser::Parser,
};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<Type, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, Type, BindingPower) -> Result<Type, Error>;

pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Registers the prefix forms of the type grammar.
pub fn create_token_type_lookups(lookups: &mut Lookups) {
    lookups.type_nud(TokenKind::Identifier, parse_symbol_type);
    lookups.type_nud(TokenKind::OpenBracket, parse_list_type);
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(Type::Symbol(SymbolType { name: token.value }))
}

pub fn parse_list_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::CloseBracket)?;
    let underlying = parse_type(parser, BindingPower::Default)?;

    Ok(Type::List(ListType {
        underlying: Box::new(underlying),
    }))
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<Type, Error> {
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.lookups().get_type_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(ErrorImpl::ExpectedType { found: token_kind }, parser.get_position()));
    };

    let mut left = nud_fn(parser)?;

    while parser.lookups().type_binding_power(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let Some(led_fn) = parser.lookups().get_type_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(ErrorImpl::MissingInfixHandler { kind: token_kind }, parser.get_position()));
        };

        let operator_bp = parser.lookups().type_binding_power(token_kind);
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}
