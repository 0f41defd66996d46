use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::*,
    parser::Parser,
    stmt::*,
    types::{create_token_type_lookups, TypeBPLookup, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler, TypeNUDLookup},
};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Comma,
    Assignment,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
    Primary,
}

impl BindingPower {
    /// The next weaker binding power.
    ///
    /// Parsing a right operand at this power lets an operator of equal
    /// power bind again on the right, making the operator right associative.
    pub fn right_associative(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Comma => BindingPower::Default,
            BindingPower::Assignment => BindingPower::Comma,
            BindingPower::Logical => BindingPower::Assignment,
            BindingPower::Relational => BindingPower::Logical,
            BindingPower::Additive => BindingPower::Relational,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::Unary => BindingPower::Multiplicative,
            BindingPower::Call => BindingPower::Unary,
            BindingPower::Member => BindingPower::Call,
            BindingPower::Primary => BindingPower::Member,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    /// Tables shared by every parse. Built once and never mutated afterwards.
    pub static ref LOOKUPS: Lookups = Lookups::new();
}

/// Handler tables for statements, expressions and types.
///
/// Registration happens while building the value; parsers only ever
/// borrow it immutably, so one instance can serve any number of parses.
pub struct Lookups {
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    type_nud_lookup: TypeNUDLookup,
    type_led_lookup: TypeLEDLookup,
    type_binding_power_lookup: TypeBPLookup,
}

impl Lookups {
    /// Builds the full expression, statement and type grammar.
    pub fn new() -> Self {
        let mut lookups = Lookups::empty();
        create_token_lookups(&mut lookups);
        create_token_type_lookups(&mut lookups);
        lookups
    }

    /// Tables with nothing registered.
    pub fn empty() -> Self {
        Lookups {
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            type_binding_power_lookup: HashMap::new(),
        }
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    pub fn get_type_led_lookup(&self) -> &TypeLEDLookup {
        &self.type_led_lookup
    }

    pub fn get_type_bp_lookup(&self) -> &TypeBPLookup {
        &self.type_binding_power_lookup
    }

    /// Binding power of `kind` in infix position, `Default` when it has none.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    pub fn type_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.type_binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix handlers do not touch the binding power table, so a token can
    /// be both a prefix operator and an infix operator (`-`, `[`, `(`).
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type left denotation handler.
    pub fn type_led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: TypeLEDHandler) {
        self.type_binding_power_lookup.insert(kind, binding_power);
        self.type_led_lookup.insert(kind, led_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }
}

impl Default for Lookups {
    fn default() -> Self {
        Lookups::new()
    }
}

pub fn create_token_lookups(lookups: &mut Lookups) {
    // Assignment
    lookups.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    lookups.led(TokenKind::PlusEquals, BindingPower::Assignment, parse_assignment_expr);
    lookups.led(TokenKind::MinusEquals, BindingPower::Assignment, parse_assignment_expr);
    lookups.led(TokenKind::StarEquals, BindingPower::Assignment, parse_assignment_expr);
    lookups.led(TokenKind::SlashEquals, BindingPower::Assignment, parse_assignment_expr);
    lookups.led(TokenKind::NullishAssignment, BindingPower::Assignment, parse_assignment_expr);

    // Logical
    lookups.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    lookups.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    lookups.led(TokenKind::DotDot, BindingPower::Logical, parse_range_expr);

    // Relational
    lookups.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::Equals, BindingPower::Relational, parse_binary_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    lookups.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    lookups.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Number, parse_primary_expr);
    lookups.nud(TokenKind::String, parse_primary_expr);
    lookups.nud(TokenKind::Identifier, parse_primary_expr);

    // Unary/prefix
    lookups.nud(TokenKind::Typeof, parse_prefix_expr);
    lookups.nud(TokenKind::Dash, parse_prefix_expr);
    lookups.nud(TokenKind::Not, parse_prefix_expr);
    lookups.nud(TokenKind::OpenBracket, parse_array_literal_expr);

    // Member, computed and call
    lookups.led(TokenKind::Dot, BindingPower::Member, parse_member_expr);
    lookups.led(TokenKind::OpenBracket, BindingPower::Member, parse_member_expr);
    lookups.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Grouping, function literals and instantiation
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);
    lookups.nud(TokenKind::Fn, parse_fn_expr);
    lookups.nud(TokenKind::New, parse_new_expr);

    // Statements
    lookups.stmt(TokenKind::OpenCurly, parse_block_stmt);
    lookups.stmt(TokenKind::Let, parse_var_decl_stmt);
    lookups.stmt(TokenKind::Const, parse_var_decl_stmt);
    lookups.stmt(TokenKind::Fn, parse_fn_decl_stmt);
    lookups.stmt(TokenKind::If, parse_if_stmt);
    lookups.stmt(TokenKind::Import, parse_import_stmt);
    lookups.stmt(TokenKind::Foreach, parse_foreach_stmt);
    lookups.stmt(TokenKind::Class, parse_class_decl_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);
    lookups.stmt(TokenKind::While, parse_while_stmt);
}
