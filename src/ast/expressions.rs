use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Stmt, Type},
    statements::Parameter,
};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// String Expression
/// Represents a string literal in the AST, without its quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
}

/// Symbol Expression
/// Represents an identifier in the AST. This includes functions.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
}

// COMPLEX

/// Binary Expression
/// Represents an arithmetic, relational or logical operation (`a + b`, `a && b`).
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Assignment Expression
///
/// `operator` distinguishes plain assignment from the compound forms (`+=`, `??=`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: Token,
    pub value: Box<Expr>,
}

/// Prefix Expression
/// Represents a unary operator applied to an expression (`-a`, `!a`, `typeof a`).
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
}

/// Member Expression (`member.property`)
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub member: Box<Expr>,
    pub property: String,
}

/// Computed Expression (`member[property]`)
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedExpr {
    pub member: Box<Expr>,
    pub property: Box<Expr>,
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// Range Expression (`lower..upper`)
#[derive(Debug, Clone, PartialEq)]
pub struct RangeExpr {
    pub lower: Box<Expr>,
    pub upper: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteralExpr {
    pub contents: Vec<Expr>,
}

/// Function Expression
/// An anonymous function: `fn(a: number): number { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: Vec<Stmt>,
}

/// New Expression
/// Object instantiation. The parser guarantees the instantiation is a call (`new Foo(1)`).
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub instantiation: CallExpr,
}
