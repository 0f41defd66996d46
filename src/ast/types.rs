//! Type annotation nodes for the AST.
//!
//! Types are recorded exactly as written; nothing at this layer resolves
//! a name to a concrete type.

use super::ast::Type;

/// A named type reference, such as `number` or `Point`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
}

/// A list of some element type, written `[]number`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListType {
    pub underlying: Box<Type>,
}
