use std::slice::{Iter, IterMut};

use super::ast::{Expr, Stmt, Type};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, Stmt> {
        self.body.iter_mut()
    }
    pub fn len(&self) -> usize {
        self.body.len()
    }
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `let`/`const` declaration. At least one of `explicit_type` and
/// `assigned_value` is present, and constants always have a value.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub is_constant: bool,
    pub assigned_value: Option<Expr>,
    pub explicit_type: Option<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub type_: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: Vec<Stmt>,
}

/// If Statement
///
/// `alternate` is either a block (`else { ... }`) or another if statement (`else if ...`).
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub consequent: BlockStmt,
    pub alternate: Option<Box<Stmt>>,
}

/// `import name from "path";`, where `from` defaults to the imported name.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub identifier: String,
    pub from: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeachStmt {
    pub value: String,
    pub index: Option<String>,
    pub iterable: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclStmt {
    pub name: String,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: BlockStmt,
}
