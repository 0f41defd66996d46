use super::{expressions::*, statements::*, types::*};

/// Statement Types
///
/// Every statement the parser can produce. Each variant owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    VarDecl(VarDeclStmt),
    Expression(ExpressionStmt),
    FnDecl(FnDeclStmt),
    If(IfStmt),
    Import(ImportStmt),
    Foreach(ForeachStmt),
    ClassDecl(ClassDeclStmt),
    Return(ReturnStmt),
    While(WhileStmt),
}

impl Stmt {
    /// Name of the variant, used in diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Stmt::Block(_) => "BlockStmt",
            Stmt::VarDecl(_) => "VarDeclStmt",
            Stmt::Expression(_) => "ExpressionStmt",
            Stmt::FnDecl(_) => "FnDeclStmt",
            Stmt::If(_) => "IfStmt",
            Stmt::Import(_) => "ImportStmt",
            Stmt::Foreach(_) => "ForeachStmt",
            Stmt::ClassDecl(_) => "ClassDeclStmt",
            Stmt::Return(_) => "ReturnStmt",
            Stmt::While(_) => "WhileStmt",
        }
    }
}

/// Expression Types
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Assignment(AssignmentExpr),
    Prefix(PrefixExpr),
    Member(MemberExpr),
    Computed(ComputedExpr),
    Call(CallExpr),
    Range(RangeExpr),
    ArrayLiteral(ArrayLiteralExpr),
    Function(FunctionExpr),
    New(NewExpr),
}

impl Expr {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "NumberExpr",
            Expr::String(_) => "StringExpr",
            Expr::Symbol(_) => "SymbolExpr",
            Expr::Binary(_) => "BinaryExpr",
            Expr::Assignment(_) => "AssignmentExpr",
            Expr::Prefix(_) => "PrefixExpr",
            Expr::Member(_) => "MemberExpr",
            Expr::Computed(_) => "ComputedExpr",
            Expr::Call(_) => "CallExpr",
            Expr::Range(_) => "RangeExpr",
            Expr::ArrayLiteral(_) => "ArrayLiteralExpr",
            Expr::Function(_) => "FunctionExpr",
            Expr::New(_) => "NewExpr",
        }
    }
}

/// Type annotations.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Symbol(SymbolType),
    List(ListType),
}

impl Type {
    pub fn variant_name(&self) -> &'static str {
        match self {
            Type::Symbol(_) => "SymbolType",
            Type::List(_) => "ListType",
        }
    }
}
