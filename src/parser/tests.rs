//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Precedence and associativity of expressions
//! - Postfix chains (member, computed, call)
//! - Variable and function declarations
//! - Control flow statements
//! - Class declarations and imports
//! - Type annotations
//! - Error cases

use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::{Expr, Stmt, Type},
        expressions::{BinaryExpr, NumberExpr, SymbolExpr},
        statements::BlockStmt,
        types::{ListType, SymbolType},
    },
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::{lexer::tokenize, tokens::{Token, TokenKind}},
    Position,
};

use super::{
    lookups::{BindingPower, Lookups},
    parser::{parse, parse_source, parse_with_lookups},
};

fn parse_ok(source: &str) -> BlockStmt {
    parse_source(source).unwrap_or_else(|error| panic!("{:?} failed to parse: {}", source, error))
}

fn parse_err(source: &str) -> Error {
    parse_source(source).expect_err("source should not parse")
}

/// Parses a single expression statement and returns its expression.
fn parse_expression(source: &str) -> Expr {
    let block = parse_ok(source);
    assert_eq!(block.len(), 1);

    match block.body.into_iter().next() {
        Some(Stmt::Expression(stmt)) => stmt.expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

fn number(value: f64) -> Expr {
    Expr::Number(NumberExpr { value })
}

fn symbol(value: &str) -> Expr {
    Expr::Symbol(SymbolExpr { value: String::from(value) })
}

fn binary(left: Expr, kind: TokenKind, operator: &str, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator: Token { kind, value: String::from(operator) },
        right: Box::new(right),
    })
}

#[test]
fn test_parse_empty_program() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("// just a comment\n").is_empty());
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_expression("1 + 2 * 3;"),
        binary(
            number(1.0),
            TokenKind::Plus,
            "+",
            binary(number(2.0), TokenKind::Star, "*", number(3.0))
        )
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        parse_expression("1 - 2 - 3;"),
        binary(
            binary(number(1.0), TokenKind::Dash, "-", number(2.0)),
            TokenKind::Dash,
            "-",
            number(3.0)
        )
    );
}

#[test]
fn test_relational_binds_tighter_than_logical() {
    let Expr::Binary(and) = parse_expression("a < b && c >= d;") else {
        panic!("expected binary expression");
    };

    assert_eq!(and.operator.kind, TokenKind::And);
    assert!(matches!(*and.left, Expr::Binary(ref left) if left.operator.kind == TokenKind::Less));
    assert!(matches!(*and.right, Expr::Binary(ref right) if right.operator.kind == TokenKind::GreaterEquals));
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(
        parse_expression("(1 + 2) * 3;"),
        binary(
            binary(number(1.0), TokenKind::Plus, "+", number(2.0)),
            TokenKind::Star,
            "*",
            number(3.0)
        )
    );
}

#[test]
fn test_unclosed_group_fails() {
    let error = parse_err("(1 + 2;");

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::Semicolon
        }
    );
}

#[test]
fn test_assignment_is_right_associative() {
    let Expr::Assignment(outer) = parse_expression("a = b = c;") else {
        panic!("expected assignment");
    };

    assert_eq!(*outer.assignee, symbol("a"));
    let Expr::Assignment(inner) = *outer.value else {
        panic!("expected nested assignment");
    };
    assert_eq!(*inner.assignee, symbol("b"));
    assert_eq!(*inner.value, symbol("c"));
}

#[test]
fn test_compound_assignment_keeps_operator() {
    let Expr::Assignment(assignment) = parse_expression("total += price * 2;") else {
        panic!("expected assignment");
    };

    assert_eq!(assignment.operator.kind, TokenKind::PlusEquals);
    assert!(matches!(*assignment.value, Expr::Binary(_)));

    let Expr::Assignment(nullish) = parse_expression("cache ??= load();") else {
        panic!("expected assignment");
    };
    assert_eq!(nullish.operator.kind, TokenKind::NullishAssignment);
}

#[test]
fn test_range_expression() {
    let Expr::Range(range) = parse_expression("0..n + 1;") else {
        panic!("expected range");
    };

    assert_eq!(*range.lower, number(0.0));
    assert_eq!(*range.upper, binary(symbol("n"), TokenKind::Plus, "+", number(1.0)));
}

#[test]
fn test_chained_postfix_operators() {
    let Expr::Call(call) = parse_expression("a.b[0](1);") else {
        panic!("expected call");
    };
    assert_eq!(call.arguments, vec![number(1.0)]);

    let Expr::Computed(computed) = *call.callee else {
        panic!("expected computed member");
    };
    assert_eq!(*computed.property, number(0.0));

    let Expr::Member(member) = *computed.member else {
        panic!("expected member");
    };
    assert_eq!(member.property, "b");
    assert_eq!(*member.member, symbol("a"));
}

#[test]
fn test_call_arguments() {
    let Expr::Call(call) = parse_expression("print(\"hi\", x + 1, [1, 2]);") else {
        panic!("expected call");
    };

    assert_eq!(call.arguments.len(), 3);
    assert!(matches!(call.arguments[0], Expr::String(ref s) if s.value == "hi"));
    assert!(matches!(call.arguments[1], Expr::Binary(_)));
    assert!(matches!(call.arguments[2], Expr::ArrayLiteral(ref a) if a.contents.len() == 2));

    let Expr::Call(empty) = parse_expression("tick();") else {
        panic!("expected call");
    };
    assert!(empty.arguments.is_empty());
}

#[test]
fn test_missing_comma_between_arguments() {
    let error = parse_err("f(a b);");

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Comma,
            found: TokenKind::Identifier
        }
    );
}

#[test]
fn test_prefix_operators() {
    let Expr::Binary(product) = parse_expression("-a * b;") else {
        panic!("expected binary");
    };
    assert_eq!(product.operator.kind, TokenKind::Star);
    assert!(matches!(*product.left, Expr::Prefix(ref prefix) if prefix.operator.kind == TokenKind::Dash));

    let Expr::Prefix(not) = parse_expression("!done;") else {
        panic!("expected prefix");
    };
    assert_eq!(not.operator.kind, TokenKind::Not);

    let Expr::Prefix(type_of) = parse_expression("typeof user.name;") else {
        panic!("expected prefix");
    };
    assert_eq!(type_of.operator.kind, TokenKind::Typeof);
    assert!(matches!(*type_of.right_expr, Expr::Member(_)));
}

#[test]
fn test_array_literal() {
    let Expr::ArrayLiteral(array) = parse_expression("[1, \"two\", three,];") else {
        panic!("expected array literal");
    };

    assert_eq!(array.contents.len(), 3);
    assert_eq!(array.contents[2], symbol("three"));
}

#[test]
fn test_new_expression() {
    let Expr::New(new) = parse_expression("new Point(1, 2);") else {
        panic!("expected new expression");
    };

    assert_eq!(*new.instantiation.callee, symbol("Point"));
    assert_eq!(new.instantiation.arguments.len(), 2);
}

#[test]
fn test_new_requires_call() {
    let error = parse_err("new Point;");

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::ExpectedCallAfterNew {
            found: String::from("SymbolExpr")
        }
    );
}

#[test]
fn test_function_literal() {
    let block = parse_ok("let add = fn(a: number, b: number): number { return a + b; };");

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected variable declaration");
    };
    let Some(Expr::Function(function)) = &decl.assigned_value else {
        panic!("expected function literal");
    };

    assert_eq!(function.parameters.len(), 2);
    assert_eq!(function.parameters[1].name, "b");
    assert_eq!(
        function.return_type,
        Some(Type::Symbol(SymbolType { name: String::from("number") }))
    );
    assert!(matches!(function.body[0], Stmt::Return(_)));
}

#[test]
fn test_expected_expression_error() {
    let error = parse_err("let x = ;");

    assert_eq!(error.get_error_name(), "ExpectedExpression");
    assert_eq!(error.message(), "expected expression, found Semicolon");
    assert_eq!(*error.get_position(), Position::Token(3));
}

#[test]
fn test_parse_variable_declaration() {
    let block = parse_ok("let x = 42;");

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected variable declaration");
    };
    assert_eq!(decl.identifier, "x");
    assert!(!decl.is_constant);
    assert_eq!(decl.assigned_value, Some(number(42.0)));
    assert_eq!(decl.explicit_type, None);
}

#[test]
fn test_parse_typed_declaration_without_initializer() {
    let block = parse_ok("let names: []string;");

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected variable declaration");
    };
    assert_eq!(decl.assigned_value, None);
    assert_eq!(
        decl.explicit_type,
        Some(Type::List(ListType {
            underlying: Box::new(Type::Symbol(SymbolType { name: String::from("string") }))
        }))
    );
}

#[test]
fn test_parse_const_declaration() {
    let block = parse_ok("const RATE = 2.5;");

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected variable declaration");
    };
    assert!(decl.is_constant);
    assert_eq!(decl.assigned_value, Some(number(2.5)));
}

#[test]
fn test_missing_type_or_initializer() {
    let error = parse_err("let x;");

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::MissingTypeOrInitializer {
            identifier: String::from("x")
        }
    );
    assert!(error.message().contains("missing type or initializer"));
}

#[test]
fn test_const_without_initializer() {
    for source in ["const x;", "const x: number;"] {
        let error = parse_err(source);

        assert_eq!(
            *error.get_internal_error(),
            ErrorImpl::MissingInitializer {
                identifier: String::from("x")
            }
        );
        assert!(error.message().contains("missing initializer"));
    }
}

#[test]
fn test_missing_semicolon() {
    let error = parse_err("let x = 42");

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::EOF
        }
    );
}

#[test]
fn test_missing_identifier_in_declaration() {
    let error = parse_err("let = 42;");

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Assignment
        }
    );
}

#[test]
fn test_nested_list_type() {
    let block = parse_ok("let grid: [][]number = [];");

    let Stmt::VarDecl(decl) = &block.body[0] else {
        panic!("expected variable declaration");
    };
    let Some(Type::List(outer)) = &decl.explicit_type else {
        panic!("expected list type");
    };
    assert!(matches!(*outer.underlying, Type::List(_)));
}

#[test]
fn test_invalid_type_annotation() {
    let error = parse_err("let x: 5 = 1;");

    assert_eq!(error.get_error_name(), "ExpectedType");
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::ExpectedType {
            found: TokenKind::Number
        }
    );
}

#[test]
fn test_parse_function_declaration() {
    let block = parse_ok("fn add(a: number, b: number): number { return a + b; }");

    let Stmt::FnDecl(function) = &block.body[0] else {
        panic!("expected function declaration");
    };
    assert_eq!(function.identifier, "add");
    assert_eq!(function.parameters.len(), 2);
    assert_eq!(function.parameters[0].name, "a");
    assert_eq!(
        function.parameters[0].type_,
        Type::Symbol(SymbolType { name: String::from("number") })
    );
    assert!(function.return_type.is_some());
    assert_eq!(function.body.len(), 1);
}

#[test]
fn test_function_without_return_type_or_parameters() {
    let block = parse_ok("fn main() { print(1); }");

    let Stmt::FnDecl(function) = &block.body[0] else {
        panic!("expected function declaration");
    };
    assert!(function.parameters.is_empty());
    assert_eq!(function.return_type, None);
}

#[test]
fn test_parse_if_else_if_else_chain() {
    let block = parse_ok("if x > 0 { a(); } else if x < 0 { b(); } else { c(); }");

    let Stmt::If(first) = &block.body[0] else {
        panic!("expected if statement");
    };
    assert!(matches!(first.condition, Expr::Binary(_)));
    assert_eq!(first.consequent.len(), 1);

    let Some(Stmt::If(second)) = first.alternate.as_deref() else {
        panic!("expected else if");
    };
    assert!(matches!(second.alternate.as_deref(), Some(Stmt::Block(block)) if block.len() == 1));
}

#[test]
fn test_if_requires_block() {
    let error = parse_err("if x print(x);");

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::OpenCurly,
            found: TokenKind::Identifier
        }
    );
}

#[test]
fn test_parse_import() {
    let block = parse_ok("import math; import utils from \"./lib/utils\";");

    assert_eq!(block.len(), 2);
    let Stmt::Import(math) = &block.body[0] else {
        panic!("expected import");
    };
    assert_eq!(math.identifier, "math");
    assert_eq!(math.from, "math");

    let Stmt::Import(utils) = &block.body[1] else {
        panic!("expected import");
    };
    assert_eq!(utils.from, "./lib/utils");
}

#[test]
fn test_parse_foreach() {
    let block = parse_ok("foreach item, i in items { print(i); } foreach n in 0..10 {}");

    let Stmt::Foreach(indexed) = &block.body[0] else {
        panic!("expected foreach");
    };
    assert_eq!(indexed.value, "item");
    assert_eq!(indexed.index.as_deref(), Some("i"));
    assert_eq!(indexed.iterable, symbol("items"));
    assert_eq!(indexed.body.len(), 1);

    let Stmt::Foreach(plain) = &block.body[1] else {
        panic!("expected foreach");
    };
    assert_eq!(plain.index, None);
    assert!(matches!(plain.iterable, Expr::Range(_)));
    assert!(plain.body.is_empty());
}

#[test]
fn test_foreach_requires_in() {
    let error = parse_err("foreach x items {}");

    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::In,
            found: TokenKind::Identifier
        }
    );
}

#[test]
fn test_parse_class_declaration() {
    let block = parse_ok("class Point { let x: number; let y: number; fn length(): number { return 0; } }");

    let Stmt::ClassDecl(class) = &block.body[0] else {
        panic!("expected class declaration");
    };
    assert_eq!(class.name, "Point");
    assert_eq!(class.body.len(), 3);
    assert!(matches!(class.body[2], Stmt::FnDecl(_)));
}

#[test]
fn test_parse_while_and_return() {
    let block = parse_ok("while i < 10 { i += 1; } return;");

    let Stmt::While(while_stmt) = &block.body[0] else {
        panic!("expected while");
    };
    assert_eq!(while_stmt.body.len(), 1);
    assert!(matches!(block.body[1], Stmt::Return(ref ret) if ret.value.is_none()));
}

#[test]
fn test_nested_blocks() {
    let block = parse_ok("{ let a = 1; { let b = 2; } }");

    let Stmt::Block(outer) = &block.body[0] else {
        panic!("expected block");
    };
    assert_eq!(outer.len(), 2);
    assert!(matches!(outer.body[1], Stmt::Block(_)));
}

#[test]
fn test_unterminated_block_fails_at_end_of_stream() {
    let error = parse_err("{ let x = 1;");

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF
        }
    );
}

#[test]
fn test_truncated_inputs_fail_without_panicking() {
    for source in ["fn f(", "fn f(a: number", "foo(1, ", "[1, 2", "class A {", "if x {", "a.", "a[0", "import"] {
        let error = parse_err(source);
        assert_eq!(error.kind(), ErrorKind::Parse, "source: {:?}", source);
    }
}

#[test]
fn test_parse_without_trailing_eof_token() {
    let tokens = vec![
        Token { kind: TokenKind::Identifier, value: String::from("x") },
        Token { kind: TokenKind::Semicolon, value: String::from(";") },
    ];

    let block = parse(tokens).unwrap();
    assert_eq!(block.len(), 1);
}

#[test]
fn test_custom_tables_only_know_registered_operators() {
    let mut lookups = Lookups::empty();
    lookups.nud(TokenKind::Identifier, super::expr::parse_primary_expr);
    lookups.led(TokenKind::Star, BindingPower::Multiplicative, super::expr::parse_binary_expr);

    let block = parse_with_lookups(tokenize("a * b;").unwrap(), &lookups).unwrap();
    assert_eq!(block.len(), 1);

    // `+` has no binding power here, so the statement ends before it
    let error = parse_with_lookups(tokenize("a + b;").unwrap(), &lookups).unwrap_err();
    assert_eq!(
        *error.get_internal_error(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::Plus
        }
    );
}

#[test]
fn test_shared_tables_match_fresh_tables() {
    let first = "let xs: []number = [1, 2, 3]; xs[0] = a.b(1) * -2;";
    let second = "fn f(a: number): number { return a..10; } foreach v, i in f(1) { print(v); }";

    let shared_first = parse(tokenize(first).unwrap()).unwrap();
    let shared_second = parse(tokenize(second).unwrap()).unwrap();

    let fresh_first = parse_with_lookups(tokenize(first).unwrap(), &Lookups::new()).unwrap();
    let fresh_second = parse_with_lookups(tokenize(second).unwrap(), &Lookups::new()).unwrap();

    assert_eq!(shared_first, fresh_first);
    assert_eq!(shared_second, fresh_second);
}

#[test]
fn test_right_associative_binding_power_is_weaker() {
    assert!(BindingPower::Assignment.right_associative() < BindingPower::Assignment);
    assert!(BindingPower::Logical.right_associative() < BindingPower::Logical);
    assert_eq!(BindingPower::Default.right_associative(), BindingPower::Default);
}
