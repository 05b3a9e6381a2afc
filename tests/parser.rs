use boolex::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{Location, SyntaxError},
    interpreter::{
        lexer::{TokenKind, tokenize},
        parser::{
            core::{parse_expression, parse_program},
            statement::{parse_assignment, parse_statement, parse_unary_statement},
        },
    },
};
use pretty_assertions::assert_eq;

fn expression(src: &str) -> Result<Expr, SyntaxError> {
    let tokens = tokenize(src)?;
    parse_expression(&mut tokens.iter().peekable())
}

fn literal(text: &str, position: usize) -> Expr {
    Expr::BooleanLiteral { text: text.to_string(),
                           position }
}

fn variable(name: &str, position: usize) -> Expr {
    Expr::Variable { name: name.to_string(),
                     position }
}

fn binary(op: BinaryOperator, left: Expr, right: Expr, position: usize) -> Expr {
    Expr::BinaryOp { op,
                     left: Box::new(left),
                     right: Box::new(right),
                     position }
}

#[test]
fn and_binds_tighter_than_or() {
    let tree = expression("true or true and false;").unwrap();

    assert_eq!(tree,
               binary(BinaryOperator::Or,
                      literal("true", 0),
                      binary(BinaryOperator::And, literal("true", 8), literal("false", 17), 13),
                      5));
}

#[test]
fn parentheses_group_subexpressions() {
    let tree = expression("(true xor true) or true;").unwrap();

    assert_eq!(tree,
               binary(BinaryOperator::Or,
                      binary(BinaryOperator::Xor, literal("true", 1), literal("true", 10), 6),
                      literal("true", 19),
                      16));
}

#[test]
fn chains_lean_left() {
    assert_eq!(expression("a or b xor c").unwrap().to_string(), "(xor (or a b) c)");
    assert_eq!(expression("a and b and c").unwrap().to_string(), "(and (and a b) c)");
    assert_eq!(expression("a and (b or c) xor d").unwrap().to_string(),
               "(xor (and a (or b c)) d)");
}

#[test]
fn expression_stops_before_terminator() {
    let tokens = tokenize("x and y; z").unwrap();
    let mut iter = tokens.iter().peekable();

    parse_expression(&mut iter).unwrap();
    assert_eq!(iter.next().map(|t| t.kind), Some(TokenKind::Semicolon));
}

#[test]
fn missing_closing_parenthesis_names_rpar_at_end() {
    let error = expression("(true or false").unwrap_err();

    assert_eq!(error,
               SyntaxError::Expected { expected: vec![TokenKind::RPar],
                                       location: Location::EndOfInput, });
    assert_eq!(error.to_string(), "Ожидается [RPAR] в конце файла");
}

#[test]
fn wrong_closing_token_reports_its_position() {
    let error = expression("(true or false;").unwrap_err();

    assert_eq!(error,
               SyntaxError::Expected { expected: vec![TokenKind::RPar],
                                       location: Location::Position(14), });
    assert_eq!(error.to_string(), "Ожидается [RPAR] в позиции 14");
}

#[test]
fn missing_operand_is_reported() {
    assert_eq!(expression("true and").unwrap_err(),
               SyntaxError::ExpectedOperand { location: Location::EndOfInput });
    assert_eq!(expression("or true").unwrap_err(),
               SyntaxError::ExpectedOperand { location: Location::Position(0) });
}

#[test]
fn unknown_character_carries_offset() {
    let error = tokenize("true & false").unwrap_err();

    assert_eq!(error,
               SyntaxError::UnknownCharacter { text:     "&".to_string(),
                                               position: 5, });
}

#[test]
fn assignment_statement() {
    let tokens = tokenize("flag = false;").unwrap();
    let tree = parse_assignment(&mut tokens.iter().peekable()).unwrap();

    assert_eq!(tree,
               Some(binary(BinaryOperator::Assign, variable("flag", 0), literal("false", 7), 5)));
}

#[test]
fn assignment_probe_restores_cursor() {
    let tokens = tokenize("flag and true").unwrap();
    let mut iter = tokens.iter().peekable();

    assert_eq!(parse_assignment(&mut iter).unwrap(), None);
    assert_eq!(iter.peek().map(|t| t.kind), Some(TokenKind::Id));
    assert_eq!(parse_expression(&mut iter).unwrap().to_string(), "(and flag true)");
}

#[test]
fn assignment_probe_ignores_non_identifiers() {
    let tokens = tokenize("true = false;").unwrap();
    let mut iter = tokens.iter().peekable();

    assert_eq!(parse_assignment(&mut iter).unwrap(), None);
    assert_eq!(iter.count(), 4);
}

#[test]
fn assignment_requires_terminator() {
    let tokens = tokenize("x = true").unwrap();

    assert_eq!(parse_assignment(&mut tokens.iter().peekable()).unwrap_err(),
               SyntaxError::Expected { expected: vec![TokenKind::Semicolon],
                                       location: Location::EndOfInput, });
}

#[test]
fn assignment_takes_a_single_element() {
    let tokens = tokenize("x = true or false;").unwrap();

    assert_eq!(parse_assignment(&mut tokens.iter().peekable()).unwrap_err(),
               SyntaxError::Expected { expected: vec![TokenKind::Semicolon],
                                       location: Location::Position(9), });
}

#[test]
fn not_is_postfix_and_print_is_prefix() {
    let tokens = tokenize("x not;").unwrap();
    let tree = parse_unary_statement(&mut tokens.iter().peekable()).unwrap();
    assert_eq!(tree,
               Expr::UnaryOp { op:       UnaryOperator::Not,
                               text:     "not".to_string(),
                               operand:  Box::new(variable("x", 0)),
                               position: 2, });

    let tokens = tokenize("print x;").unwrap();
    let tree = parse_unary_statement(&mut tokens.iter().peekable()).unwrap();
    assert_eq!(tree,
               Expr::UnaryOp { op:       UnaryOperator::Print,
                               text:     "print".to_string(),
                               operand:  Box::new(variable("x", 6)),
                               position: 0, });
}

#[test]
fn prefix_not_is_accepted() {
    let tokens = tokenize("not true;").unwrap();
    let tree = parse_unary_statement(&mut tokens.iter().peekable()).unwrap();

    assert_eq!(tree.to_string(), "(not true)");
}

#[test]
fn postfix_print_is_rejected() {
    let tokens = tokenize("x print;").unwrap();

    assert_eq!(parse_unary_statement(&mut tokens.iter().peekable()).unwrap_err(),
               SyntaxError::Expected { expected: vec![TokenKind::Not],
                                       location: Location::Position(2), });
}

#[test]
fn unary_statement_rejects_other_openings() {
    let tokens = tokenize("(x) not;").unwrap();

    assert_eq!(parse_unary_statement(&mut tokens.iter().peekable()).unwrap_err(),
               SyntaxError::Expected { expected: vec![TokenKind::True,
                                                      TokenKind::False,
                                                      TokenKind::Id,
                                                      TokenKind::Print,
                                                      TokenKind::Not],
                                       location: Location::Position(0), });
}

#[test]
fn statement_dispatch() {
    let tokens = tokenize("x = true; x not; print x; x or false").unwrap();
    let mut iter = tokens.iter().peekable();

    assert_eq!(parse_statement(&mut iter).unwrap().to_string(), "(= x true)");
    assert_eq!(parse_statement(&mut iter).unwrap().to_string(), "(not x)");
    assert_eq!(parse_statement(&mut iter).unwrap().to_string(), "(print x)");
    assert_eq!(parse_statement(&mut iter).unwrap().to_string(), "(or x false)");
    assert!(iter.next().is_none());
}

#[test]
fn program_collects_statements() {
    let tokens = tokenize("a = true;\n(a xor b);\nprint a;").unwrap();
    let program = parse_program(&mut tokens.iter().peekable()).unwrap();

    let rendered = program.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(rendered, ["(= a true)", "(xor a b)", "(print a)"]);
}
