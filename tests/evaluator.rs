use std::io::Empty;

use boolex::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::evaluator::core::{Context, NotSemantics},
};
use pretty_assertions::assert_eq;

fn context() -> Context<Empty, Vec<u8>> {
    Context::with_io(std::io::empty(), Vec::new())
}

fn output_of<R>(context: &Context<R, Vec<u8>>) -> String
    where R: std::io::BufRead
{
    String::from_utf8(context.output().clone()).expect("output is UTF-8")
}

fn literal(value: bool) -> Expr {
    Expr::BooleanLiteral { text:     value.to_string(),
                           position: 0, }
}

fn variable(name: &str) -> Expr {
    Expr::Variable { name:     name.to_string(),
                     position: 0, }
}

fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp { op,
                     left: Box::new(left),
                     right: Box::new(right),
                     position: 0 }
}

fn unary(op: UnaryOperator, operand: Expr) -> Expr {
    Expr::UnaryOp { op,
                    text: op.to_string(),
                    operand: Box::new(operand),
                    position: 0 }
}

#[test]
fn literals_evaluate_to_themselves() {
    let mut context = context();

    for value in [true, false] {
        assert_eq!(context.eval(&literal(value)), Ok(value));
    }
    for text in ["TRUE", "True", "fAlSe"] {
        let node = Expr::BooleanLiteral { text:     text.to_string(),
                                          position: 0, };
        assert_eq!(context.eval(&node), Ok(text.eq_ignore_ascii_case("true")));
    }
}

#[test]
fn invalid_literal_text_is_an_error() {
    let node = Expr::BooleanLiteral { text:     "maybe".to_string(),
                                      position: 3, };

    assert_eq!(context().eval(&node),
               Err(EvalError::InvalidBoolean { text:     "maybe".to_string(),
                                               position: 3, }));
}

#[test]
fn logical_operators() {
    let mut context = context();
    let eval = |context: &mut Context<Empty, Vec<u8>>, op, l, r| {
        context.eval(&binary(op, literal(l), literal(r)))
    };

    assert_eq!(eval(&mut context, BinaryOperator::And, true, true), Ok(true));
    assert_eq!(eval(&mut context, BinaryOperator::And, true, false), Ok(false));
    assert_eq!(eval(&mut context, BinaryOperator::Or, false, false), Ok(false));
    assert_eq!(eval(&mut context, BinaryOperator::Or, true, false), Ok(true));
    assert_eq!(eval(&mut context, BinaryOperator::Xor, true, true), Ok(false));
    assert_eq!(eval(&mut context, BinaryOperator::Xor, false, true), Ok(true));
}

#[test]
fn both_operands_are_evaluated_left_first() {
    let mut context = context();
    let tree = binary(BinaryOperator::Or,
                      unary(UnaryOperator::Print, literal(true)),
                      unary(UnaryOperator::Print, literal(false)));

    assert_eq!(context.eval(&tree), Ok(false));
    assert_eq!(output_of(&context), "true\nfalse\n");
}

#[test]
fn assignment_is_remembered_without_prompting() {
    let mut context = context();

    assert_eq!(context.eval(&binary(BinaryOperator::Assign, variable("x"), literal(true))),
               Ok(true));
    assert_eq!(context.eval(&variable("x")), Ok(true));
    assert!(output_of(&context).is_empty());
}

#[test]
fn assignment_to_non_variable_is_an_error() {
    let tree = Expr::BinaryOp { op:       BinaryOperator::Assign,
                                left:     Box::new(literal(true)),
                                right:    Box::new(literal(false)),
                                position: 7, };

    assert_eq!(context().eval(&tree), Err(EvalError::UnknownExpression { position: 7 }));
}

#[test]
fn print_always_yields_false() {
    for value in [true, false] {
        let mut context = context();

        assert_eq!(context.eval(&unary(UnaryOperator::Print, literal(value))), Ok(false));
        assert_eq!(output_of(&context), format!("{value}\n"));
    }
}

#[test]
fn not_negates_its_own_text_by_default() {
    let mut context = context();

    assert_eq!(context.not_semantics, NotSemantics::OperatorText);
    assert_eq!(context.eval(&unary(UnaryOperator::Not, literal(true))), Ok(true));
    assert_eq!(context.eval(&unary(UnaryOperator::Not, literal(false))), Ok(true));

    // The operand is never looked at, so no prompt happens.
    assert_eq!(context.eval(&unary(UnaryOperator::Not, variable("unknown"))), Ok(true));
    assert!(output_of(&context).is_empty());
}

#[test]
fn not_can_negate_its_operand() {
    let mut context = context();
    context.not_semantics = NotSemantics::NegateOperand;

    assert_eq!(context.eval(&unary(UnaryOperator::Not, literal(true))), Ok(false));
    assert_eq!(context.eval(&unary(UnaryOperator::Not, literal(false))), Ok(true));
}

#[test]
fn unknown_variable_is_read_stored_and_returned() {
    let mut context = Context::with_io("True\nfalse\n".as_bytes(), Vec::new());

    assert_eq!(context.eval(&variable("a")), Ok(true));
    assert_eq!(context.eval(&variable("a")), Ok(true));
    assert_eq!(context.eval(&variable("b")), Ok(false));

    assert_eq!(context.variables.get("a"), Some(&true));
    assert_eq!(context.variables.get("b"), Some(&false));
    assert_eq!(output_of(&context), "Введите значение a:\nВведите значение b:\n");
}

#[test]
fn closed_input_keeps_earlier_side_effects() {
    let mut context = context();
    let tree = binary(BinaryOperator::And,
                      binary(BinaryOperator::Assign, variable("x"), literal(true)),
                      variable("y"));

    assert_eq!(context.eval(&tree), Err(EvalError::InputClosed { name: "y".to_string() }));
    assert_eq!(context.variables.get("x"), Some(&true));
    assert_eq!(context.variables.get("y"), None);
}

#[test]
fn program_yields_last_value() {
    let mut context = context();
    let program = [binary(BinaryOperator::Assign, variable("x"), literal(false)),
                   binary(BinaryOperator::Or, variable("x"), literal(true))];

    assert_eq!(context.eval_program(&program), Ok(Some(true)));
    assert_eq!(context.eval_program(&[]), Ok(None));
}
