//! Binary operation evaluation

use num_rational::BigRational;
use num_traits::Zero;

use crate::ast::{BinOp, Expr};
use crate::environment::Environment;
use crate::error::EvalError;
use crate::outcome::Outcome;
use crate::value::Value;

use super::Evaluate;

/// Evaluate a binary arithmetic expression.
///
/// Operands are evaluated left to right with environment threading: the
/// right operand sees whatever bindings the left operand's evaluation
/// produced. A failing operand propagates verbatim, so no partial
/// arithmetic result is ever produced.
pub fn eval_binary(op: BinOp, left: &Expr, right: &Expr, env: Environment) -> Outcome {
    let (lhs, env) = match left.eval(env) {
        Outcome::Ok(value, env) => (value, env),
        err @ Outcome::Err(..) => return err,
    };

    let (rhs, env) = match right.eval(env) {
        Outcome::Ok(value, env) => (value, env),
        err @ Outcome::Err(..) => return err,
    };

    let (Some(a), Some(b)) = (lhs.as_number(), rhs.as_number()) else {
        return Outcome::Err(EvalError::NonNumericOperand { op: op.symbol() }, env);
    };

    match apply(op, a, b) {
        Ok(n) => Outcome::Ok(Value::Number(n), env),
        Err(error) => Outcome::Err(error, env),
    }
}

/// Apply an operator to two numbers.
///
/// Arithmetic is exact rational arithmetic; division is total except for a
/// zero right operand, reported as an error rather than raised.
fn apply(op: BinOp, a: &BigRational, b: &BigRational) -> Result<BigRational, EvalError> {
    match op {
        BinOp::Add => Ok(a + b),
        BinOp::Sub => Ok(a - b),
        BinOp::Mul => Ok(a * b),
        BinOp::Div => {
            if b.is_zero() {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
    }
}
