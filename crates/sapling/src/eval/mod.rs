//! Expression evaluation
//!
//! The dispatcher is the crate's sole entry point. It threads a persistent
//! [`Environment`] through every sub-evaluation: each step consumes the
//! environment it was given and hands back (inside the [`Outcome`]) the
//! environment the next step should see. The first failing sub-expression
//! short-circuits the enclosing expression.

pub mod binary;
pub mod binding;
pub mod lookup;

use tracing::trace;

use crate::ast::Expr;
use crate::environment::Environment;
use crate::outcome::Outcome;
use crate::value::Value;

/// Trait for evaluating expression tree nodes.
///
/// The environment is taken by value and returned inside the outcome;
/// previously held environments are never mutated.
pub trait Evaluate {
    /// Evaluate this node against the given environment.
    fn eval(&self, env: Environment) -> Outcome;
}

impl Evaluate for Expr {
    fn eval(&self, env: Environment) -> Outcome {
        trace!(kind = self.kind_name(), "eval");

        match self {
            Expr::Literal(n) => Outcome::Ok(Value::Number(n.clone()), env),
            Expr::Binary { op, left, right } => binary::eval_binary(*op, left, right, env),
            Expr::Lookup(name) => lookup::eval_lookup(name, env),
            Expr::Define { name, init } => binding::eval_define(name, init.as_deref(), env),
            Expr::Assign { name, value } => binding::eval_assign(name, value, env),
            Expr::Remove(name) => binding::eval_remove(name, env),
        }
    }
}

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(expr: &Expr, env: Environment) -> Outcome {
    expr.eval(env)
}
