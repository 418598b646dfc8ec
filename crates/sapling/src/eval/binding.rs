//! Binding operations: define, assign, remove
//!
//! Together these implement the write-once discipline: `define` creates a
//! slot (unbound, or bound when an initializer is given), `assign` fills an
//! unbound slot exactly once, and nothing ever overwrites a bound value.
//! Accidental rebinding is a hard error, never a silent overwrite.
//!
//! None of these operations validate identifier syntax; any token the
//! environment will store is accepted here and only rejected on lookup.

use crate::ast::Expr;
use crate::environment::Environment;
use crate::error::EvalError;
use crate::outcome::Outcome;
use crate::value::Value;

use super::Evaluate;

/// Evaluate a declaration.
///
/// Redefinition of a present name, bound or unbound, is always rejected
/// before the initializer runs. Without an initializer the new slot holds
/// the unbound marker and the result value is the acknowledgment; with one,
/// the computed value is bound in the post-initializer environment and also
/// returned.
pub fn eval_define(name: &str, init: Option<&Expr>, env: Environment) -> Outcome {
    if env.contains(name) {
        return Outcome::Err(
            EvalError::AlreadyDefined {
                name: name.to_string(),
            },
            env,
        );
    }

    match init {
        None => {
            let env = env.extend(name, Value::Unbound);
            Outcome::Ok(Value::Done, env)
        }
        Some(init) => match init.eval(env) {
            Outcome::Ok(value, env) => {
                let env = env.extend(name, value.clone());
                Outcome::Ok(value, env)
            }
            err @ Outcome::Err(..) => err,
        },
    }
}

/// Evaluate an assignment.
///
/// Assignment is a one-time materialization of a declared-but-unbound slot,
/// not a general mutation: a missing slot and an already-filled slot are
/// both errors, checked before the value expression runs. The rewrite is
/// applied to the post-expression environment, so effects of the value
/// expression are retained.
pub fn eval_assign(name: &str, value: &Expr, env: Environment) -> Outcome {
    match env.get(name).map(Value::is_unbound) {
        None => {
            return Outcome::Err(
                EvalError::AssignTargetMissing {
                    name: name.to_string(),
                },
                env,
            );
        }
        Some(false) => {
            return Outcome::Err(
                EvalError::AlreadyAssigned {
                    name: name.to_string(),
                },
                env,
            );
        }
        Some(true) => {}
    }

    match value.eval(env) {
        Outcome::Ok(value, env) => {
            let env = env.update(name, value.clone());
            Outcome::Ok(value, env)
        }
        err @ Outcome::Err(..) => err,
    }
}

/// Evaluate a removal.
///
/// Removing an absent name reports an error without touching the
/// environment; removing a present one deletes the binding whether or not
/// it was ever assigned.
pub fn eval_remove(name: &str, env: Environment) -> Outcome {
    if !env.contains(name) {
        return Outcome::Err(
            EvalError::RemoveTargetMissing {
                name: name.to_string(),
            },
            env,
        );
    }

    let env = env.remove(name);
    Outcome::Ok(Value::Done, env)
}
