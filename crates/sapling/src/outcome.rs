//! Two-variant result algebra for evaluation steps
//!
//! Every evaluation step produces exactly one [`Outcome`]. Unlike a plain
//! `Result`, *both* variants carry an environment: success carries the
//! environment after the step's effects, failure carries the environment
//! as of the point of failure (effects of earlier sub-evaluations in the
//! same expression are retained, the failed step itself applies none).
//! There is no implicit coercion between the variants; the evaluator
//! always pattern-matches.

use crate::environment::Environment;
use crate::error::EvalError;
use crate::value::Value;

/// The result of one evaluation step.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome {
    /// Evaluation succeeded, producing a value and the environment to
    /// thread into the next step.
    Ok(Value, Environment),

    /// Evaluation failed, with the environment in effect at the failure.
    Err(EvalError, Environment),
}

impl Outcome {
    /// Whether this outcome is `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(..))
    }

    /// Whether this outcome is `Err`.
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(..))
    }

    /// The environment carried by either variant.
    pub fn env(&self) -> &Environment {
        match self {
            Outcome::Ok(_, env) | Outcome::Err(_, env) => env,
        }
    }

    /// Consume the outcome, keeping only its environment.
    pub fn into_env(self) -> Environment {
        match self {
            Outcome::Ok(_, env) | Outcome::Err(_, env) => env,
        }
    }

    /// The error, if this outcome is `Err`.
    pub fn err(&self) -> Option<&EvalError> {
        match self {
            Outcome::Err(error, _) => Some(error),
            Outcome::Ok(..) => None,
        }
    }

    /// Extract the success value, or a caller-supplied default.
    ///
    /// For inspection and test code; the evaluator's own control flow
    /// always matches explicitly.
    pub fn value_or(self, default: Value) -> Value {
        match self {
            Outcome::Ok(value, _) => value,
            Outcome::Err(..) => default,
        }
    }

    /// Extract the error, or a caller-supplied default. Inspection only.
    pub fn err_or(self, default: EvalError) -> EvalError {
        match self {
            Outcome::Err(error, _) => error,
            Outcome::Ok(..) => default,
        }
    }
}
