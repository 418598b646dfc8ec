//! Lookup evaluation (variable read)

use crate::environment::Environment;
use crate::error::EvalError;
use crate::ident::is_valid_identifier;
use crate::outcome::Outcome;
use crate::value::Value;

/// Evaluate a variable read.
///
/// Three distinct failures, in checking order: a malformed token, a name
/// with no binding, and a name whose slot was declared but never assigned.
/// The environment is never changed by a lookup.
pub fn eval_lookup(name: &str, env: Environment) -> Outcome {
    if !is_valid_identifier(name) {
        return Outcome::Err(
            EvalError::InvalidIdentifier {
                name: name.to_string(),
            },
            env,
        );
    }

    let found = env.get(name).cloned();
    match found {
        None => Outcome::Err(
            EvalError::NotDefined {
                name: name.to_string(),
            },
            env,
        ),
        Some(Value::Unbound) => Outcome::Err(
            EvalError::Undefined {
                name: name.to_string(),
            },
            env,
        ),
        Some(value) => Outcome::Ok(value, env),
    }
}
