//! Error types for Sapling evaluation

use thiserror::Error;

/// Everything that can go wrong during one evaluation step.
///
/// Errors are plain values carried inside an `Outcome::Err`; evaluation
/// never panics and one failed step never corrupts prior bindings. The
/// three lookup failures (invalid / not defined / undefined) are distinct
/// variants with distinct display text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Lookup of a syntactically malformed identifier
    #[error("invalid identifier: {name}")]
    InvalidIdentifier {
        /// The rejected token
        name: String,
    },

    /// Lookup of a name with no binding at all
    #[error("not defined: {name}")]
    NotDefined {
        /// The missing name
        name: String,
    },

    /// Lookup of a name that was declared but never assigned
    #[error("undefined: {name}")]
    Undefined {
        /// The unbound name
        name: String,
    },

    /// Define of a name that already has a binding, bound or unbound
    #[error("already defined: {name}")]
    AlreadyDefined {
        /// The conflicting name
        name: String,
    },

    /// Assign to a name with no binding
    #[error("id not defined: {name}")]
    AssignTargetMissing {
        /// The missing name
        name: String,
    },

    /// Assign to a slot that was already materialized once
    #[error("already has value: {name}")]
    AlreadyAssigned {
        /// The already-bound name
        name: String,
    },

    /// Remove of a name with no binding
    #[error("identifier not defined, ignoring: {name}")]
    RemoveTargetMissing {
        /// The missing name
        name: String,
    },

    /// Right operand of a division was exactly zero
    #[error("division by zero")]
    DivisionByZero,

    /// A non-numeric value reached an arithmetic operator
    #[error("operand of `{op}` is not a number")]
    NonNumericOperand {
        /// The operator's symbol
        op: &'static str,
    },
}
