//! Expression trees supplied to the evaluator
//!
//! Sapling does not parse a surface syntax; a frontend (or a test) builds
//! these trees directly. The set of forms is closed: dispatch over `Expr`
//! is statically exhaustive, so there is no "unknown expression" escape
//! hatch anywhere in the evaluator.

use num_bigint::BigInt;
use num_rational::BigRational;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Mul,
    /// Division (exact; division by zero is a reported error, not a panic)
    Div,
}

impl BinOp {
    /// The operator's source-level symbol, for messages and tracing.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

/// One expression tree node.
///
/// Expressions are externally supplied and immutable; the evaluator never
/// constructs or rewrites them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal(BigRational),

    /// A binary arithmetic operation, evaluated left to right.
    Binary {
        /// The operator to apply
        op: BinOp,
        /// Left operand, evaluated first
        left: Box<Expr>,
        /// Right operand, evaluated against the left's environment
        right: Box<Expr>,
    },

    /// Read a variable's value.
    Lookup(String),

    /// Declare a new binding, optionally with an initializer.
    ///
    /// Without an initializer the slot is created holding the unbound
    /// marker, to be filled later by exactly one `Assign`.
    Define {
        /// The name to declare
        name: String,
        /// Optional initializer expression
        init: Option<Box<Expr>>,
    },

    /// Fill a declared-but-unbound slot. Succeeds at most once per name.
    Assign {
        /// The name to materialize
        name: String,
        /// The value expression
        value: Box<Expr>,
    },

    /// Delete a binding.
    Remove(String),
}

impl Expr {
    /// Build an integer literal.
    pub fn int(n: i64) -> Self {
        Expr::Literal(BigRational::from_integer(BigInt::from(n)))
    }

    /// Build a binary operation node.
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build a variable read.
    pub fn lookup(name: impl Into<String>) -> Self {
        Expr::Lookup(name.into())
    }

    /// Build a declaration with no initializer (slot starts unbound).
    pub fn define(name: impl Into<String>) -> Self {
        Expr::Define {
            name: name.into(),
            init: None,
        }
    }

    /// Build a declaration with an initializer.
    pub fn define_with(name: impl Into<String>, init: Expr) -> Self {
        Expr::Define {
            name: name.into(),
            init: Some(Box::new(init)),
        }
    }

    /// Build an assignment.
    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assign {
            name: name.into(),
            value: Box::new(value),
        }
    }

    /// Build a removal.
    pub fn remove(name: impl Into<String>) -> Self {
        Expr::Remove(name.into())
    }

    /// A human-readable name for this expression's form (for tracing).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Literal(_) => "literal",
            Expr::Binary { .. } => "binary operation",
            Expr::Lookup(_) => "lookup",
            Expr::Define { .. } => "define",
            Expr::Assign { .. } => "assign",
            Expr::Remove(_) => "remove",
        }
    }
}
