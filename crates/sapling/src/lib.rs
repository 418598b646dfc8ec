//! # Sapling
//!
//! A small tree-walking evaluator for a minimal expression language with
//! write-once variable bindings and an exception-free result algebra.
//!
//! Expressions arrive as pre-built [`Expr`] trees (there is no surface
//! syntax). Evaluation is a single recursive walk that threads a
//! persistent [`Environment`] through every step: each binding operation
//! derives a *new* environment and leaves the old one intact, so a driver
//! can keep any number of past environments for rollback or display.
//!
//! ## Binding discipline
//!
//! - `define x` declares a slot holding the unbound marker
//! - `define x = e` declares and binds in one step
//! - `assign x e` fills an unbound slot, exactly once per name
//! - `remove x` deletes a binding
//!
//! Redefinition and reassignment are hard errors, never silent overwrites.
//!
//! ## Example
//!
//! ```
//! use sapling::{eval_expr, Environment, Expr, Outcome, Value};
//!
//! let env = Environment::new();
//!
//! let outcome = eval_expr(&Expr::define_with("x", Expr::int(41)), env);
//! let Outcome::Ok(_, env) = outcome else { panic!("define failed") };
//!
//! let sum = Expr::binary(sapling::BinOp::Add, Expr::lookup("x"), Expr::int(1));
//! assert_eq!(
//!     eval_expr(&sum, env.clone()),
//!     Outcome::Ok(Value::int(42), env),
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod environment;
pub mod error;
pub mod eval;
pub mod ident;
pub mod outcome;
pub mod value;

// Re-export main types
pub use ast::{BinOp, Expr};
pub use environment::Environment;
pub use error::EvalError;
pub use eval::{eval_expr, Evaluate};
pub use ident::is_valid_identifier;
pub use outcome::Outcome;
pub use value::Value;

/// Sapling version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
