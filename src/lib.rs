
//! Integer infix expression evaluation with calculator-style equals
//! chaining.
//!
//! [`expr::parse`] turns an infix string into a
//! [`ParsedExpression`](expr::ParsedExpression), which can render its
//! postfix form and evaluate to an `i64`. [`chain::split_chain`]
//! splits a running expression containing `=` commit markers into
//! its intermediate expressions and values. [`Calculator`] is a
//! re-settable convenience wrapper for UI-style callers.

pub mod calculator;
pub mod chain;
pub mod error;
pub mod eval;
pub mod expr;
pub mod parsing;

pub use calculator::Calculator;
pub use chain::{split_chain, split_chain_with, CalcStep};
pub use error::CalcError;
pub use expr::{parse, ParsedExpression};
