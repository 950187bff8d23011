//! # Query Representation
//!
//! Types produced by the parser and consumed by the evaluator.
//!
//! - **[query]** - A parsed query: projection list plus clauses and connectives
//! - **[operators]** - Connectives (`and`/`or`) and comparison operators
//! - **[predicate]** - A single clause split into field, operator and literal
//!
//! ## Grammar
//!
//! ```text
//! select <field>[, <field>...] | * [where <clause> ((and|or) <clause>)...]
//! ```
//!
//! A clause is `<field><op><literal>` where `<op>` is one of ` in `, `>`,
//! `<`, `=`. There is no grouping and no precedence: clauses are combined
//! strictly left to right, so `a and b or c` means `(a and b) or c`.
pub mod operators;
pub mod predicate;
pub mod query;

pub use operators::{CompareOp, Connective};
pub use predicate::Predicate;
pub use query::Query;
