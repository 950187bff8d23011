use crate::ast::CompareOp;

/// One clause split into its three parts.
///
/// Produced by [`crate::lexer::Lexer::scan_clause`]; the literal is kept as
/// text and typed at evaluation time.
///
/// # Example
/// ```text
/// age > 26        // Predicate { field: "age", op: GreaterThan, literal: "26" }
/// tags in (a, b)  // Predicate { field: "tags", op: In, literal: "(a, b)" }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Field name, trimmed
    pub field: String,

    /// Detected operator
    pub op: CompareOp,

    /// Literal text after the operator, trimmed
    pub literal: String,
}
