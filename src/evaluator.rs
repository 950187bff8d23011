use tracing::{debug, trace};

use crate::{
    ast::{CompareOp, Connective, Predicate, Query},
    lexer::Lexer,
    value::{Record, Value},
};

/// Evaluate one raw clause against a record.
///
/// Never fails: a clause that does not split cleanly, a missing field, or a
/// type mismatch between literal and field all yield `false`.
///
/// ```
/// use jsql::{evaluate, Record, Value};
///
/// let mut record = Record::new();
/// record.insert("age".to_string(), Value::Number(30.0));
///
/// assert!(evaluate(&record, "age > 26"));
/// assert!(!evaluate(&record, "age > 30"));
/// assert!(!evaluate(&record, "height > 1"));
/// ```
pub fn evaluate(record: &Record, clause: &str) -> bool {
    match Lexer::new(clause).scan_clause() {
        Ok(predicate) => predicate.matches(record),
        Err(e) => {
            trace!(clause, error = %e, "clause does not split");
            false
        }
    }
}

/// Fold per-clause results strictly left to right.
///
/// `connectives[i - 1]` joins the running result with `results[i]`. No
/// precedence: `a and b or c` is `(a and b) or c`. An empty result list is
/// `true`.
pub fn combine<I>(results: I, connectives: &[Connective]) -> bool
where
    I: IntoIterator<Item = bool>,
{
    let mut results = results.into_iter();
    let Some(first) = results.next() else {
        return true;
    };
    connectives
        .iter()
        .zip(results)
        .fold(first, |acc, (connective, next)| connective.apply(acc, next))
}

impl Predicate {
    /// Test this predicate against a record.
    pub fn matches(&self, record: &Record) -> bool {
        let Some(value) = record.get(&self.field) else {
            return false;
        };

        match self.op {
            CompareOp::In => matches_membership(value, &self.literal),
            op => match self.literal.parse::<f64>() {
                Ok(literal) => matches_number(op, value, literal),
                Err(_) => matches_string(op, value, &self.literal),
            },
        }
    }
}

fn matches_number(op: CompareOp, value: &Value, literal: f64) -> bool {
    let Some(n) = value.as_number() else {
        return false;
    };
    match op {
        CompareOp::GreaterThan => n > literal,
        CompareOp::LessThan => n < literal,
        // exact comparison, no tolerance
        CompareOp::Equal => n == literal,
        CompareOp::In => false,
    }
}

/// Only `=` is defined for strings, compared case-insensitively.
fn matches_string(op: CompareOp, value: &Value, literal: &str) -> bool {
    match (op, value) {
        (CompareOp::Equal, Value::String(s)) => s.to_lowercase() == literal.to_lowercase(),
        _ => false,
    }
}

fn matches_membership(value: &Value, literal: &str) -> bool {
    let Some(items) = value.as_list() else {
        return false;
    };
    let tokens = membership_tokens(literal);
    items
        .iter()
        .map(Value::render)
        .any(|rendered| tokens.iter().any(|t| *t == rendered))
}

/// `(a, 'b', c)` becomes `["a", "b", "c"]`.
fn membership_tokens(literal: &str) -> Vec<&str> {
    let inner = literal.trim();
    let inner = inner.strip_prefix('(').unwrap_or(inner);
    let inner = inner.strip_suffix(')').unwrap_or(inner);
    inner
        .split(',')
        .map(|t| t.trim().trim_matches('\''))
        .collect()
}

/// A query's clauses compiled once, ready to test many records.
///
/// A clause that cannot be split compiles to `None` and rejects every record.
#[derive(Debug, Clone)]
pub struct Evaluator {
    predicates: Vec<Option<Predicate>>,
    connectives: Vec<Connective>,
}

impl Evaluator {
    pub fn new(query: &Query) -> Self {
        let predicates = query
            .clauses
            .iter()
            .map(|clause| match Lexer::new(clause).scan_clause() {
                Ok(predicate) => Some(predicate),
                Err(e) => {
                    debug!(clause = %clause, error = %e, "clause never matches");
                    None
                }
            })
            .collect();

        Evaluator {
            predicates,
            connectives: query.connectives.clone(),
        }
    }

    /// Decide whether a record passes every clause, combined left to right.
    pub fn accepts(&self, record: &Record) -> bool {
        let results = self.predicates.iter().map(|predicate| {
            let result = predicate.as_ref().is_some_and(|p| p.matches(record));
            trace!(?predicate, result, "clause evaluated");
            result
        });
        combine(results, &self.connectives)
    }
}
