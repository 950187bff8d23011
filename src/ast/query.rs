use std::{fmt, str::FromStr};

use crate::{ast::Connective, parser::{ParseError, Parser}};

/// A parsed query.
///
/// Immutable once built. `connectives[i]` joins `clauses[i]` and
/// `clauses[i + 1]`, so `connectives.len() == clauses.len().saturating_sub(1)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Requested field names, in request order. Empty when `select_all` is set.
    pub fields: Vec<String>,

    /// `select *`: fields come from the first record at execution time
    pub select_all: bool,

    /// Raw clause text, one entry per predicate
    pub clauses: Vec<String>,

    /// Connectives between adjacent clauses
    pub connectives: Vec<Connective>,
}

impl Query {
    /// Parse query text. Shorthand for [`Parser::parse`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Parser::new(text).parse()
    }

    /// True when the query has no `where` part and accepts every record.
    pub fn is_unfiltered(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Query::parse(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.select_all {
            f.write_str("select *")?;
        } else {
            write!(f, "select {}", self.fields.join(", "))?;
        }

        if let Some((first, rest)) = self.clauses.split_first() {
            write!(f, " where {}", first)?;
            for (connective, clause) in self.connectives.iter().zip(rest) {
                write!(f, " {} {}", connective, clause)?;
            }
        }
        Ok(())
    }
}
