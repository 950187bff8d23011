use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::ast::{Connective, Query};

/// Splits a `where` tail into clauses; the same matches yield the connectives.
static CONNECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+(and|or)\s+").expect("connective pattern is valid")
});

const SELECT_PREFIX: &str = "select ";
const WHERE_DELIMITER: &str = " where ";

/// Structural problems with query text.
///
/// Anything that gets past these checks parses; clause-level problems are
/// left to evaluation, where they simply fail to match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("query must start with 'select'")]
    MissingSelect,

    #[error("no fields between 'select' and 'where'")]
    EmptyFieldList,

    #[error("query contains more than one 'where'")]
    MultipleWhere,

    #[error("'where' is not followed by any condition")]
    EmptyWhere,
}

pub struct Parser {
    text: String,
}

impl Parser {
    /// Prepare query text for parsing. The whole text is case-folded here.
    pub fn new(text: &str) -> Self {
        Parser {
            text: text.trim().to_lowercase(),
        }
    }

    /// Parse the query.
    ///
    /// ```
    /// use jsql::ast::Connective;
    /// use jsql::parser::Parser;
    ///
    /// let query = Parser::new("SELECT name, age WHERE age > 26 OR name=John").parse().unwrap();
    /// assert_eq!(query.fields, vec!["name", "age"]);
    /// assert_eq!(query.clauses, vec!["age > 26", "name=john"]);
    /// assert_eq!(query.connectives, vec![Connective::Or]);
    /// ```
    pub fn parse(&self) -> Result<Query, ParseError> {
        let mut parts = self.text.split(WHERE_DELIMITER);
        let head = parts.next().unwrap_or_default();
        let tail = parts.next();
        if parts.next().is_some() {
            return Err(ParseError::MultipleWhere);
        }

        let mut query = self.parse_projection(head)?;

        if let Some(tail) = tail {
            let (clauses, connectives) = self.parse_conditions(tail)?;
            query.clauses = clauses;
            query.connectives = connectives;
        }

        debug!(
            fields = ?query.fields,
            select_all = query.select_all,
            clauses = query.clauses.len(),
            "parsed query"
        );
        Ok(query)
    }

    fn parse_projection(&self, head: &str) -> Result<Query, ParseError> {
        if head == SELECT_PREFIX.trim_end() {
            return Err(ParseError::EmptyFieldList);
        }

        let fields = head
            .strip_prefix(SELECT_PREFIX)
            .ok_or(ParseError::MissingSelect)?
            .trim();

        // "select x where" with nothing after the keyword never reaches the delimiter
        if fields == "where" || fields.ends_with(" where") {
            return Err(ParseError::EmptyWhere);
        }

        if fields == "*" {
            return Ok(Query {
                select_all: true,
                ..Query::default()
            });
        }

        let fields: Vec<String> = fields
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        if fields.is_empty() {
            return Err(ParseError::EmptyFieldList);
        }

        Ok(Query {
            fields,
            ..Query::default()
        })
    }

    fn parse_conditions(&self, tail: &str) -> Result<(Vec<String>, Vec<Connective>), ParseError> {
        let tail = tail.trim();
        if tail.is_empty() {
            return Err(ParseError::EmptyWhere);
        }

        let clauses = CONNECTIVE
            .split(tail)
            .map(|clause| clause.trim().to_string())
            .collect();

        let connectives = CONNECTIVE
            .captures_iter(tail)
            .filter_map(|caps| Connective::from_keyword(&caps[1]))
            .collect();

        Ok((clauses, connectives))
    }
}
