//! Execute jsql queries against JSON input

use super::CliError;
use crate::{Query, QueryResult, execute_json};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query to execute
    pub query: String,
    /// JSON input string
    pub input: Option<String>,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid(Query),
    /// Query executed successfully
    Success(QueryResult),
}

/// Execute a jsql check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = Query::parse(&options.query)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid(query));
    }

    let json = options.input.as_deref().ok_or(CliError::NoInput)?;
    Ok(CheckResult::Success(execute_json(&query, json)?))
}
