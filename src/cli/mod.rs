//! CLI support for jsql
//!
//! Provides programmatic access to the jsql command-line operations so they
//! can be embedded in other tools.

mod check;
mod docs;
mod recommend;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use recommend::{RecommendOptions, execute_recommend};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Use --input, --file, or pipe JSON to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'jsql docs' to see available categories.")]
    UnknownCategory(String),
}

impl From<crate::Error> for CliError {
    fn from(e: crate::Error) -> Self {
        match e {
            crate::Error::Parse(e) => CliError::Parse(e),
            crate::Error::Decode(e) => CliError::Json(e),
        }
    }
}
