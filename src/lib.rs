pub mod ast;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod executor;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod recommend;
pub mod sampling;
pub mod value;

pub use ast::{CompareOp, Connective, Predicate, Query};
pub use error::{Error, Result};
pub use evaluator::{Evaluator, combine, evaluate};
pub use executor::{QueryResult, execute, execute_json};
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use recommend::{recommend, recommend_json};
pub use value::{Record, Value, decode_dataset};
