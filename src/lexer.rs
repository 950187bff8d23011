//! Clause scanner.
//!
//! Splits one clause such as `age > 26` into field, operator and literal.
//! The ` in ` token is looked for first; only when it is absent are the
//! single-character operators `>`, `<`, `=` considered. Either way the
//! winning operator must occur exactly once in the clause.

use thiserror::Error;

use crate::ast::{CompareOp, Predicate};

/// Why a clause could not be split. Callers treat every variant as "no match".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("no operator in clause")]
    NoOperator,

    #[error("operator '{op}' splits clause into {parts} parts")]
    Ambiguous { op: CompareOp, parts: usize },
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn at_in_keyword(&self) -> bool {
        self.current_char() == Some(' ')
            && self.peek_char(1) == Some('i')
            && self.peek_char(2) == Some('n')
            && self.peek_char(3) == Some(' ')
    }

    /// Start offsets of every non-overlapping ` in ` token.
    fn find_in_keywords(&mut self) -> Vec<usize> {
        self.position = 0;
        let mut found = Vec::new();
        while self.current_char().is_some() {
            if self.at_in_keyword() {
                found.push(self.position);
                self.position += CompareOp::In.symbol().len();
            } else {
                self.advance();
            }
        }
        found
    }

    /// Offsets of every operator symbol, paired with the first symbol seen.
    fn find_symbols(&mut self) -> (Option<CompareOp>, Vec<usize>) {
        self.position = 0;
        let mut first = None;
        let mut found = Vec::new();
        while let Some(ch) = self.current_char() {
            if let Some((_, op)) = CompareOp::SYMBOLS.iter().find(|(sym, _)| *sym == ch) {
                first.get_or_insert(*op);
                found.push(self.position);
            }
            self.advance();
        }
        (first, found)
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.input[start..end].iter().collect::<String>().trim().to_string()
    }

    /// Split the clause into a [`Predicate`].
    ///
    /// ```
    /// use jsql::ast::CompareOp;
    /// use jsql::lexer::Lexer;
    ///
    /// let p = Lexer::new("age > 26").scan_clause().unwrap();
    /// assert_eq!(p.field, "age");
    /// assert_eq!(p.op, CompareOp::GreaterThan);
    /// assert_eq!(p.literal, "26");
    /// ```
    pub fn scan_clause(&mut self) -> Result<Predicate, LexError> {
        let keywords = self.find_in_keywords();
        if !keywords.is_empty() {
            if keywords.len() != 1 {
                return Err(LexError::Ambiguous {
                    op: CompareOp::In,
                    parts: keywords.len() + 1,
                });
            }
            let at = keywords[0];
            return Ok(Predicate {
                field: self.slice(0, at),
                op: CompareOp::In,
                literal: self.slice(at + CompareOp::In.symbol().len(), self.input.len()),
            });
        }

        match self.find_symbols() {
            (None, _) => Err(LexError::NoOperator),
            (Some(op), positions) if positions.len() == 1 => {
                let at = positions[0];
                Ok(Predicate {
                    field: self.slice(0, at),
                    op,
                    literal: self.slice(at + 1, self.input.len()),
                })
            }
            (Some(op), positions) => Err(LexError::Ambiguous {
                op,
                parts: positions.len() + 1,
            }),
        }
    }
}
