use std::fmt;

/// Boolean connective joining two adjacent clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,
}

impl Connective {
    /// Parse a connective keyword. Input is expected already case-folded.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "and" => Some(Connective::And),
            "or" => Some(Connective::Or),
            _ => None,
        }
    }

    /// Combine a running result with the next clause result.
    pub fn apply(self, left: bool, right: bool) -> bool {
        match self {
            Connective::And => left && right,
            Connective::Or => left || right,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => f.write_str("and"),
            Connective::Or => f.write_str("or"),
        }
    }
}

/// Comparison operators, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Membership (`in`)
    In,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than (`<`)
    LessThan,
    /// Equal (`=`)
    Equal,
}

impl CompareOp {
    /// Single-character operators, checked after `in`.
    pub const SYMBOLS: [(char, CompareOp); 3] = [
        ('>', CompareOp::GreaterThan),
        ('<', CompareOp::LessThan),
        ('=', CompareOp::Equal),
    ];

    /// Text of the operator as it appears in a clause.
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::In => " in ",
            CompareOp::GreaterThan => ">",
            CompareOp::LessThan => "<",
            CompareOp::Equal => "=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
