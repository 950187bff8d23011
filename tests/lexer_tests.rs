// tests/lexer_tests.rs

use jsql::ast::CompareOp;
use jsql::lexer::{LexError, Lexer};

fn scan(clause: &str) -> Result<(String, CompareOp, String), LexError> {
    Lexer::new(clause)
        .scan_clause()
        .map(|p| (p.field, p.op, p.literal))
}

// ============================================================================
// Single-character operators
// ============================================================================

#[test]
fn test_greater_than_with_spaces() {
    assert_eq!(
        scan("age > 26").unwrap(),
        ("age".to_string(), CompareOp::GreaterThan, "26".to_string())
    );
}

#[test]
fn test_less_than_without_spaces() {
    assert_eq!(
        scan("age<30").unwrap(),
        ("age".to_string(), CompareOp::LessThan, "30".to_string())
    );
}

#[test]
fn test_equal_keeps_inner_spaces_of_literal() {
    assert_eq!(
        scan("city =  new york ").unwrap(),
        ("city".to_string(), CompareOp::Equal, "new york".to_string())
    );
}

#[test]
fn test_empty_field() {
    assert_eq!(
        scan("=5").unwrap(),
        (String::new(), CompareOp::Equal, "5".to_string())
    );
}

// ============================================================================
// Membership
// ============================================================================

#[test]
fn test_in_operator() {
    assert_eq!(
        scan("tags in (a, b)").unwrap(),
        ("tags".to_string(), CompareOp::In, "(a, b)".to_string())
    );
}

#[test]
fn test_in_takes_priority_over_symbols() {
    assert_eq!(
        scan("tags in (a>b, c=d)").unwrap(),
        ("tags".to_string(), CompareOp::In, "(a>b, c=d)".to_string())
    );
}

#[test]
fn test_in_needs_surrounding_spaces() {
    assert_eq!(scan("tags in(a)"), Err(LexError::NoOperator));
    assert_eq!(scan("tagsin (a)"), Err(LexError::NoOperator));
}

#[test]
fn test_in_inside_word_is_not_operator() {
    assert_eq!(
        scan("city = lives in town").unwrap().1,
        CompareOp::In,
        "' in ' is detected before '='"
    );
    assert_eq!(
        scan("domain=inside").unwrap(),
        ("domain".to_string(), CompareOp::Equal, "inside".to_string())
    );
}

// ============================================================================
// Malformed clauses
// ============================================================================

#[test]
fn test_no_operator() {
    assert_eq!(scan("just words"), Err(LexError::NoOperator));
    assert_eq!(scan(""), Err(LexError::NoOperator));
}

#[test]
fn test_compound_operator_is_ambiguous() {
    assert_eq!(
        scan("age >= 30"),
        Err(LexError::Ambiguous {
            op: CompareOp::GreaterThan,
            parts: 3
        })
    );
}

#[test]
fn test_repeated_equal_is_ambiguous() {
    assert_eq!(
        scan("a=b=c"),
        Err(LexError::Ambiguous {
            op: CompareOp::Equal,
            parts: 3
        })
    );
}

#[test]
fn test_mixed_symbols_report_first() {
    assert_eq!(
        scan("a < b = c"),
        Err(LexError::Ambiguous {
            op: CompareOp::LessThan,
            parts: 3
        })
    );
}

#[test]
fn test_repeated_in_is_ambiguous() {
    assert_eq!(
        scan("a in b in c"),
        Err(LexError::Ambiguous {
            op: CompareOp::In,
            parts: 3
        })
    );
}

// ============================================================================
// Operator text
// ============================================================================

#[test]
fn test_symbol_matches_scanned_text() {
    for (c, op) in CompareOp::SYMBOLS {
        assert_eq!(op.symbol(), c.to_string());
        assert_eq!(op.to_string(), c.to_string());
    }
    assert_eq!(CompareOp::In.symbol(), " in ");
}
