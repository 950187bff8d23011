//! Documentation content for jsql CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Types,
    Recommend,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "types" | "type" => Some(Self::Types),
            "recommend" | "recommendations" => Some(Self::Recommend),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"JSQL DOCUMENTATION

jsql filters and projects a JSON array of objects with a small SQL-like
query language. Queries select fields and optionally filter records with
clauses joined by 'and' / 'or'.

DOCUMENTATION CATEGORIES

  syntax            Query structure, field lists, select *
  operators         Comparison operators, membership, and connectives
  types             How numbers, strings, and lists are compared
  recommend         Generating example queries from a dataset

QUICK REFERENCE

  select name, age                   Project two fields from every record
  select * where age > 26            All fields of matching records
  select name where city=chicago     Case-insensitive string equality
  select id where tags in (a, b)     List membership
  select name where a=1 and b=2 or c=3
                                     Evaluated as (a=1 and b=2) or c=3

Run 'jsql doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Types) => Ok(TYPES_DOC),
        Some(DocCategory::Recommend) => Ok(RECOMMEND_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX

QUERY SHAPE
  select <field>[, <field>...] [where <clause> [(and|or) <clause>...]]
  select * [where ...]

  The whole query is lower-cased before parsing. Field names in the query
  therefore match only lower-case keys in the data.

FIELD LIST
  Fields are separated by commas; surrounding spaces are ignored and empty
  entries (from stray commas) are dropped.

    select name, age
    select name,age,

  Requested fields missing from a record are left out of that record's
  output rather than set to null.

SELECT *
  Takes its field list from the keys of the FIRST record only. Records with
  extra keys lose them; records missing some of those keys omit them.

WHERE
  Exactly one 'where' is allowed. It must be followed by at least one clause.

ERRORS
  Only structural problems are errors:
    - query does not start with 'select'
    - empty field list
    - more than one 'where'
    - 'where' with nothing after it
  A clause that cannot be understood never errors; it just never matches.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

COMPARISON
  field > literal       Numeric greater than
  field < literal       Numeric less than
  field = literal       Numeric or string equality
  field in (a, b, c)    List membership

  Spaces around '>', '<' and '=' are optional. ' in ' needs a space on both
  sides. ' in ' is looked for first; otherwise a clause must contain exactly
  one of '>', '<', '='. Forms like '>=' contain two operator characters and
  never match.

MEMBERSHIP
  The field must hold a list. Tokens are split on commas, trimmed, and may be
  wrapped in single quotes. The clause holds when any list element, rendered
  as text, equals any token exactly.

    select id where tags in (red, 'blue')

CONNECTIVES
  Clauses are joined by 'and' / 'or', each surrounded by whitespace.
  There are no parentheses and no precedence: evaluation is strictly left
  to right.

    a=1 and b=2 or c=3     means   (a=1 and b=2) or c=3
    a=1 or b=2 and c=3     means   (a=1 or b=2) and c=3
"#;

const TYPES_DOC: &str = r#"TYPES

NUMBERS
  If the literal parses as a number, the field must be a number. All JSON
  numbers are 64-bit floats, so 'age=30.0' matches 30. Equality is exact;
  there is no tolerance for rounding error.

STRINGS
  Otherwise the literal is a string and only '=' applies. Comparison is
  case-insensitive. 'name > a' is always false.

LISTS
  Only 'in' looks inside lists.

EVERYTHING ELSE
  Missing fields, booleans, nulls, nested objects and any type mismatch make
  the clause false. Nothing in a clause ever raises an error.
"#;

const RECOMMEND_DOC: &str = r#"RECOMMEND

  jsql recommend --file data.json [--seed N]

  Samples up to 6 records and proposes up to 6 queries built from observed
  values:

    number field  ->  select age where age>30       (random '=', '<' or '>')
    string field  ->  select name where name=John
                      select * where name=John

  Other value types are skipped. Output is random unless --seed is given.
"#;
