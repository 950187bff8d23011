//! JSON rendering of result sets.
//!
//! Records keep their projected field order. Whole numbers print as
//! integers, so a field decoded from `30` prints back as `30`.
//!
//! # Examples
//!
//! ```
//! use jsql::{Query, decode_dataset, execute};
//! use jsql::output::{to_json, to_json_pretty};
//!
//! let records = decode_dataset(r#"[{"name": "John", "age": 30}]"#).unwrap();
//! let result = execute(&Query::parse("select age, name").unwrap(), &records);
//!
//! assert_eq!(to_json(&result.records), r#"[{"age":30,"name":"John"}]"#);
//! assert!(to_json_pretty(&result.records).contains("\n  {\n    \"age\": 30,"));
//! ```

use crate::value::{Record, record_to_json};

fn to_json_value(records: &[Record]) -> serde_json::Value {
    serde_json::Value::Array(
        records
            .iter()
            .cloned()
            .map(|record| serde_json::Value::Object(record_to_json(record)))
            .collect(),
    )
}

/// Compact JSON array of the records.
pub fn to_json(records: &[Record]) -> String {
    to_json_value(records).to_string()
}

/// JSON array of the records, indented by two spaces.
pub fn to_json_pretty(records: &[Record]) -> String {
    format!("{:#}", to_json_value(records))
}
