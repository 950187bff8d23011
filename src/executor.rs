//! Runs a parsed query over a dataset and projects the matches.

use tracing::debug;

use crate::{
    ast::Query,
    error::Result,
    evaluator::Evaluator,
    value::{Record, decode_dataset},
};

/// Matching records, projected, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub records: Vec<Record>,
    pub count: usize,
}

/// Execute a query over already-decoded records.
///
/// For `select *` the projected fields come from the first record's keys
/// only; later records are projected onto that same key set. Requested
/// fields absent from a record are left out rather than set to null.
///
/// ```
/// use jsql::{Query, decode_dataset, execute};
///
/// let records = decode_dataset(r#"[
///     {"name": "John", "age": 30, "city": "New York"},
///     {"name": "Jane", "age": 25, "city": "Chicago"}
/// ]"#).unwrap();
///
/// let query = Query::parse("select name where age > 26 and name=John").unwrap();
/// let result = execute(&query, &records);
/// assert_eq!(result.count, 1);
/// assert_eq!(result.records[0]["name"], jsql::Value::String("John".into()));
/// ```
pub fn execute(query: &Query, records: &[Record]) -> QueryResult {
    let fields: Vec<&str> = if query.select_all {
        records
            .first()
            .map(|first| first.keys().map(String::as_str).collect())
            .unwrap_or_default()
    } else {
        query.fields.iter().map(String::as_str).collect()
    };

    let evaluator = Evaluator::new(query);

    let matched: Vec<Record> = records
        .iter()
        .filter(|record| evaluator.accepts(record))
        .map(|record| project(record, &fields))
        .collect();

    debug!(matched = matched.len(), total = records.len(), "query executed");

    QueryResult {
        count: matched.len(),
        records: matched,
    }
}

/// Decode a JSON array of objects and execute the query over it.
pub fn execute_json(query: &Query, json: &str) -> Result<QueryResult> {
    let records = decode_dataset(json)?;
    Ok(execute(query, &records))
}

fn project(record: &Record, fields: &[&str]) -> Record {
    fields
        .iter()
        .filter_map(|field| {
            record
                .get_key_value(*field)
                .map(|(k, v)| (k.clone(), v.clone()))
        })
        .collect()
}
