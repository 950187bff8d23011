use indexmap::IndexMap;

use crate::error::Error;

/// A single decoded record: field name to value, in document order.
pub type Record = IndexMap<String, Value>;

/// A dynamically-typed field value decoded from JSON.
///
/// Every JSON number is held as an `f64`, so `30` and `30.0` are the same
/// value for comparison purposes.
///
/// # Examples
///
/// ```
/// use jsql::Value;
///
/// let age = Value::Number(30.0);
/// let name = Value::String("John".to_string());
/// let tags = Value::List(vec![Value::String("a".to_string()), Value::Number(1.0)]);
///
/// assert_eq!(age.as_number(), Some(30.0));
/// assert_eq!(name.as_str(), Some("John"));
/// assert_eq!(tags.render(), r#"["a",1]"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean
    Boolean(bool),

    /// JSON number, always widened to 64-bit float
    Number(f64),

    /// UTF-8 string
    String(String),

    /// Ordered list of values
    List(Vec<Value>),

    /// Nested object. Carried through projection untouched; never matched
    /// by a predicate.
    Object(Record),
}

impl Value {
    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Textual rendering used by membership tests.
    ///
    /// Strings render without quotes; lists and objects render as compact JSON.
    pub fn render(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::List(_) | Value::Object(_) => serde_json::Value::from(self.clone()).to_string(),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Null,
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::List(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => Value::Object(record_from_json(obj)),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(b),
            Value::Number(f) => number_to_json(f),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(record) => serde_json::Value::Object(record_to_json(record)),
        }
    }
}

/// Whole floats go back out as integers so `30` round-trips as `30`, not `30.0`.
fn number_to_json(f: f64) -> serde_json::Value {
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        return serde_json::Value::Number((f as i64).into());
    }
    serde_json::Number::from_f64(f)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

fn record_from_json(obj: serde_json::Map<String, serde_json::Value>) -> Record {
    obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect()
}

/// Convert a record into a JSON object map, keeping field order.
pub fn record_to_json(record: Record) -> serde_json::Map<String, serde_json::Value> {
    record
        .into_iter()
        .map(|(k, v)| (k, serde_json::Value::from(v)))
        .collect()
}

/// Decode a JSON array of objects into a dataset.
///
/// Fails with [`Error::Decode`] when the text is not valid JSON or is not an
/// array of objects.
pub fn decode_dataset(json: &str) -> Result<Vec<Record>, Error> {
    let rows: Vec<serde_json::Map<String, serde_json::Value>> = serde_json::from_str(json)?;
    Ok(rows.into_iter().map(record_from_json).collect())
}
