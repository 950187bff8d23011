//! Query recommendations synthesized from a sample of the data.
//!
//! Best-effort discovery aid: the generated queries always parse, but are
//! neither unique nor guaranteed to match anything interesting.

use rand::Rng;
use tracing::debug;

use crate::{
    ast::Query,
    error::Result,
    sampling::random_subset,
    value::{Record, Value, decode_dataset},
};

/// Records sampled from the dataset.
pub const SAMPLE_SIZE: usize = 6;

/// Upper bound on the number of queries returned.
pub const MAX_RECOMMENDATIONS: usize = 6;

const NUMERIC_OPS: [char; 3] = ['=', '<', '>'];

/// Suggest up to [`MAX_RECOMMENDATIONS`] query strings for the dataset.
///
/// Numeric fields get a random `=`, `<` or `>` filter on their observed value;
/// string fields get an equality filter, selecting either the field itself
/// or `*`. Other value types produce nothing, as does any candidate that
/// would not parse.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use jsql::{Query, decode_dataset, recommend};
///
/// let records = decode_dataset(r#"[{"name": "John", "age": 30}]"#).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// for query in recommend(&records, &mut rng) {
///     assert!(Query::parse(&query).is_ok());
/// }
/// ```
pub fn recommend<R>(records: &[Record], rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let sample = random_subset(records.iter().collect::<Vec<_>>(), SAMPLE_SIZE, rng);

    let mut candidates = Vec::new();
    for record in sample {
        for (field, value) in record {
            // values such as "meet where we met" would not parse back
            if let Some(query) = candidate(field, value, rng)
                && Query::parse(&query).is_ok()
            {
                candidates.push(query);
            }
        }
    }

    debug!(candidates = candidates.len(), "recommendation candidates");
    random_subset(candidates, MAX_RECOMMENDATIONS, rng)
}

/// Decode a JSON dataset and [`recommend`] queries for it.
pub fn recommend_json<R>(json: &str, rng: &mut R) -> Result<Vec<String>>
where
    R: Rng + ?Sized,
{
    let records = decode_dataset(json)?;
    Ok(recommend(&records, rng))
}

fn candidate<R>(field: &str, value: &Value, rng: &mut R) -> Option<String>
where
    R: Rng + ?Sized,
{
    match value {
        Value::Number(n) => {
            let op = NUMERIC_OPS[rng.random_range(0..NUMERIC_OPS.len())];
            Some(format!("select {field} where {field}{op}{n}"))
        }
        Value::String(s) => {
            if rng.random_bool(0.5) {
                Some(format!("select {field} where {field}={s}"))
            } else {
                Some(format!("select * where {field}={s}"))
            }
        }
        _ => None,
    }
}
