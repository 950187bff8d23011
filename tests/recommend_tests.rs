use std::collections::HashSet;

use jsql::recommend::{MAX_RECOMMENDATIONS, SAMPLE_SIZE};
use jsql::sampling::random_subset;
use jsql::{Error, Query, decode_dataset, execute, recommend, recommend_json};
use rand::{SeedableRng, rngs::StdRng};

const PEOPLE: &str = r#"[
    {"name": "John", "age": 30, "city": "New York"},
    {"name": "Jane", "age": 25, "city": "Chicago"},
    {"name": "Alice", "age": 40, "city": "Boston"}
]"#;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn test_subset_is_drawn_without_replacement() {
    let picked = random_subset((0..50).collect::<Vec<_>>(), 6, &mut rng(3));
    assert_eq!(picked.len(), 6);
    let unique: HashSet<_> = picked.iter().collect();
    assert_eq!(unique.len(), 6);
    assert!(picked.iter().all(|n| (0..50).contains(n)));
}

#[test]
fn test_small_input_is_returned_whole() {
    assert_eq!(random_subset(vec!["a", "b"], 6, &mut rng(3)), vec!["a", "b"]);
    assert!(random_subset(Vec::<u8>::new(), 6, &mut rng(3)).is_empty());
}

// ============================================================================
// Recommendations
// ============================================================================

#[test]
fn test_empty_dataset_recommends_nothing() {
    assert!(recommend(&[], &mut rng(1)).is_empty());
}

#[test]
fn test_non_scalar_values_are_skipped() {
    let records = decode_dataset(r#"[{"a": true, "b": null, "c": [1], "d": {"x": 1}}]"#).unwrap();
    assert!(recommend(&records, &mut rng(1)).is_empty());
}

#[test]
fn test_numeric_field_shape() {
    let records = decode_dataset(r#"[{"age": 30}]"#).unwrap();
    for seed in 0..20 {
        let recs = recommend(&records, &mut rng(seed));
        assert_eq!(recs.len(), 1);
        assert!(
            [
                "select age where age=30",
                "select age where age<30",
                "select age where age>30",
            ]
            .contains(&recs[0].as_str()),
            "unexpected: {}",
            recs[0]
        );
    }
}

#[test]
fn test_string_field_shape() {
    let records = decode_dataset(r#"[{"name": "John"}]"#).unwrap();
    for seed in 0..20 {
        let recs = recommend(&records, &mut rng(seed));
        assert_eq!(recs.len(), 1);
        assert!(
            ["select name where name=John", "select * where name=John"].contains(&recs[0].as_str()),
            "unexpected: {}",
            recs[0]
        );
    }
}

#[test]
fn test_values_containing_where_are_skipped() {
    let records =
        decode_dataset(r#"[{"note": "meet where we met", "memo": "a WHERE b", "age": 30}]"#).unwrap();
    for seed in 0..10 {
        let recs = recommend(&records, &mut rng(seed));
        assert_eq!(recs.len(), 1, "only the numeric field survives");
        for text in &recs {
            assert!(Query::parse(text).is_ok(), "does not parse: {text}");
        }
    }
}

#[test]
fn test_output_is_capped() {
    let json = format!(
        "[{}]",
        (0..20)
            .map(|i| format!(r#"{{"id": {i}, "label": "item{i}"}}"#))
            .collect::<Vec<_>>()
            .join(",")
    );
    let records = decode_dataset(&json).unwrap();
    assert_eq!(recommend(&records, &mut rng(9)).len(), MAX_RECOMMENDATIONS);
}

#[test]
fn test_records_are_sampled_without_replacement() {
    let json = format!(
        "[{}]",
        (0..10)
            .map(|i| format!(r#"{{"id": {i}}}"#))
            .collect::<Vec<_>>()
            .join(",")
    );
    let records = decode_dataset(&json).unwrap();
    let recs = recommend(&records, &mut rng(4));
    assert_eq!(recs.len(), SAMPLE_SIZE);

    let ids: HashSet<&str> = recs
        .iter()
        .map(|q| q.rsplit(|c| c == '=' || c == '<' || c == '>').next().unwrap())
        .collect();
    assert_eq!(ids.len(), SAMPLE_SIZE);
}

#[test]
fn test_same_seed_same_recommendations() {
    let records = decode_dataset(PEOPLE).unwrap();
    assert_eq!(
        recommend(&records, &mut rng(42)),
        recommend(&records, &mut rng(42))
    );
}

#[test]
fn test_recommendations_parse_and_equalities_match() {
    let records = decode_dataset(PEOPLE).unwrap();
    for seed in 0..10 {
        for text in recommend(&records, &mut rng(seed)) {
            let query = Query::parse(&text).unwrap();
            let result = execute(&query, &records);
            if !text.contains('<') && !text.contains('>') {
                assert!(result.count >= 1, "no match for {text}");
            }
        }
    }
}

#[test]
fn test_thread_rng_works() {
    let records = decode_dataset(PEOPLE).unwrap();
    let recs = recommend(&records, &mut rand::rng());
    assert!(recs.len() <= MAX_RECOMMENDATIONS);
    assert!(!recs.is_empty());
}

#[test]
fn test_recommend_json_reports_decode_failure() {
    assert!(matches!(
        recommend_json("nope", &mut rng(1)),
        Err(Error::Decode(_))
    ));
    assert_eq!(recommend_json(PEOPLE, &mut rng(1)).unwrap().len(), 6);
}
