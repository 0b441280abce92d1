//! Integration tests for full suite generation
//!
//! Runs the generator on a product search definition: vectors for the
//! request body plus a schema describing the rest of the body.

use battle_core::Value;
use battle_testgen::{TestConfig, TestGenerator};
use battle_vector::VariationKey;

const VECTORS: &str = r#"[
    {"section": "body", "rule": "choose_one", "key": "product_category",
     "payload": ["shoes", "bags", "belts"]},
    {"section": "body", "rule": "choose_many", "key": "season",
     "payload": ["summer", "spring", "autumn", "winter"],
     "payload_default": [["summer", "spring"], ["summer"]], "payload_default_only": true},
    {"section": "body", "rule": "choose_range", "key": ["min_price", "max_price"],
     "payload": [[0, 10], [100, 1000]], "payload_default": [[0, 100], [10, 1000]]},
    {"section": "body", "rule": "choose_each", "key": "file_type",
     "payload": ["json", "csv"], "payload_default": ["json"], "payload_default_only": true},
    {"section": "headers", "rule": "choose_each", "key": "accept",
     "payload": ["application/json", "text/csv"]}
]"#;

const SCHEMA: &str = r#"{
    "type": "object",
    "properties": {
        "query": {"type": "string"},
        "brands": {"type": "array", "items": {"type": "string"}, "maxItems": 3},
        "in_stock": {"type": "boolean"},
        "paging": {
            "type": "object",
            "properties": {"page": {"type": "integer", "minimum": 1, "maximum": 20}}
        }
    }
}"#;

#[test]
fn test_full_suite_generation() {
    let config = TestConfig::default().with_seed(42).with_rounds(3);
    let mut generator = TestGenerator::new(config);
    let result = generator.generate_suite_from_json(VECTORS, Some(SCHEMA));

    assert!(result.is_ok(), "Failed to generate suite: {:?}", result.err());
    let suite = result.unwrap();

    // Baseline carries both the vector fields and the schema-built body
    let baseline = suite.baseline().expect("baseline case");
    let body = &baseline.request["body"];
    assert_eq!(body["product_category"], Value::from("shoes"));
    assert_eq!(body["min_price"], Value::Int(0));
    assert_eq!(body["max_price"], Value::Int(100));
    assert!(body["query"].is_string());
    assert!(body["paging"].is_object());
    assert_eq!(
        baseline.request["headers"]["accept"],
        Value::from("application/json")
    );

    // Three range alternatives, one file type, one header
    let range = VariationKey::range("min_price", "max_price");
    assert_eq!(suite.cases_for("body", &range).count(), 3);
    assert_eq!(
        suite
            .cases_for("body", &VariationKey::field("file_type"))
            .count(),
        1
    );
    assert_eq!(
        suite
            .cases_for("headers", &VariationKey::field("accept"))
            .count(),
        1
    );
    assert_eq!(
        suite
            .cases_for("body", &VariationKey::field("product_category"))
            .count(),
        0
    );

    let widest = suite
        .cases_for("body", &range)
        .find(|c| c.id.ends_with("_2"))
        .unwrap();
    assert_eq!(widest.request["body"]["min_price"], Value::Int(0));
    assert_eq!(widest.request["body"]["max_price"], Value::Int(1000));
}

#[test]
fn test_rounds_redraw_body_only() {
    let mut generator = TestGenerator::new(TestConfig::default().with_rounds(5));
    let suite = generator
        .generate_suite_from_json(VECTORS, Some(SCHEMA))
        .unwrap();
    let payload = suite.payload.as_ref().unwrap();

    let rounds = generator.redraw_rounds(&suite);
    assert_eq!(rounds.len(), 5);

    for cases in &rounds {
        let body = &cases[0].request["body"];
        assert_eq!(body["file_type"], Value::from("json"));
        assert!(payload.generators.same_shape(&Value::Object(
            body.iter()
                .filter(|(k, _)| payload.base.as_object().unwrap().contains_key(k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect()
        )));
        let brands = body["brands"].as_list().unwrap();
        assert!((1..=3).contains(&brands.len()));
    }
}

#[test]
fn test_suite_serializes() {
    let mut generator = TestGenerator::new(TestConfig::minimal());
    let suite = generator.generate_suite_from_json(VECTORS, None).unwrap();

    let json = serde_json::to_value(&suite.test_cases).unwrap();
    let first = &json[0];
    assert!(first["id"].is_string());
    assert!(first["request"]["body"].is_object());
}
