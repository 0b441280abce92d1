//! Turning a scenario into concrete test cases

use crate::types::{Request, TestCase};
use battle_core::{Object, Value};
use battle_vector::{Scenario, VariationKey};

/// The baseline request.
///
/// The body section starts from the schema-built object, if there is one,
/// and scenario fields overwrite it.
pub fn baseline_request(scenario: &Scenario, body: Option<&Value>, body_section: &str) -> Request {
    let body_fields = body.and_then(Value::as_object);
    let mut request = Request::new();

    for (section, fields) in &scenario.base {
        let mut merged = match body_fields {
            Some(generated) if section == body_section => generated.clone(),
            _ => Object::new(),
        };
        for (name, value) in fields {
            merged.insert(name.clone(), value.clone());
        }
        request.insert(section.clone(), merged);
    }

    if let Some(generated) = body_fields {
        if !request.contains_key(body_section) {
            request.insert(body_section.to_string(), generated.clone());
        }
    }

    request
}

/// One test case per variation value, each differing from the baseline in
/// exactly one field or range pair.
pub fn variation_cases(scenario: &Scenario, baseline: &Request) -> Vec<TestCase> {
    let mut cases = Vec::new();

    for (section, variations) in &scenario.variations {
        for (key, alternatives) in variations {
            for (n, alternative) in alternatives.iter().enumerate() {
                let Some(request) = substitute(baseline, section, key, alternative) else {
                    continue;
                };
                cases.push(TestCase {
                    id: format!("{}_{}_{}", section, key, n),
                    section: Some(section.clone()),
                    key: Some(key.clone()),
                    request,
                    tags: vec![
                        section.clone(),
                        if key.is_range() { "range" } else { "field" }.to_string(),
                    ],
                });
            }
        }
    }

    cases
}

/// Copy of `baseline` with `alternative` placed under `key`. Range
/// alternatives that are not pairs are skipped.
fn substitute(
    baseline: &Request,
    section: &str,
    key: &VariationKey,
    alternative: &Value,
) -> Option<Request> {
    let mut request = baseline.clone();
    let fields = request.entry(section.to_string()).or_default();
    match key {
        VariationKey::Field(name) => {
            fields.insert(name.clone(), alternative.clone());
        }
        VariationKey::Range(low_key, high_key) => {
            let (low, high) = alternative.as_pair()?;
            fields.insert(low_key.clone(), low.clone());
            fields.insert(high_key.clone(), high.clone());
        }
    }
    Some(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::object;
    use battle_vector::{Vector, VectorEngine};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scenario() -> Scenario {
        let vectors = vec![
            Vector::choose_each("body", "format", vec!["json".into(), "csv".into()], vec![])
                .unwrap(),
            Vector::choose_range(
                "query",
                ("from", "to"),
                [(1.into(), 5.into()), (10.into(), 20.into())],
                vec![],
                false,
            ),
        ];
        VectorEngine::generate(&vectors, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_baseline_overlays_generated_body() {
        let body = Value::Object(object! { "format" => "xml", "limit" => 3 });
        let request = baseline_request(&scenario(), Some(&body), "body");

        assert_eq!(request["body"], object! { "format" => "json", "limit" => 3 });
        assert_eq!(request["query"], object! { "from" => 1, "to" => 20 });
    }

    #[test]
    fn test_generated_body_without_body_vectors() {
        let body = Value::Object(object! { "limit" => 3 });
        let request = baseline_request(&scenario(), Some(&body), "payload");
        assert_eq!(request["payload"], object! { "limit" => 3 });
    }

    #[test]
    fn test_each_case_changes_one_key() {
        let scenario = scenario();
        let baseline = baseline_request(&scenario, None, "body");
        let cases = variation_cases(&scenario, &baseline);

        let ids: Vec<&str> = cases.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["body_format_0", "query_range:from:to_0"]);

        assert_eq!(cases[0].request["body"]["format"], Value::from("csv"));
        assert_eq!(cases[0].request["query"], baseline["query"]);

        assert_eq!(cases[1].request["query"], object! { "from" => 5, "to" => 10 });
        assert_eq!(cases[1].request["body"], baseline["body"]);
        assert_eq!(cases[1].tags, vec!["query", "range"]);
    }

    #[test]
    fn test_range_ids_never_collide_with_field_ids() {
        let vectors = vec![
            Vector::choose_each("query", "from_to", vec![1.into(), 2.into()], vec![]).unwrap(),
            Vector::choose_range(
                "query",
                ("from", "to"),
                [(1.into(), 5.into()), (10.into(), 20.into())],
                vec![],
                false,
            ),
        ];
        let scenario = VectorEngine::generate(&vectors, &mut StdRng::seed_from_u64(42));
        let baseline = baseline_request(&scenario, None, "body");
        let ids: Vec<String> = variation_cases(&scenario, &baseline)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["query_from_to_0", "query_range:from:to_0"]);
    }
}
