//! Test generation for API battle testing
//!
//! This crate ties the generators together:
//! - Interprets field-level test vectors into a baseline and variations
//! - Builds a randomized request body from a schema
//! - Synthesizes one concrete request per variation
//! - Re-draws the body for further test rounds from the retained generators

pub mod config;
pub mod synthesis;
pub mod types;

pub use config::TestConfig;
pub use types::*;

use battle_payload::{PayloadBuilder, SchemaNode};
use battle_vector::{parse_vectors, Vector, VectorEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Main entry point for the test generator
pub struct TestGenerator {
    pub config: TestConfig,
    pub rng: StdRng,
    builder: PayloadBuilder,
}

impl TestGenerator {
    pub fn new(config: TestConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        let builder = PayloadBuilder::with_config(config.generator.clone());
        Self {
            config,
            rng,
            builder,
        }
    }

    /// Generate a complete test suite from vectors and an optional body schema
    pub fn generate_suite(
        &mut self,
        vectors: &[Vector],
        schema: Option<&SchemaNode>,
    ) -> Result<TestSuite, TestGenError> {
        // 1. Build the body first so a bad schema fails before anything else
        let payload = match schema {
            Some(schema) => Some(self.builder.build(schema, &mut self.rng)?),
            None => None,
        };

        // 2. Baseline and variations
        let scenario = VectorEngine::generate(vectors, &mut self.rng);

        // 3. Combine into test cases
        let baseline = synthesis::baseline_request(
            &scenario,
            payload.as_ref().map(|p| &p.base),
            &self.config.body_section,
        );
        let mut test_cases = Vec::new();
        if self.config.include_baseline {
            test_cases.push(TestCase {
                id: "baseline".to_string(),
                section: None,
                key: None,
                request: baseline.clone(),
                tags: vec!["baseline".to_string()],
            });
        }
        test_cases.extend(synthesis::variation_cases(&scenario, &baseline));

        info!(
            seed = self.config.seed,
            sections = scenario.base.len(),
            variations = scenario.variation_count(),
            cases = test_cases.len(),
            "generated test suite"
        );

        Ok(TestSuite {
            scenario,
            payload,
            test_cases,
            seed: self.config.seed,
        })
    }

    /// Parse vector and schema documents, then generate a suite.
    pub fn generate_suite_from_json(
        &mut self,
        vectors_source: &str,
        schema_source: Option<&str>,
    ) -> Result<TestSuite, TestGenError> {
        let vectors = parse_vectors(vectors_source)?;
        let schema = schema_source.map(SchemaNode::from_json).transpose()?;
        self.generate_suite(&vectors, schema.as_ref())
    }

    /// Draw `config.rounds` fresh sets of test cases. Each round re-invokes
    /// the body generators once and rebuilds every case around the new body;
    /// scenario fields keep their values.
    pub fn redraw_rounds(&mut self, suite: &TestSuite) -> Vec<Vec<TestCase>> {
        let Some(payload) = suite.payload.as_ref() else {
            return Vec::new();
        };

        (0..self.config.rounds)
            .map(|round| {
                let body = payload.generators.redraw(&mut self.rng);
                let baseline = synthesis::baseline_request(
                    &suite.scenario,
                    Some(&body),
                    &self.config.body_section,
                );
                let mut cases = Vec::new();
                if self.config.include_baseline {
                    cases.push(TestCase {
                        id: format!("baseline_r{}", round),
                        section: None,
                        key: None,
                        request: baseline.clone(),
                        tags: vec!["baseline".to_string()],
                    });
                }
                cases.extend(
                    synthesis::variation_cases(&suite.scenario, &baseline)
                        .into_iter()
                        .map(|mut case| {
                            case.id = format!("{}_r{}", case.id, round);
                            case
                        }),
                );
                cases
            })
            .collect()
    }
}
