//! Core types for the test generation framework

use battle_core::Object;
use battle_payload::{BuiltPayload, PayloadError};
use battle_vector::{ConfigError, Scenario, VariationKey};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during test generation
#[derive(Error, Debug)]
pub enum TestGenError {
    #[error("Vector definition failed: {0}")]
    Config(#[from] ConfigError),
    #[error("Payload generation failed: {0}")]
    Payload(#[from] PayloadError),
    #[error("Failed to parse definitions: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Concrete request content: section name -> field name -> value
pub type Request = IndexMap<String, Object>;

/// A complete test suite
#[derive(Debug)]
pub struct TestSuite {
    pub scenario: Scenario,
    /// Body built from the schema, with its generators for later rounds
    pub payload: Option<BuiltPayload>,
    pub test_cases: Vec<TestCase>,
    pub seed: u64,
}

impl TestSuite {
    pub fn baseline(&self) -> Option<&TestCase> {
        self.test_cases.iter().find(|t| t.key.is_none())
    }

    /// Test cases that vary `key` in `section`
    pub fn cases_for<'a>(
        &'a self,
        section: &'a str,
        key: &'a VariationKey,
    ) -> impl Iterator<Item = &'a TestCase> + 'a {
        self.test_cases
            .iter()
            .filter(move |t| t.section.as_deref() == Some(section) && t.key.as_ref() == Some(key))
    }
}

/// A single test case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCase {
    /// Unique identifier
    pub id: String,
    /// Section holding the varied field, `None` for the baseline
    pub section: Option<String>,
    /// The varied field or range, `None` for the baseline
    pub key: Option<VariationKey>,
    /// The request to send
    pub request: Request,
    /// Tags for categorization
    pub tags: Vec<String>,
}
