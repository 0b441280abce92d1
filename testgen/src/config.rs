//! Configuration for test generation

use battle_valuegen::GeneratorConfig;

/// Configuration for test generation
#[derive(Debug, Clone)]
pub struct TestConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Number of re-randomized body payloads drawn per suite
    pub rounds: usize,
    /// Scenario section whose fields overlay the schema-built body
    pub body_section: String,
    /// Emit the untouched baseline as its own test case
    pub include_baseline: bool,
    /// Value ranges for schema leaves
    pub generator: GeneratorConfig,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rounds: 1,
            body_section: "body".to_string(),
            include_baseline: true,
            generator: GeneratorConfig::default(),
        }
    }
}

impl TestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_body_section(mut self, section: impl Into<String>) -> Self {
        self.body_section = section.into();
        self
    }

    pub fn with_baseline(mut self, include: bool) -> Self {
        self.include_baseline = include;
        self
    }

    pub fn with_generator_config(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    pub fn minimal() -> Self {
        Self {
            seed: 42,
            rounds: 1,
            body_section: "body".to_string(),
            include_baseline: false,
            generator: GeneratorConfig::default()
                .with_string_len(1, 4)
                .with_array_len(1, 2),
        }
    }
}
