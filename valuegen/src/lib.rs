//! Random value generators for payload leaves.
//!
//! A generator is allocated once per schema leaf and can be drawn from any
//! number of times. Every draw takes the random source explicitly, so a
//! seeded RNG reproduces the same sequence of values.

pub mod config;
pub mod error;
pub mod factory;
pub mod generators;

pub use config::GeneratorConfig;
pub use error::ValueGenerationError;
pub use factory::{DefaultGeneratorFactory, GeneratorFactory, LeafConstraints};
pub use generators::{
    ArrayGenerator, BooleanGenerator, ChoiceGenerator, IntegerGenerator, NumberGenerator,
    StringGenerator,
};

use battle_core::{Value, ValueKind};
use rand::RngCore;
use std::fmt;

/// One draw from a generator
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedValue {
    pub value: Value,
    /// Short human-readable account of how the value was drawn
    pub description: String,
}

impl GeneratedValue {
    pub fn new(value: Value, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

/// Produces a value of one declared kind on each call to `next`.
pub trait ValueGenerator: fmt::Debug + Send + Sync {
    /// The kind of every value this generator produces
    fn kind(&self) -> &ValueKind;

    /// Draw a fresh value
    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue;
}
