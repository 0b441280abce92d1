//! Rule-based scenario and variation generation
//!
//! A vector declares how one field (or a pair of range fields) is tested:
//! a rule, a pool of candidate values and preferred defaults. The engine
//! turns an ordered list of vectors into:
//! - a baseline scenario with exactly one value per field
//! - per-field variations, alternative values that differ from the baseline

pub mod engine;
pub mod error;
pub mod key;
pub mod record;
pub mod vector;

pub use engine::{BaseScenario, Scenario, VariationMap, Variations, VectorEngine};
pub use error::ConfigError;
pub use key::VariationKey;
pub use record::{KeySpec, Rule, VectorRecord};
pub use vector::{parse_vectors, FieldVector, RangeVector, Vector, VectorSpec};
