//! Error types for vector definitions

use crate::record::Rule;
use battle_core::Value;
use thiserror::Error;

/// A malformed or underspecified vector definition
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Vector is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("Vector in section {section} has an empty key")]
    EmptyKey { section: String },
    #[error("Vector key name {name:?} must not contain ':'")]
    KeyName { name: String },
    #[error("Vector {key}: rule {rule} expects {expected} key name(s), got {found}")]
    KeyArity {
        key: String,
        rule: Rule,
        expected: usize,
        found: usize,
    },
    #[error("Range vector {key}: payload must hold exactly 2 pairs, got {found}")]
    RangePayload { key: String, found: usize },
    #[error("Range vector {key}: {value} is not a (low, high) pair")]
    NotAPair { key: String, value: Value },
    #[error("Vector {key}: payload and payload_default are both empty")]
    NoBaseValue { key: String },
    #[error("Vector #{index}: {source}")]
    Invalid {
        index: usize,
        #[source]
        source: Box<ConfigError>,
    },
    #[error("Invalid vector document: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
