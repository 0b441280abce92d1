//! Wire format of vector definitions

use battle_core::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variation policy of a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Baseline only, never varied
    ChooseOne,
    /// Vary with sampled subsets of the payload
    ChooseMany,
    /// Vary a (low, high) pair of fields
    ChooseRange,
    /// Vary with every other payload element
    ChooseEach,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::ChooseOne => "choose_one",
            Rule::ChooseMany => "choose_many",
            Rule::ChooseRange => "choose_range",
            Rule::ChooseEach => "choose_each",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field name, or the two field names of a range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    Single(String),
    Names(Vec<String>),
}

impl KeySpec {
    pub fn names(&self) -> Vec<&str> {
        match self {
            KeySpec::Single(name) => vec![name.as_str()],
            KeySpec::Names(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(":"))
    }
}

/// A vector exactly as written in a test definition document.
///
/// Required fields are optional here so that a missing one is reported as a
/// `ConfigError` naming the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub rule: Option<Rule>,
    #[serde(default)]
    pub key: Option<KeySpec>,
    #[serde(default)]
    pub payload: Vec<Value>,
    #[serde(default)]
    pub payload_default: Vec<Value>,
    #[serde(default)]
    pub payload_default_only: bool,
}
