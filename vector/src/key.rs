//! Keys of the variation map

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Separates the parts of an encoded range key; never valid inside a field name.
pub const KEY_SEPARATOR: char = ':';

const RANGE_PREFIX: &str = "range:";

/// Identifies what a list of variations substitutes into the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariationKey {
    /// A single field
    Field(String),
    /// A (low, high) pair of fields varied together
    Range(String, String),
}

impl VariationKey {
    pub fn field(name: impl Into<String>) -> Self {
        VariationKey::Field(name.into())
    }

    pub fn range(low: impl Into<String>, high: impl Into<String>) -> Self {
        VariationKey::Range(low.into(), high.into())
    }

    pub fn is_range(&self) -> bool {
        matches!(self, VariationKey::Range(..))
    }

    /// Baseline field names this key substitutes
    pub fn fields(&self) -> Vec<&str> {
        match self {
            VariationKey::Field(name) => vec![name.as_str()],
            VariationKey::Range(low, high) => vec![low.as_str(), high.as_str()],
        }
    }
}

impl fmt::Display for VariationKey {
    /// `name` for fields, `range:low:high` for ranges
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariationKey::Field(name) => f.write_str(name),
            VariationKey::Range(low, high) => write!(f, "{}{}:{}", RANGE_PREFIX, low, high),
        }
    }
}

impl FromStr for VariationKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let range = s
            .strip_prefix(RANGE_PREFIX)
            .and_then(|rest| rest.split_once(KEY_SEPARATOR));
        Ok(match range {
            Some((low, high)) => VariationKey::range(low, high),
            None => VariationKey::field(s),
        })
    }
}

impl Serialize for VariationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VariationKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match s.parse() {
            Ok(key) => Ok(key),
            Err(never) => match never {},
        }
    }
}
