//! Validated vector definitions

use crate::error::{ConfigError, ConfigResult};
use crate::key::{VariationKey, KEY_SEPARATOR};
use crate::record::{Rule, VectorRecord};
use battle_core::Value;

/// Candidate values for a single field.
///
/// Always has a base value: construction fails when both the payload and
/// the defaults are empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldVector {
    key: String,
    payload: Vec<Value>,
    defaults: Vec<Value>,
}

impl FieldVector {
    pub fn new(
        key: impl Into<String>,
        payload: Vec<Value>,
        defaults: Vec<Value>,
    ) -> ConfigResult<Self> {
        let key = key.into();
        if payload.is_empty() && defaults.is_empty() {
            return Err(ConfigError::NoBaseValue { key });
        }
        Ok(Self {
            key,
            payload,
            defaults,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn payload(&self) -> &[Value] {
        &self.payload
    }

    pub fn defaults(&self) -> &[Value] {
        &self.defaults
    }

    /// First default if any, otherwise first payload element
    pub fn base(&self) -> &Value {
        self.defaults
            .first()
            .or_else(|| self.payload.first())
            .unwrap_or(&Value::Null)
    }
}

/// Candidate `(low, high)` pairs for two fields varied together
#[derive(Debug, Clone, PartialEq)]
pub struct RangeVector {
    keys: (String, String),
    payload: [(Value, Value); 2],
    defaults: Vec<(Value, Value)>,
    defaults_only: bool,
}

impl RangeVector {
    pub fn new(
        keys: (String, String),
        payload: [(Value, Value); 2],
        defaults: Vec<(Value, Value)>,
        defaults_only: bool,
    ) -> Self {
        Self {
            keys,
            payload,
            defaults,
            defaults_only,
        }
    }

    pub fn keys(&self) -> (&str, &str) {
        (&self.keys.0, &self.keys.1)
    }

    pub fn payload(&self) -> &[(Value, Value); 2] {
        &self.payload
    }

    pub fn defaults(&self) -> &[(Value, Value)] {
        &self.defaults
    }

    pub fn defaults_only(&self) -> bool {
        self.defaults_only
    }

    /// The narrowest span the payload allows: high end of the low pair to
    /// low end of the high pair.
    pub fn min_range(&self) -> (Value, Value) {
        (self.payload[0].1.clone(), self.payload[1].0.clone())
    }

    /// The widest span the payload allows.
    pub fn max_range(&self) -> (Value, Value) {
        (self.payload[0].0.clone(), self.payload[1].1.clone())
    }
}

/// Rule-specific content of a vector
#[derive(Debug, Clone, PartialEq)]
pub enum VectorSpec {
    ChooseOne(FieldVector),
    ChooseMany(FieldVector),
    ChooseEach(FieldVector),
    ChooseRange(RangeVector),
}

/// One field's test policy within a section
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub section: String,
    pub spec: VectorSpec,
}

impl Vector {
    pub fn new(section: impl Into<String>, spec: VectorSpec) -> Self {
        Self {
            section: section.into(),
            spec,
        }
    }

    pub fn choose_one(
        section: impl Into<String>,
        key: impl Into<String>,
        payload: Vec<Value>,
        defaults: Vec<Value>,
    ) -> ConfigResult<Self> {
        Ok(Self::new(
            section,
            VectorSpec::ChooseOne(FieldVector::new(key, payload, defaults)?),
        ))
    }

    pub fn choose_many(
        section: impl Into<String>,
        key: impl Into<String>,
        payload: Vec<Value>,
        defaults: Vec<Value>,
    ) -> ConfigResult<Self> {
        Ok(Self::new(
            section,
            VectorSpec::ChooseMany(FieldVector::new(key, payload, defaults)?),
        ))
    }

    pub fn choose_each(
        section: impl Into<String>,
        key: impl Into<String>,
        payload: Vec<Value>,
        defaults: Vec<Value>,
    ) -> ConfigResult<Self> {
        Ok(Self::new(
            section,
            VectorSpec::ChooseEach(FieldVector::new(key, payload, defaults)?),
        ))
    }

    pub fn choose_range(
        section: impl Into<String>,
        keys: (impl Into<String>, impl Into<String>),
        payload: [(Value, Value); 2],
        defaults: Vec<(Value, Value)>,
        defaults_only: bool,
    ) -> Self {
        Self::new(
            section,
            VectorSpec::ChooseRange(RangeVector::new(
                (keys.0.into(), keys.1.into()),
                payload,
                defaults,
                defaults_only,
            )),
        )
    }

    pub fn rule(&self) -> Rule {
        match self.spec {
            VectorSpec::ChooseOne(_) => Rule::ChooseOne,
            VectorSpec::ChooseMany(_) => Rule::ChooseMany,
            VectorSpec::ChooseEach(_) => Rule::ChooseEach,
            VectorSpec::ChooseRange(_) => Rule::ChooseRange,
        }
    }

    /// Key under which this vector's variations are stored
    pub fn variation_key(&self) -> VariationKey {
        match &self.spec {
            VectorSpec::ChooseOne(field)
            | VectorSpec::ChooseMany(field)
            | VectorSpec::ChooseEach(field) => VariationKey::field(field.key()),
            VectorSpec::ChooseRange(range) => {
                let (low, high) = range.keys();
                VariationKey::range(low, high)
            }
        }
    }
}

impl TryFrom<VectorRecord> for Vector {
    type Error = ConfigError;

    fn try_from(record: VectorRecord) -> Result<Self, Self::Error> {
        let section = record.section.ok_or(ConfigError::MissingField("section"))?;
        let rule = record.rule.ok_or(ConfigError::MissingField("rule"))?;
        let key = record.key.ok_or(ConfigError::MissingField("key"))?;

        let names = key.names();
        if names.is_empty() || names.iter().any(|n| n.is_empty()) {
            return Err(ConfigError::EmptyKey { section });
        }
        if let Some(name) = names.iter().find(|n| n.contains(KEY_SEPARATOR)) {
            return Err(ConfigError::KeyName {
                name: name.to_string(),
            });
        }

        let expected = if rule == Rule::ChooseRange { 2 } else { 1 };
        if names.len() != expected {
            return Err(ConfigError::KeyArity {
                key: key.to_string(),
                rule,
                expected,
                found: names.len(),
            });
        }

        let spec = match rule {
            Rule::ChooseRange => {
                let key_label = key.to_string();
                let keys = (names[0].to_string(), names[1].to_string());
                let payload = match <[Value; 2]>::try_from(record.payload) {
                    Ok([low, high]) => [to_pair(&key_label, low)?, to_pair(&key_label, high)?],
                    Err(payload) => {
                        return Err(ConfigError::RangePayload {
                            key: key_label,
                            found: payload.len(),
                        })
                    }
                };
                let defaults = record
                    .payload_default
                    .into_iter()
                    .map(|value| to_pair(&key_label, value))
                    .collect::<ConfigResult<Vec<_>>>()?;
                VectorSpec::ChooseRange(RangeVector::new(
                    keys,
                    payload,
                    defaults,
                    record.payload_default_only,
                ))
            }
            Rule::ChooseOne => VectorSpec::ChooseOne(FieldVector::new(
                names[0],
                record.payload,
                record.payload_default,
            )?),
            Rule::ChooseMany => VectorSpec::ChooseMany(FieldVector::new(
                names[0],
                record.payload,
                record.payload_default,
            )?),
            Rule::ChooseEach => VectorSpec::ChooseEach(FieldVector::new(
                names[0],
                record.payload,
                record.payload_default,
            )?),
        };

        Ok(Vector { section, spec })
    }
}

fn to_pair(key: &str, value: Value) -> ConfigResult<(Value, Value)> {
    match value.as_pair() {
        Some((low, high)) => Ok((low.clone(), high.clone())),
        None => Err(ConfigError::NotAPair {
            key: key.to_string(),
            value,
        }),
    }
}

/// Read a JSON array of vector records and validate every one of them.
///
/// Fails on the first invalid record; no partial list is returned.
pub fn parse_vectors(source: &str) -> ConfigResult<Vec<Vector>> {
    let records: Vec<VectorRecord> = serde_json::from_str(source)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Vector::try_from(record).map_err(|source| ConfigError::Invalid {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}
