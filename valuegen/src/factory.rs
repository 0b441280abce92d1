//! Allocation of generators for declared leaf kinds

use crate::generators::*;
use crate::{GeneratorConfig, ValueGenerationError, ValueGenerator};
use battle_core::{Value, ValueKind};

/// Per-leaf constraints taken from a schema node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeafConstraints {
    /// Fixed set of allowed values (schema `enum`)
    pub choices: Option<Vec<Value>>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
}

/// Creates generators for leaf kinds. Implement this to plug in custom
/// generation (fixtures, corpora, faker data) without touching the builder.
pub trait GeneratorFactory {
    fn create(
        &self,
        kind: &ValueKind,
        constraints: &LeafConstraints,
    ) -> Result<Box<dyn ValueGenerator>, ValueGenerationError>;
}

/// Supports string, number, integer and boolean leaves, and arrays of them.
#[derive(Debug, Clone, Default)]
pub struct DefaultGeneratorFactory {
    config: GeneratorConfig,
}

impl DefaultGeneratorFactory {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl GeneratorFactory for DefaultGeneratorFactory {
    fn create(
        &self,
        kind: &ValueKind,
        constraints: &LeafConstraints,
    ) -> Result<Box<dyn ValueGenerator>, ValueGenerationError> {
        if let Some(ref choices) = constraints.choices {
            return Ok(Box::new(ChoiceGenerator::new(kind.clone(), choices.clone())?));
        }

        let config = &self.config;
        match kind {
            ValueKind::String => Ok(Box::new(StringGenerator::new(
                config.string_min_len,
                config.string_max_len,
            )?)),
            ValueKind::Number => {
                let (min, max) = resolve_bounds(
                    (config.number_min, config.number_max),
                    (constraints.minimum, constraints.maximum),
                );
                Ok(Box::new(NumberGenerator::new(min, max)?))
            }
            ValueKind::Integer => {
                let (min, max) = resolve_bounds(
                    (config.integer_min, config.integer_max),
                    (
                        constraints.minimum.map(|m| m.ceil() as i64),
                        constraints.maximum.map(|m| m.floor() as i64),
                    ),
                );
                Ok(Box::new(IntegerGenerator::new(min, max)?))
            }
            ValueKind::Boolean => Ok(Box::new(BooleanGenerator::new())),
            ValueKind::Array(item) => {
                // Item-level constraints are not expressible on an array leaf
                let item = self.create(item, &LeafConstraints::default())?;
                let (min, max) = resolve_bounds(
                    (config.array_min_len, config.array_max_len),
                    (constraints.min_items, constraints.max_items),
                );
                Ok(Box::new(ArrayGenerator::new(item, min, max)?))
            }
            ValueKind::Null | ValueKind::Object => {
                Err(ValueGenerationError::UnsupportedKind(kind.clone()))
            }
        }
    }
}

/// Explicit bounds win; a defaulted bound is clamped so it never inverts the
/// range against a single explicit one.
fn resolve_bounds<T: PartialOrd + Copy>(defaults: (T, T), explicit: (Option<T>, Option<T>)) -> (T, T) {
    match explicit {
        (Some(min), Some(max)) => (min, max),
        (Some(min), None) => (min, if defaults.1 < min { min } else { defaults.1 }),
        (None, Some(max)) => (if defaults.0 > max { max } else { defaults.0 }, max),
        (None, None) => defaults,
    }
}
