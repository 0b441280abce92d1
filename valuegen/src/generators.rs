//! Default generators for each supported kind

use crate::{GeneratedValue, ValueGenerationError, ValueGenerator};
use battle_core::{Value, ValueKind};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Lowercase ASCII strings with a length drawn from an inclusive range
#[derive(Debug, Clone)]
pub struct StringGenerator {
    kind: ValueKind,
    min_len: usize,
    max_len: usize,
}

impl StringGenerator {
    pub fn new(min_len: usize, max_len: usize) -> Result<Self, ValueGenerationError> {
        if min_len > max_len {
            return Err(ValueGenerationError::invalid_range(
                ValueKind::String,
                min_len,
                max_len,
            ));
        }
        Ok(Self {
            kind: ValueKind::String,
            min_len,
            max_len,
        })
    }
}

impl ValueGenerator for StringGenerator {
    fn kind(&self) -> &ValueKind {
        &self.kind
    }

    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let len = rng.gen_range(self.min_len..=self.max_len);
        let s: String = (0..len)
            .map(|_| rng.gen_range(b'a'..=b'z') as char)
            .collect();
        GeneratedValue::new(Value::String(s), format!("string of length {}", len))
    }
}

/// Floats drawn uniformly from an inclusive range
#[derive(Debug, Clone)]
pub struct NumberGenerator {
    kind: ValueKind,
    min: f64,
    max: f64,
}

impl NumberGenerator {
    /// The width `max - min` must itself be finite for the draw to be defined.
    pub fn new(min: f64, max: f64) -> Result<Self, ValueGenerationError> {
        if min > max || !(max - min).is_finite() {
            return Err(ValueGenerationError::invalid_range(ValueKind::Number, min, max));
        }
        Ok(Self {
            kind: ValueKind::Number,
            min,
            max,
        })
    }
}

impl ValueGenerator for NumberGenerator {
    fn kind(&self) -> &ValueKind {
        &self.kind
    }

    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let n = rng.gen_range(self.min..=self.max);
        GeneratedValue::new(
            Value::Float(n),
            format!("number in [{}, {}]", self.min, self.max),
        )
    }
}

/// Integers drawn uniformly from an inclusive range
#[derive(Debug, Clone)]
pub struct IntegerGenerator {
    kind: ValueKind,
    min: i64,
    max: i64,
}

impl IntegerGenerator {
    pub fn new(min: i64, max: i64) -> Result<Self, ValueGenerationError> {
        if min > max {
            return Err(ValueGenerationError::invalid_range(ValueKind::Integer, min, max));
        }
        Ok(Self {
            kind: ValueKind::Integer,
            min,
            max,
        })
    }
}

impl ValueGenerator for IntegerGenerator {
    fn kind(&self) -> &ValueKind {
        &self.kind
    }

    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let i = rng.gen_range(self.min..=self.max);
        GeneratedValue::new(
            Value::Int(i),
            format!("integer in [{}, {}]", self.min, self.max),
        )
    }
}

/// Fair coin
#[derive(Debug, Clone)]
pub struct BooleanGenerator {
    kind: ValueKind,
}

impl BooleanGenerator {
    pub fn new() -> Self {
        Self {
            kind: ValueKind::Boolean,
        }
    }
}

impl Default for BooleanGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueGenerator for BooleanGenerator {
    fn kind(&self) -> &ValueKind {
        &self.kind
    }

    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        GeneratedValue::new(Value::Bool(rng.gen_bool(0.5)), "boolean")
    }
}

/// Uniform pick from a fixed, non-empty list of values
#[derive(Debug, Clone)]
pub struct ChoiceGenerator {
    kind: ValueKind,
    choices: Vec<Value>,
}

impl ChoiceGenerator {
    pub fn new(kind: ValueKind, choices: Vec<Value>) -> Result<Self, ValueGenerationError> {
        if choices.is_empty() {
            return Err(ValueGenerationError::EmptyChoices(kind));
        }
        if let Some(value) = choices.iter().find(|v| !kind.admits(v)) {
            return Err(ValueGenerationError::ChoiceKind {
                value: value.clone(),
                kind,
            });
        }
        Ok(Self { kind, choices })
    }
}

impl ValueGenerator for ChoiceGenerator {
    fn kind(&self) -> &ValueKind {
        &self.kind
    }

    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        // Non-empty by construction
        let value = self.choices.choose(rng).cloned().unwrap_or(Value::Null);
        GeneratedValue::new(
            value,
            format!("one of {} choices", self.choices.len()),
        )
    }
}

/// Arrays of items drawn from one nested generator
#[derive(Debug)]
pub struct ArrayGenerator {
    kind: ValueKind,
    item: Box<dyn ValueGenerator>,
    min_len: usize,
    max_len: usize,
}

impl ArrayGenerator {
    pub fn new(
        item: Box<dyn ValueGenerator>,
        min_len: usize,
        max_len: usize,
    ) -> Result<Self, ValueGenerationError> {
        let kind = ValueKind::array_of(item.kind().clone());
        if min_len > max_len {
            return Err(ValueGenerationError::invalid_range(kind, min_len, max_len));
        }
        Ok(Self {
            kind,
            item,
            min_len,
            max_len,
        })
    }
}

impl ValueGenerator for ArrayGenerator {
    fn kind(&self) -> &ValueKind {
        &self.kind
    }

    fn next(&self, rng: &mut dyn RngCore) -> GeneratedValue {
        let len = rng.gen_range(self.min_len..=self.max_len);
        let items: Vec<Value> = (0..len).map(|_| self.item.next(rng).value).collect();
        GeneratedValue::new(
            Value::List(items),
            format!("{} with {} items", self.kind, len),
        )
    }
}
