//! Baseline and variation generation from vectors

use crate::error::ConfigResult;
use crate::key::VariationKey;
use crate::record::VectorRecord;
use crate::vector::{FieldVector, RangeVector, Vector, VectorSpec};
use battle_core::{Object, Value};
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Section name -> field name -> chosen value
pub type BaseScenario = IndexMap<String, Object>;

/// Variation key -> alternative values, for one section
pub type VariationMap = IndexMap<VariationKey, Vec<Value>>;

/// Section name -> variations of that section
pub type Variations = IndexMap<String, VariationMap>;

/// Output of the engine: a fully populated baseline plus the alternatives
/// to probe. Range alternatives are `(low, high)` pairs stored as
/// two-element lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub base: BaseScenario,
    pub variations: Variations,
}

impl Scenario {
    /// The baseline value of a field
    pub fn base_value(&self, section: &str, field: &str) -> Option<&Value> {
        self.base.get(section)?.get(field)
    }

    /// The alternatives recorded for a key, if any
    pub fn variations_for(&self, section: &str, key: &VariationKey) -> Option<&[Value]> {
        self.variations.get(section)?.get(key).map(Vec::as_slice)
    }

    /// Total number of alternative values across all sections
    pub fn variation_count(&self) -> usize {
        self.variations
            .values()
            .flat_map(|section| section.values())
            .map(Vec::len)
            .sum()
    }
}

/// Interprets vectors into a baseline scenario and its variations
pub struct VectorEngine;

impl VectorEngine {
    /// Single pass over `vectors`, in order.
    ///
    /// Baseline selection is deterministic. Only `choose_many` draws from
    /// `rng`.
    pub fn generate(vectors: &[Vector], rng: &mut impl Rng) -> Scenario {
        let mut scenario = Scenario::default();

        for vector in vectors {
            let base = scenario.base.entry(vector.section.clone()).or_default();
            let variations = scenario
                .variations
                .entry(vector.section.clone())
                .or_default();

            let alternatives = match &vector.spec {
                VectorSpec::ChooseRange(range) => {
                    let ((low, high), alternatives) = Self::range_variations(range);
                    let (low_key, high_key) = range.keys();
                    base.insert(low_key.to_string(), low);
                    base.insert(high_key.to_string(), high);
                    Some(alternatives)
                }
                VectorSpec::ChooseOne(field) => {
                    base.insert(field.key().to_string(), field.base().clone());
                    None
                }
                VectorSpec::ChooseEach(field) => {
                    base.insert(field.key().to_string(), field.base().clone());
                    Some(Self::each_variations(field))
                }
                VectorSpec::ChooseMany(field) => {
                    base.insert(field.key().to_string(), field.base().clone());
                    Some(Self::many_variations(field, rng))
                }
            };

            debug!(
                section = %vector.section,
                key = %vector.variation_key(),
                rule = %vector.rule(),
                variations = alternatives.as_ref().map_or(0, Vec::len),
                "applied vector"
            );

            if let Some(alternatives) = alternatives {
                variations.insert(vector.variation_key(), alternatives);
            }
        }

        scenario
    }

    /// Validate every record, then generate. Nothing is generated if any
    /// record is invalid.
    pub fn generate_records(
        records: Vec<VectorRecord>,
        rng: &mut impl Rng,
    ) -> ConfigResult<Scenario> {
        let vectors = records
            .into_iter()
            .map(Vector::try_from)
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(Self::generate(&vectors, rng))
    }

    /// Base pair and alternative pairs for a range vector.
    ///
    /// Without defaults only the narrowest span is offered as an
    /// alternative, never the widest.
    fn range_variations(range: &RangeVector) -> ((Value, Value), Vec<Value>) {
        let (min_range, max_range) = (range.min_range(), range.max_range());

        let Some((first, rest)) = range.defaults().split_first() else {
            let payload = range.payload();
            let base = (payload[0].0.clone(), payload[1].1.clone());
            return (base, vec![Value::pair(min_range.0, min_range.1)]);
        };

        let mut pool: Vec<(Value, Value)> = Vec::new();
        for pair in rest {
            if pair != first && !pool.contains(pair) {
                pool.push(pair.clone());
            }
        }
        if !range.defaults_only() {
            for extreme in [min_range, max_range] {
                if !range.defaults().contains(&extreme) && !pool.contains(&extreme) {
                    pool.push(extreme);
                }
            }
        }

        let alternatives = pool
            .into_iter()
            .map(|(low, high)| Value::pair(low, high))
            .collect();
        (first.clone(), alternatives)
    }

    /// Every payload element other than the base, first occurrence only.
    fn each_variations(field: &FieldVector) -> Vec<Value> {
        let base = field.base();
        let mut out: Vec<Value> = Vec::new();
        for value in field.payload() {
            if value != base && !out.contains(value) {
                out.push(value.clone());
            }
        }
        out
    }

    /// A random singleton, a random half and the whole payload, minus any
    /// candidate holding the same members as the base.
    fn many_variations(field: &FieldVector, rng: &mut impl Rng) -> Vec<Value> {
        let payload = field.payload();
        let Some(one) = payload.choose(rng) else {
            return Vec::new();
        };

        let half = (payload.len() + 1) / 2;
        let candidates = [
            Value::List(vec![one.clone()]),
            Value::List(payload.choose_multiple(rng, half).cloned().collect()),
            Value::List(payload.to_vec()),
        ];

        let base = field.base();
        candidates
            .into_iter()
            .filter(|candidate| !candidate.same_members(base))
            .collect()
    }
}
