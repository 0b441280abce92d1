//! Schema node model

use crate::error::SchemaError;
use battle_core::{Value, ValueKind};
use battle_valuegen::LeafConstraints;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A JSON-schema-like type description.
///
/// `type` is kept as raw text so an unknown type surfaces as a
/// `SchemaError` with its path instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

/// What the builder does with a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeShape<'a> {
    /// Recurse into each property
    Object(&'a IndexMap<String, SchemaNode>),
    /// Allocate one generator of this kind
    Leaf(ValueKind),
}

impl SchemaNode {
    /// A node of the given type name with no further detail
    pub fn typed(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            ..Default::default()
        }
    }

    pub fn object() -> Self {
        Self::typed("object")
    }

    pub fn array_of(items: SchemaNode) -> Self {
        Self {
            type_name: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.properties.insert(name.into(), node);
        self
    }

    pub fn with_choices(mut self, choices: Vec<Value>) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn with_bounds(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Parse a schema document
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Classify this node as an object to recurse into or a leaf to generate.
    pub fn shape(&self, path: &str) -> Result<NodeShape<'_>, SchemaError> {
        match self.type_name.as_deref() {
            Some("object") => Ok(NodeShape::Object(&self.properties)),
            _ => self.kind(path).map(NodeShape::Leaf),
        }
    }

    /// The value kind this node declares. Object nodes report
    /// `ValueKind::Object`, which only the builder knows how to walk.
    pub fn kind(&self, path: &str) -> Result<ValueKind, SchemaError> {
        let type_name = self
            .type_name
            .as_deref()
            .ok_or_else(|| SchemaError::MissingType {
                path: path.to_string(),
            })?;

        if type_name == "array" {
            let items = self.items.as_deref().ok_or_else(|| SchemaError::MissingItems {
                path: path.to_string(),
            })?;
            let item_kind = items.kind(&format!("{}[]", path))?;
            return Ok(ValueKind::array_of(item_kind));
        }

        type_name
            .parse::<ValueKind>()
            .map_err(|_| SchemaError::UnknownType {
                path: path.to_string(),
                type_name: type_name.to_string(),
            })
    }

    /// Generation constraints carried by a leaf
    pub fn constraints(&self) -> LeafConstraints {
        LeafConstraints {
            choices: self.choices.clone(),
            minimum: self.minimum,
            maximum: self.maximum,
            min_items: self.min_items,
            max_items: self.max_items,
        }
    }
}
