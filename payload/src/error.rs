//! Error types for payload construction

use battle_valuegen::ValueGenerationError;
use thiserror::Error;

/// A schema node that cannot be walked. Paths are dotted from the root
/// property, with `[]` marking an array's item descriptor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Schema node at {path} has no type")]
    MissingType { path: String },
    #[error("Schema node at {path} has unknown type: {type_name}")]
    UnknownType { path: String, type_name: String },
    #[error("Array schema at {path} has no items")]
    MissingItems { path: String },
}

/// Errors that can occur while building a payload
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("Value generation failed at {path}: {source}")]
    ValueGeneration {
        path: String,
        #[source]
        source: ValueGenerationError,
    },
}

pub type PayloadResult<T> = Result<T, PayloadError>;
