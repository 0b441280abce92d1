//! Schema-driven payload construction
//!
//! Walks a JSON-schema-like type description and builds two trees in
//! lockstep:
//! - a concrete base payload with one random value per leaf
//! - a mirrored tree holding the generator behind every leaf, so later test
//!   rounds can draw fresh values without walking the schema again

pub mod builder;
pub mod error;
pub mod schema;
pub mod tree;

pub use builder::{BuiltPayload, PayloadBody, PayloadBuilder};
pub use error::{PayloadError, SchemaError};
pub use schema::{NodeShape, SchemaNode};
pub use tree::GeneratorTree;
