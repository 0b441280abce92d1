//! Battle Core Types
//!
//! This crate provides the foundational types shared by the generators:
//! - The `Value` enum (scalars, lists and ordered objects, JSON-shaped)
//! - `ValueKind`, the declared kind of a generated leaf
//! - Ordered map aliases used for scenarios and payloads

mod kind;
mod value;

pub use kind::*;
pub use value::*;
