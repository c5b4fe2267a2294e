//! # spoke-schema
//!
//! JSON Schema generation and validation for spoke report types.
//!
//! Report types are defined in `spoke-core` with `#[derive(JsonSchema)]`.
//! This crate collects them into a [`SchemaRegistry`] that backs the
//! `spoke schema` command and lets consumers validate report payloads.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
