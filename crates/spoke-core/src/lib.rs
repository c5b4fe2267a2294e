//! # spoke-core
//!
//! Core types and error types for spoke, the workout catalog auditor.
//!
//! This crate provides the foundational types shared across all spoke crates:
//! - The extracted catalog model (goal → intensity → workout → variant)
//! - Catalog schema and content rule parameters
//! - Finding taxonomy, check references and pass/fail tallies
//! - Scenario personas
//! - CLI report types

pub mod catalog;
pub mod counts;
pub mod enums;
pub mod errors;
pub mod findings;
pub mod persona;
pub mod responses;
pub mod schema;
