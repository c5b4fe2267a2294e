//! # spoke-parser
//!
//! Schema-aware extraction of workout catalogs from loosely structured,
//! brace-delimited source text (e.g. a JavaScript object literal).
//!
//! No general-purpose parser is involved. The document is scanned as raw
//! text:
//! - **Block Locator** ([`locator`]): finds the span of the block following a
//!   label by depth counting, anchored so `climb` never matches `climbing`
//! - **Field Extractor** ([`fields`]): quoted text and bare integers by key,
//!   confined to a span
//! - **Record Builder** ([`builder`]): walks goal → intensity → workout →
//!   variant in schema order and produces a `spoke_core::catalog::Catalog`
//!
//! Only an unbalanced document (or a missing root block) is fatal; every
//! other absence flows forward as data.

pub mod builder;
pub mod error;
pub mod fields;
pub mod locator;
pub mod span;

pub use builder::{BuildOutput, build};
pub use error::StructuralError;
pub use span::Span;
