//! # spoke-audit
//!
//! The validation half of spoke. Consumes the catalog produced by
//! `spoke-parser` and derives everything reported about it:
//!
//! - `validate`: typed findings per workout × variant slot, plus the
//!   catalog-level goal set check
//! - `aggregate`: check outcomes and pass/fail counts
//! - `inventory`: descriptive totals, no pass/fail
//! - `scenarios`: persona spot-checks driven by check outcomes only
//! - `pipeline`: text in, report out
//!
//! Every stage is a pure function of its inputs.

pub mod aggregate;
pub mod inventory;
pub mod pipeline;
pub mod scenarios;
pub mod validate;

pub use aggregate::{aggregate, outcomes};
pub use inventory::inventory;
pub use pipeline::{run, run_scenarios};
pub use scenarios::simulate;
pub use validate::validate;

/// Saturating `usize` → `u32` for report counters.
pub(crate) fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
