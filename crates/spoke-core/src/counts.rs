//! Pass/fail tallies derived from findings.
//!
//! Counts have no identity of their own: they are recomputed from the catalog
//! and the findings list whenever needed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FindingKind;
use crate::findings::CheckRef;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Tally {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
}

impl Tally {
    pub const fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    #[must_use]
    pub const fn merged(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            passed: self.passed + other.passed,
            failed: self.failed + other.failed,
        }
    }

    /// Percentage of passed checks; `0.0` for an empty tally.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.passed) / f64::from(self.total) * 100.0
        }
    }
}

/// Outcome of a single workout × variant check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckOutcome {
    pub check: CheckRef,
    pub passed: bool,
    /// Kinds of every finding that references this check, blocking or not.
    pub kinds: Vec<FindingKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GoalCounts {
    pub goal: String,
    pub workouts: u32,
    pub checks: Tally,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Counts {
    /// Every workout × variant check across the catalog.
    pub overall: Tally,
    /// Same computation restricted to each located goal, in schema order.
    pub by_goal: Vec<GoalCounts>,
    /// The single catalog-level check: fails iff any goal set mismatch exists.
    pub goal_set: Tally,
    /// Findings that were reported but did not fail their check.
    pub advisory_findings: u32,
}

impl Counts {
    /// Process exit contract: at least one failed check anywhere.
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.overall.failed > 0 || self.goal_set.failed > 0
    }

    #[must_use]
    pub fn goal(&self, name: &str) -> Option<&GoalCounts> {
        self.by_goal.iter().find(|counts| counts.goal == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_records_and_rates() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(true);
        tally.record(false);
        tally.record(true);
        assert_eq!(tally, Tally { total: 4, passed: 3, failed: 1 });
        assert!((tally.success_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_tally_rate_is_zero() {
        assert!(Tally::default().success_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn goal_set_failure_counts_as_failure() {
        let counts = Counts {
            goal_set: Tally { total: 1, passed: 0, failed: 1 },
            ..Counts::default()
        };
        assert!(counts.has_failures());
        assert!(!Counts::default().has_failures());
    }
}
