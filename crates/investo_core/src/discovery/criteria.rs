//! Filter criteria for project discovery.
//!
//! # Responsibility
//! - Hold the user-edited predicates applied to the catalog.
//! - Reject impossible funding ranges at construction time.
//!
//! # Invariants
//! - `FundingRange::min <= FundingRange::max` for every constructed value,
//!   including deserialized ones.
//! - Empty tag sets are wildcards.
//! - Toggling a tag twice restores an equal criteria value.

use crate::model::project::{Industry, ProjectStage, RiskLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound of the funding slider used by the explore screen.
pub const DEFAULT_FUNDING_MAX: u64 = 1_000_000;

/// Criteria construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaError {
    /// Funding range whose lower bound exceeds its upper bound.
    InvalidRange { min: u64, max: u64 },
}

impl Display for CriteriaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid funding range: min {min} exceeds max {max}")
            }
        }
    }
}

impl Error for CriteriaError {}

/// Inclusive funding-goal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFundingRange")]
pub struct FundingRange {
    min: u64,
    max: u64,
}

#[derive(Deserialize)]
struct RawFundingRange {
    min: u64,
    max: u64,
}

impl TryFrom<RawFundingRange> for FundingRange {
    type Error = CriteriaError;

    fn try_from(value: RawFundingRange) -> Result<Self, Self::Error> {
        Self::new(value.min, value.max)
    }
}

impl FundingRange {
    /// Creates an inclusive range.
    ///
    /// # Errors
    /// - Returns `CriteriaError::InvalidRange` when `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, CriteriaError> {
        if min > max {
            return Err(CriteriaError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range accepting every representable funding goal.
    pub fn unbounded() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Returns whether `value` lies inside the inclusive bounds.
    pub fn contains(&self, value: u64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for FundingRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_FUNDING_MAX,
        }
    }
}

/// Predicates selecting the visible subset of the catalog.
///
/// Recreated per view session; carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name and description.
    pub query: String,
    pub industries: BTreeSet<Industry>,
    pub stages: BTreeSet<ProjectStage>,
    pub risk_levels: BTreeSet<RiskLevel>,
    pub funding_range: FundingRange,
}

impl FilterCriteria {
    /// Default criteria with a free-text query.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Replaces the funding range.
    ///
    /// # Errors
    /// - Returns `CriteriaError::InvalidRange` when `min > max`; `self` is
    ///   dropped unchanged in that case.
    pub fn with_funding_range(mut self, min: u64, max: u64) -> Result<Self, CriteriaError> {
        self.funding_range = FundingRange::new(min, max)?;
        Ok(self)
    }

    /// Adds `industry` when absent, removes it when present.
    pub fn toggle_industry(&mut self, industry: Industry) {
        toggle(&mut self.industries, industry);
    }

    /// Adds `stage` when absent, removes it when present.
    pub fn toggle_stage(&mut self, stage: ProjectStage) {
        toggle(&mut self.stages, stage);
    }

    /// Adds `risk` when absent, removes it when present.
    pub fn toggle_risk(&mut self, risk: RiskLevel) {
        toggle(&mut self.risk_levels, risk);
    }

    /// Returns whether no predicate can reject any project.
    pub fn is_widest(&self) -> bool {
        self.query.is_empty()
            && self.industries.is_empty()
            && self.stages.is_empty()
            && self.risk_levels.is_empty()
            && self.funding_range == FundingRange::unbounded()
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

#[cfg(test)]
mod tests {
    use super::{CriteriaError, FilterCriteria, FundingRange, DEFAULT_FUNDING_MAX};
    use crate::model::project::{Industry, ProjectStage, RiskLevel};

    #[test]
    fn funding_range_rejects_reversed_bounds() {
        let err = FundingRange::new(10, 5).expect_err("reversed range must fail");
        assert_eq!(err, CriteriaError::InvalidRange { min: 10, max: 5 });
    }

    #[test]
    fn funding_range_is_inclusive() {
        let range = FundingRange::new(100, 200).expect("valid range");
        assert!(range.contains(100));
        assert!(range.contains(200));
        assert!(!range.contains(99));
        assert!(!range.contains(201));
    }

    #[test]
    fn single_point_range_is_valid() {
        let range = FundingRange::new(7, 7).expect("point range");
        assert!(range.contains(7));
    }

    #[test]
    fn default_criteria_uses_slider_bounds() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.funding_range.min(), 0);
        assert_eq!(criteria.funding_range.max(), DEFAULT_FUNDING_MAX);
        assert!(!criteria.is_widest());
    }

    #[test]
    fn toggle_twice_restores_equal_criteria() {
        let original = FilterCriteria::with_query("eco");
        let mut toggled = original.clone();

        toggled.toggle_industry(Industry::Technology);
        toggled.toggle_stage(ProjectStage::Mvp);
        toggled.toggle_risk(RiskLevel::Low);
        assert_ne!(toggled, original);

        toggled.toggle_industry(Industry::Technology);
        toggled.toggle_stage(ProjectStage::Mvp);
        toggled.toggle_risk(RiskLevel::Low);
        assert_eq!(toggled, original);
    }

    #[test]
    fn with_funding_range_propagates_invalid_range() {
        let err = FilterCriteria::default()
            .with_funding_range(500, 1)
            .expect_err("reversed range must fail");
        assert!(matches!(err, CriteriaError::InvalidRange { .. }));
    }

    #[test]
    fn unbounded_range_makes_default_criteria_widest() {
        let criteria = FilterCriteria {
            funding_range: FundingRange::unbounded(),
            ..FilterCriteria::default()
        };
        assert!(criteria.is_widest());
    }
}
