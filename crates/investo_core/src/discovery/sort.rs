//! Optional ordering step applied after filtering.

use crate::model::project::Project;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};

/// Caller-chosen ordering for a filtered project list.
///
/// Wire tags follow the explore screen's sort select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Most recently created first.
    #[serde(rename = "newest")]
    Newest,
    /// Highest funding goal first.
    #[serde(rename = "funding", alias = "funding-goal")]
    FundingGoal,
    /// Highest growth prediction first.
    #[serde(rename = "growth", alias = "growth-prediction")]
    GrowthPrediction,
}

/// Sorts `projects` in place, descending by the chosen key.
///
/// The sort is stable: ties keep their incoming relative order.
pub fn sort_projects(projects: &mut [Project], order: SortOrder) {
    match order {
        SortOrder::Newest => projects.sort_by_key(|p| Reverse(p.created_at)),
        SortOrder::FundingGoal => projects.sort_by_key(|p| Reverse(p.funding_goal)),
        SortOrder::GrowthPrediction => projects.sort_by(growth_descending),
    }
}

fn growth_descending(a: &Project, b: &Project) -> Ordering {
    b.growth_prediction.total_cmp(&a.growth_prediction)
}
