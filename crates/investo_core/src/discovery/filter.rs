//! Discovery filter engine.
//!
//! # Responsibility
//! - Select the catalog subset matching one `FilterCriteria` value.
//!
//! # Invariants
//! - Pure: the catalog is borrowed immutably and no state is kept.
//! - Result order equals catalog order.
//! - `count == items.len()`.

use crate::discovery::criteria::FilterCriteria;
use crate::model::project::Project;
use log::debug;

/// Filtered catalog view.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    /// Matching projects in catalog order.
    pub items: Vec<Project>,
    /// Number of matching projects.
    pub count: usize,
}

/// Filters `catalog` by `criteria`.
///
/// A project is kept when the text, industry, stage, risk and funding
/// predicates all hold. An empty catalog yields an empty result.
pub fn filter_projects(catalog: &[Project], criteria: &FilterCriteria) -> FilterResult {
    let needle = criteria.query.to_lowercase();
    let items: Vec<Project> = catalog
        .iter()
        .filter(|project| matches_criteria(project, criteria, needle.as_str()))
        .cloned()
        .collect();
    let count = items.len();

    debug!(
        "event=discovery_filter module=discovery status=ok catalog_len={} result_len={} has_query={}",
        catalog.len(),
        count,
        !needle.is_empty()
    );

    FilterResult { items, count }
}

/// Returns whether one project satisfies every predicate in `criteria`.
///
/// `needle` must be the lowercased query.
fn matches_criteria(project: &Project, criteria: &FilterCriteria, needle: &str) -> bool {
    matches_text(project, needle)
        && (criteria.industries.is_empty() || criteria.industries.contains(&project.industry))
        && (criteria.stages.is_empty() || criteria.stages.contains(&project.stage))
        && (criteria.risk_levels.is_empty() || criteria.risk_levels.contains(&project.risk_level))
        && criteria.funding_range.contains(project.funding_goal)
}

fn matches_text(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    project.name.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
}
