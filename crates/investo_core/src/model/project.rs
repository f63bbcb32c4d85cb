//! Project catalog model.
//!
//! # Responsibility
//! - Define the read-only catalog record surfaced by discovery.
//! - Provide the tag enums shared by filters and investor preferences.
//!
//! # Invariants
//! - Catalog records are never mutated by discovery operations.
//! - `id` is stable and unique within one catalog.

use serde::{Deserialize, Serialize};

/// Stable identifier for one catalog project.
pub type ProjectId = String;

/// Industry tag attached to every project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    Technology,
    Healthcare,
    Fintech,
    ECommerce,
    Education,
    RealEstate,
    Manufacturing,
    Agriculture,
    Energy,
    Entertainment,
}

impl Industry {
    /// Every industry tag in declaration order.
    pub const ALL: [Industry; 10] = [
        Self::Technology,
        Self::Healthcare,
        Self::Fintech,
        Self::ECommerce,
        Self::Education,
        Self::RealEstate,
        Self::Manufacturing,
        Self::Agriculture,
        Self::Energy,
        Self::Entertainment,
    ];

    /// Human-readable label for chips and cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Fintech => "FinTech",
            Self::ECommerce => "E-Commerce",
            Self::Education => "Education",
            Self::RealEstate => "Real Estate",
            Self::Manufacturing => "Manufacturing",
            Self::Agriculture => "Agriculture",
            Self::Energy => "Energy",
            Self::Entertainment => "Entertainment",
        }
    }
}

/// Maturity stage of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStage {
    Idea,
    Mvp,
    EarlyStage,
    Growth,
    Expansion,
}

/// Static risk classification carried by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Review lifecycle state of a project listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Funded,
}

/// Catalog record for one fundraising project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// Identity id of the entrepreneur who owns the listing.
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub industry: Industry,
    pub stage: ProjectStage,
    pub status: ProjectStatus,
    pub risk_level: RiskLevel,
    /// Whole currency units.
    pub funding_goal: u64,
    /// Whole currency units.
    pub funding_raised: u64,
    /// Percentage of equity offered for the full goal.
    pub equity_offered: f64,
    /// Predicted yearly market growth in percent. Static catalog value.
    pub growth_prediction: f64,
    pub target_market: String,
    pub market_size: u64,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}

impl Project {
    /// Returns raised / goal as a percentage.
    ///
    /// Returns `0.0` for a zero goal. The value is not capped, so
    /// over-funded projects report more than `100.0`.
    pub fn funding_progress_percent(&self) -> f64 {
        if self.funding_goal == 0 {
            return 0.0;
        }
        self.funding_raised as f64 / self.funding_goal as f64 * 100.0
    }

    /// Amount still missing to reach the goal, saturating at zero.
    pub fn remaining_funding(&self) -> u64 {
        self.funding_goal.saturating_sub(self.funding_raised)
    }
}
