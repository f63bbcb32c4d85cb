//! Canned identities, notifications and catalog used by the mocked client.
//!
//! # Invariants
//! - Seed order is the insertion order observed by callers.
//! - Every seeded identity passes `Identity::validate()`.

use crate::discovery::criteria::FundingRange;
use crate::model::identity::{Identity, Role, RoleProfile, SubscriptionTier};
use crate::model::notification::{Notification, NotificationKind};
use crate::model::project::{Industry, Project, ProjectStage, ProjectStatus, RiskLevel};

/// Canned identity returned by the mocked login for `role`.
pub fn canned_identity(role: Role) -> Identity {
    match role {
        Role::Entrepreneur => Identity {
            id: "e1".to_string(),
            email: "ahmed@techstart.com".to_string(),
            first_name: "Ahmed".to_string(),
            last_name: "Hassan".to_string(),
            avatar: Some(
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150".to_string(),
            ),
            company: Some("TechStart Egypt".to_string()),
            created_at: 1_705_312_800_000,
            profile: RoleProfile::Entrepreneur {
                bio: Some(
                    "Serial entrepreneur with 10+ years experience in tech startups".to_string(),
                ),
                experience: Some("Founded 3 successful startups in MENA region".to_string()),
                linked_in: Some("https://linkedin.com/in/ahmedhassan".to_string()),
            },
        },
        Role::Investor => Identity {
            id: "i1".to_string(),
            email: "mariam@investments.com".to_string(),
            first_name: "Mariam".to_string(),
            last_name: "Ahmed".to_string(),
            avatar: Some(
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150".to_string(),
            ),
            company: Some("Cairo Ventures".to_string()),
            created_at: 1_700_474_400_000,
            profile: RoleProfile::Investor {
                investment_range: FundingRange::new(50_000, 500_000).ok(),
                preferred_industries: vec![
                    Industry::Technology,
                    Industry::Fintech,
                    Industry::Healthcare,
                ],
                risk_tolerance: Some(RiskLevel::Medium),
                preferred_stages: vec![ProjectStage::Mvp, ProjectStage::EarlyStage],
                subscription_tier: Some(SubscriptionTier::Professional),
            },
        },
    }
}

/// Notifications present at process start.
pub fn seed_notifications() -> Vec<Notification> {
    vec![
        notification(
            "n1",
            "e1",
            NotificationKind::Match,
            "New Investor Match",
            "Sarah Ahmed from Cairo Ventures matches 92% with your project EcoTrack",
            false,
            "/projects/p1",
            1_718_467_200_000,
        ),
        notification(
            "n2",
            "e1",
            NotificationKind::Message,
            "New Message",
            "You have a new message from Sarah Ahmed regarding EcoTrack",
            false,
            "/chat/c1",
            1_718_461_800_000,
        ),
        notification(
            "n3",
            "e1",
            NotificationKind::ProjectStatus,
            "Project Approved",
            "Your project EcoTrack has been approved and is now visible to investors",
            true,
            "/projects/p1",
            1_718_359_200_000,
        ),
        notification(
            "n4",
            "i1",
            NotificationKind::Match,
            "New Project Match",
            "EcoTrack matches your investment criteria with 92% compatibility",
            false,
            "/projects/p1",
            1_718_452_800_000,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn notification(
    id: &str,
    owner_id: &str,
    kind: NotificationKind,
    title: &str,
    body: &str,
    read: bool,
    link: &str,
    created_at: i64,
) -> Notification {
    Notification {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        kind,
        title: title.to_string(),
        body: body.to_string(),
        read,
        link: Some(link.to_string()),
        created_at,
    }
}

/// The fixed project catalog.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_string(),
            owner_id: "e1".to_string(),
            name: "EcoTrack".to_string(),
            description: "AI-powered sustainability tracking platform for businesses. Monitor carbon footprint, optimize resources, and achieve ESG compliance with real-time analytics and actionable insights.".to_string(),
            industry: Industry::Technology,
            stage: ProjectStage::Mvp,
            status: ProjectStatus::Approved,
            risk_level: RiskLevel::Medium,
            funding_goal: 250_000,
            funding_raised: 75_000,
            equity_offered: 15.0,
            growth_prediction: 23.5,
            target_market: "B2B - Medium to Large Enterprises in MENA".to_string(),
            market_size: 5_000_000_000,
            created_at: 1_705_312_800_000,
            updated_at: 1_718_445_600_000,
        },
        Project {
            id: "p2".to_string(),
            owner_id: "e2".to_string(),
            name: "HealthLink".to_string(),
            description: "Telemedicine platform connecting patients with specialists across Egypt. Features include video consultations, e-prescriptions, and health record management.".to_string(),
            industry: Industry::Healthcare,
            stage: ProjectStage::EarlyStage,
            status: ProjectStatus::Approved,
            risk_level: RiskLevel::Low,
            funding_goal: 500_000,
            funding_raised: 200_000,
            equity_offered: 20.0,
            growth_prediction: 31.2,
            target_market: "B2C - Healthcare consumers in Egypt".to_string(),
            market_size: 8_000_000_000,
            created_at: 1_706_781_600_000,
            updated_at: 1_718_013_600_000,
        },
        Project {
            id: "p3".to_string(),
            owner_id: "e3".to_string(),
            name: "PayFlow".to_string(),
            description: "Digital payment infrastructure for SMEs in emerging markets. Simplify payments, invoicing, and financial operations with one integrated platform.".to_string(),
            industry: Industry::Fintech,
            stage: ProjectStage::Growth,
            status: ProjectStatus::Approved,
            risk_level: RiskLevel::Low,
            funding_goal: 1_000_000,
            funding_raised: 650_000,
            equity_offered: 12.0,
            growth_prediction: 28.7,
            target_market: "B2B - SMEs across MENA region".to_string(),
            market_size: 15_000_000_000,
            created_at: 1_692_093_600_000,
            updated_at: 1_717_236_000_000,
        },
        Project {
            id: "p4".to_string(),
            owner_id: "e4".to_string(),
            name: "AgriSmart".to_string(),
            description: "IoT-based precision agriculture platform. Smart sensors, drone monitoring, and AI analytics to optimize crop yields and reduce water consumption.".to_string(),
            industry: Industry::Agriculture,
            stage: ProjectStage::Mvp,
            status: ProjectStatus::Approved,
            risk_level: RiskLevel::High,
            funding_goal: 350_000,
            funding_raised: 50_000,
            equity_offered: 18.0,
            growth_prediction: 18.5,
            target_market: "B2B - Large agricultural operations in Egypt".to_string(),
            market_size: 3_000_000_000,
            created_at: 1_709_287_200_000,
            updated_at: 1_716_199_200_000,
        },
        Project {
            id: "p5".to_string(),
            owner_id: "e5".to_string(),
            name: "EduTech Pro".to_string(),
            description: "Adaptive learning platform using AI to personalize education. Features include intelligent tutoring, progress tracking, and curriculum optimization.".to_string(),
            industry: Industry::Education,
            stage: ProjectStage::EarlyStage,
            status: ProjectStatus::Approved,
            risk_level: RiskLevel::Medium,
            funding_goal: 400_000,
            funding_raised: 120_000,
            equity_offered: 22.0,
            growth_prediction: 25.3,
            target_market: "B2C/B2B - Students and educational institutions".to_string(),
            market_size: 6_000_000_000,
            created_at: 1_705_744_800_000,
            updated_at: 1_717_581_600_000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{canned_identity, seed_notifications, seed_projects};
    use crate::model::identity::Role;
    use std::collections::HashSet;

    #[test]
    fn canned_identities_are_valid_and_match_role() {
        for role in [Role::Entrepreneur, Role::Investor] {
            let identity = canned_identity(role);
            identity.validate().expect("seed identity should validate");
            assert_eq!(identity.role(), role);
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let notification_ids: HashSet<String> =
            seed_notifications().into_iter().map(|n| n.id).collect();
        assert_eq!(notification_ids.len(), 4);

        let project_ids: HashSet<String> = seed_projects().into_iter().map(|p| p.id).collect();
        assert_eq!(project_ids.len(), 5);
    }
}
