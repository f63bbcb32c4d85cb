use investo_core::{
    canned_identity, seed_notifications, seed_projects, FilterCriteria, Identity, Industry,
    Notification, Project, Role, SortOrder,
};

#[test]
fn notification_serialization_uses_expected_wire_fields() {
    let notification = seed_notifications().remove(2);
    let json = serde_json::to_value(&notification).unwrap();
    assert_eq!(json["id"], "n3");
    assert_eq!(json["owner_id"], "e1");
    assert_eq!(json["type"], "project-status");
    assert_eq!(json["read"], true);
    assert_eq!(json["link"], "/projects/p1");

    let decoded: Notification = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, notification);
}

#[test]
fn project_tags_serialize_as_kebab_case() {
    let healthlink = seed_projects().remove(1);
    let json = serde_json::to_value(&healthlink).unwrap();
    assert_eq!(json["industry"], "healthcare");
    assert_eq!(json["stage"], "early-stage");
    assert_eq!(json["risk_level"], "low");
    assert_eq!(json["status"], "approved");
    let e_commerce = serde_json::to_value(Industry::ECommerce).unwrap();
    assert_eq!(e_commerce, "e-commerce");
    let real_estate = serde_json::to_value(Industry::RealEstate).unwrap();
    assert_eq!(real_estate, "real-estate");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, healthlink);
}

#[test]
fn identity_flattens_role_profile_under_role_tag() {
    let investor = canned_identity(Role::Investor);
    let json = serde_json::to_value(&investor).unwrap();
    assert_eq!(json["id"], "i1");
    assert_eq!(json["role"], "investor");
    assert_eq!(json["investment_range"]["min"], 50_000);
    assert_eq!(json["investment_range"]["max"], 500_000);
    assert_eq!(json["preferred_stages"][1], "early-stage");
    assert_eq!(json["subscription_tier"], "professional");

    let decoded: Identity = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, investor);
    assert_eq!(decoded.role(), Role::Investor);
}

#[test]
fn entrepreneur_profile_round_trips() {
    let entrepreneur = canned_identity(Role::Entrepreneur);
    let json = serde_json::to_value(&entrepreneur).unwrap();
    assert_eq!(json["role"], "entrepreneur");
    assert_eq!(json["company"], "TechStart Egypt");
    let decoded: Identity = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entrepreneur);
}

#[test]
fn criteria_and_sort_order_deserialize_from_view_payloads() {
    let criteria: FilterCriteria = serde_json::from_value(serde_json::json!({
        "query": "eco",
        "industries": ["technology", "fintech"],
        "stages": [],
        "risk_levels": ["medium"],
        "funding_range": { "min": 0, "max": 300000 }
    }))
    .unwrap();
    assert_eq!(criteria.industries.len(), 2);
    assert_eq!(criteria.funding_range.max(), 300_000);

    let order: SortOrder = serde_json::from_value(serde_json::json!("growth")).unwrap();
    assert_eq!(order, SortOrder::GrowthPrediction);
}

#[test]
fn sort_order_uses_explore_screen_select_values() {
    let cases = [
        (SortOrder::Newest, "newest"),
        (SortOrder::FundingGoal, "funding"),
        (SortOrder::GrowthPrediction, "growth"),
    ];
    for (order, tag) in cases {
        assert_eq!(serde_json::to_value(order).unwrap(), tag);
        let decoded: SortOrder = serde_json::from_str(&format!("\"{tag}\"")).unwrap();
        assert_eq!(decoded, order);
    }

    let legacy: SortOrder = serde_json::from_str("\"funding-goal\"").unwrap();
    assert_eq!(legacy, SortOrder::FundingGoal);
    assert!(serde_json::from_str::<SortOrder>("\"best-match\"").is_err());
}
