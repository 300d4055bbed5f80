use liqbook::core::classifier::{compute_risk_level, suggest_foundation};
use liqbook::models::RiskLevel;

#[test]
fn test_risk_level_buckets() {
    for fl in [0.0, 0.1, 0.5, 0.74, 0.7499] {
        assert_eq!(compute_risk_level(Some(fl)), RiskLevel::High, "FL={fl}");
    }
    for fl in [0.75, 0.8, 0.99, 0.9999] {
        assert_eq!(compute_risk_level(Some(fl)), RiskLevel::Moderate, "FL={fl}");
    }
    for fl in [1.0, 1.01, 2.5, 10.0] {
        assert_eq!(compute_risk_level(Some(fl)), RiskLevel::Low, "FL={fl}");
    }
    assert_eq!(compute_risk_level(None), RiskLevel::Unknown);
}

#[test]
fn test_boundaries_fall_into_safer_bucket() {
    assert_eq!(compute_risk_level(Some(0.75)), RiskLevel::Moderate);
    assert_eq!(compute_risk_level(Some(1.0)), RiskLevel::Low);
}

#[test]
fn test_suggestion_examples() {
    assert_eq!(
        suggest_foundation(Some(0.5), "Soft clay"),
        "Pile foundation + Ground improvement"
    );
    assert_eq!(
        suggest_foundation(Some(0.5), "Medium"),
        "Pile foundation + Ground improvement"
    );
    assert_eq!(
        suggest_foundation(Some(0.9), "Medium"),
        "Raft foundation + Partial improvement"
    );
    assert_eq!(
        suggest_foundation(Some(1.2), "Soft clay"),
        "Raft foundation + Monitoring"
    );
    assert_eq!(
        suggest_foundation(Some(1.2), "Medium"),
        "Spread/Strip foundation"
    );
    assert_eq!(suggest_foundation(None, "Soft clay"), "Review required");
}

#[test]
fn test_soft_match_is_case_insensitive_and_only_above_one() {
    assert_eq!(
        suggest_foundation(Some(1.0), "VERY SOFT silt"),
        "Raft foundation + Monitoring"
    );
    // soft ground does not change the advice below FL 1.0
    assert_eq!(
        suggest_foundation(Some(0.9), "soft"),
        "Raft foundation + Partial improvement"
    );
    assert_eq!(suggest_foundation(Some(1.5), ""), "Spread/Strip foundation");
}

#[test]
fn test_risk_level_display() {
    assert_eq!(RiskLevel::High.to_string(), "High");
    assert_eq!(RiskLevel::Unknown.as_str(), "Unknown");
}
