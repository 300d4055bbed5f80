//! Threshold rules mapping FL (and ground type) to risk and foundation advice.

use crate::models::RiskLevel;

pub const HIGH_RISK_BELOW: f64 = 0.75;
pub const SAFE_FROM: f64 = 1.0;

pub const PILE_AND_IMPROVEMENT: &str = "Pile foundation + Ground improvement";
pub const RAFT_AND_PARTIAL: &str = "Raft foundation + Partial improvement";
pub const RAFT_AND_MONITORING: &str = "Raft foundation + Monitoring";
pub const SPREAD_STRIP: &str = "Spread/Strip foundation";
pub const REVIEW_REQUIRED: &str = "Review required";

/// Risk bucket for an FL value. Boundaries are exclusive: 0.75 is Moderate, 1.0 is Low.
pub fn compute_risk_level(fl: Option<f64>) -> RiskLevel {
    match fl {
        None => RiskLevel::Unknown,
        Some(v) if v < HIGH_RISK_BELOW => RiskLevel::High,
        Some(v) if v < SAFE_FROM => RiskLevel::Moderate,
        Some(_) => RiskLevel::Low,
    }
}

/// Foundation recommendation.
///
/// Ground type only matters once FL reaches 1.0: a "soft" ground label
/// (any case) turns the spread/strip advice into raft + monitoring.
pub fn suggest_foundation(fl: Option<f64>, ground_type: &str) -> &'static str {
    let Some(v) = fl else {
        return REVIEW_REQUIRED;
    };

    if v < HIGH_RISK_BELOW {
        PILE_AND_IMPROVEMENT
    } else if v < SAFE_FROM {
        RAFT_AND_PARTIAL
    } else if ground_type.to_lowercase().contains("soft") {
        RAFT_AND_MONITORING
    } else {
        SPREAD_STRIP
    }
}
