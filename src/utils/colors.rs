//! ANSI color helper utilities for terminal output.
use crate::models::RiskLevel;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Risk color:
/// High → red
/// Moderate → yellow
/// Low → green
/// Unknown → grey
pub fn color_for_risk(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => RED,
        RiskLevel::Moderate => YELLOW,
        RiskLevel::Low => GREEN,
        RiskLevel::Unknown => GREY,
    }
}
