pub mod site;

pub use site::{RiskLevel, SiteRecord, SiteTable};
