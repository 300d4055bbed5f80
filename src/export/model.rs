// src/export/model.rs

use crate::models::{SiteRecord, SiteTable};
use crate::utils::formatting::format_optional;
use serde::Serialize;

/// Flat view of a site record, derived columns included.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SiteExport {
    pub id: String,
    #[serde(rename = "FL")]
    pub fl: Option<f64>,
    #[serde(rename = "groundType")]
    pub ground_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    pub note: Option<String>,
    #[serde(rename = "riskLevel")]
    pub risk_level: String,
    pub suggestion: String,
}

impl From<&SiteRecord> for SiteExport {
    fn from(r: &SiteRecord) -> Self {
        Self {
            id: r.id().to_string(),
            fl: r.fl(),
            ground_type: r.ground_type().to_string(),
            lat: r.lat(),
            lon: r.lon(),
            note: r.note().map(str::to_string),
            risk_level: r.risk_level().to_string(),
            suggestion: r.suggestion().to_string(),
        }
    }
}

pub(crate) fn table_to_exports(table: &SiteTable) -> Vec<SiteExport> {
    table.records().iter().map(SiteExport::from).collect()
}

/// Header for CSV and terminal output; `lat`/`lon` only when the table has them.
pub(crate) fn get_headers(has_coordinates: bool) -> Vec<&'static str> {
    let mut headers = vec!["id", "FL", "groundType"];
    if has_coordinates {
        headers.extend(["lat", "lon"]);
    }
    headers.extend(["note", "riskLevel", "suggestion"]);
    headers
}

/// Convert a record into a row of strings matching [`get_headers`].
pub(crate) fn site_to_row(r: &SiteRecord, has_coordinates: bool) -> Vec<String> {
    let mut row = vec![
        r.id().to_string(),
        format_optional(r.fl()),
        r.ground_type().to_string(),
    ];
    if has_coordinates {
        row.push(format_optional(r.lat()));
        row.push(format_optional(r.lon()));
    }
    row.push(r.note().unwrap_or("").to_string());
    row.push(r.risk_level().to_string());
    row.push(r.suggestion().to_string());
    row
}
