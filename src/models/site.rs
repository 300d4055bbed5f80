use crate::core::classifier::{compute_risk_level, suggest_foundation};
use serde::Serialize;
use std::fmt;

/// Liquefaction risk bucket derived from the FL value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
    Unknown,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Low => "Low",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One investigation point.
///
/// `risk_level` and `suggestion` are derived from `fl` and `ground_type`;
/// they cannot be set from outside and are refreshed by [`SiteRecord::derive`].
#[derive(Debug, Clone, PartialEq)]
pub struct SiteRecord {
    id: String,
    fl: Option<f64>,
    ground_type: String,
    lat: Option<f64>,
    lon: Option<f64>,
    note: Option<String>,
    risk_level: RiskLevel,
    suggestion: String,
}

impl SiteRecord {
    pub fn new(id: impl Into<String>, fl: Option<f64>, ground_type: impl Into<String>) -> Self {
        let mut rec = Self {
            id: id.into(),
            fl,
            ground_type: ground_type.into(),
            lat: None,
            lon: None,
            note: None,
            risk_level: RiskLevel::Unknown,
            suggestion: String::new(),
        };
        rec.derive();
        rec
    }

    pub fn with_coordinates(mut self, lat: Option<f64>, lon: Option<f64>) -> Self {
        self.lat = lat;
        self.lon = lon;
        self
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.set_note(note);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fl(&self) -> Option<f64> {
        self.fl
    }

    pub fn ground_type(&self) -> &str {
        &self.ground_type
    }

    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    pub fn lon(&self) -> Option<f64> {
        self.lon
    }

    /// Remark text, `None` when absent or blank.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    // Input setters leave the derived columns untouched; the owning
    // session runs the derived-column pass after each mutation.

    pub(crate) fn set_fl(&mut self, fl: Option<f64>) {
        self.fl = fl;
    }

    pub(crate) fn set_ground_type(&mut self, ground_type: String) {
        self.ground_type = ground_type;
    }

    pub(crate) fn set_note(&mut self, note: Option<String>) {
        self.note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
    }

    /// Recompute `risk_level` and `suggestion` from the current inputs.
    pub(crate) fn derive(&mut self) {
        self.risk_level = compute_risk_level(self.fl);
        self.suggestion = suggest_foundation(self.fl, &self.ground_type).to_string();
    }
}

/// Ordered, normalized site table.
///
/// `has_coordinates` is decided once when the table is built: it is true
/// only when the source carried both a `lat` and a `lon` column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteTable {
    records: Vec<SiteRecord>,
    has_coordinates: bool,
}

impl SiteTable {
    pub fn new(records: Vec<SiteRecord>, has_coordinates: bool) -> Self {
        Self {
            records,
            has_coordinates,
        }
    }

    pub fn records(&self) -> &[SiteRecord] {
        &self.records
    }

    pub fn has_coordinates(&self) -> bool {
        self.has_coordinates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn records_mut(&mut self) -> &mut Vec<SiteRecord> {
        &mut self.records
    }
}
