//! Risk result types
//!
//! Output side of a risk computation: the rounded percentage, its clinical
//! band and the fixed advisory text.

use crate::model::ModelVersion;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory attached to every result
pub const DISCLAIMER: &str =
    "Clinical Decision Support Only. Not a substitute for professional medical judgment.";

/// Clinical risk band for a 10-year ASCVD estimate
///
/// | Band         | Risk percent  |
/// |--------------|---------------|
/// | Low          | < 5           |
/// | Borderline   | 5 – < 7.5     |
/// | Intermediate | 7.5 – < 20    |
/// | High         | >= 20         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Borderline,
    Intermediate,
    High,
}

impl RiskCategory {
    /// Band name with its numeric range, as shown to clinicians
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low (<5%)",
            RiskCategory::Borderline => "Borderline (5-7.4%)",
            RiskCategory::Intermediate => "Intermediate (7.5-19.9%)",
            RiskCategory::High => "High (≥20%)",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskCategory::Low => "Low",
            RiskCategory::Borderline => "Borderline",
            RiskCategory::Intermediate => "Intermediate",
            RiskCategory::High => "High",
        };
        f.write_str(name)
    }
}

/// Result of a successful risk computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    /// 10-year risk in percent, two decimal places. Not clipped.
    pub risk_percent: Decimal,
    pub risk_category: RiskCategory,
    pub model_version: ModelVersion,
    pub disclaimer: String,
}

impl RiskResult {
    pub fn new(
        risk_percent: Decimal,
        risk_category: RiskCategory,
        model_version: ModelVersion,
    ) -> Self {
        Self {
            risk_percent,
            risk_category,
            model_version,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}
